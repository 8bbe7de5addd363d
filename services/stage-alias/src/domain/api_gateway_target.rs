// API Gateway呼び出し元情報
//
// プロキシ統合イベントのrequestContextから、
// 呼び出し元APIのドメイン・ステージ・リソースパスを取り出すドメイン層コンポーネント。

use serde_json::Value;

/// domainNameが欠落している場合のデフォルト値
pub const DEFAULT_DOMAIN_NAME: &str = "api.example.com";

/// stageが欠落している場合のデフォルト値
pub const DEFAULT_STAGE: &str = "v1";

/// resourcePathが欠落している場合のデフォルト値
pub const DEFAULT_RESOURCE_PATH: &str = "/basic-calc";

/// Lambdaを呼び出したAPI Gatewayのエンドポイント情報
///
/// requestContextの各フィールドは任意であり、欠落または文字列以外の値は
/// デフォルト値で補完する。抽出が失敗することはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiGatewayTarget {
    /// カスタムドメインまたはexecute-apiドメイン
    pub domain_name: String,
    /// デプロイステージ名（例: v1, prod）
    pub stage: String,
    /// リソースパス（先頭スラッシュ付き）
    pub resource_path: String,
}

impl Default for ApiGatewayTarget {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAIN_NAME, DEFAULT_STAGE, DEFAULT_RESOURCE_PATH)
    }
}

impl ApiGatewayTarget {
    /// 明示的な値で作成
    pub fn new(
        domain_name: impl Into<String>,
        stage: impl Into<String>,
        resource_path: impl Into<String>,
    ) -> Self {
        Self {
            domain_name: domain_name.into(),
            stage: stage.into(),
            resource_path: resource_path.into(),
        }
    }

    /// プロキシ統合イベントから呼び出し元情報を抽出
    ///
    /// # 引数
    /// * `event` - API Gatewayプロキシ統合イベント
    ///
    /// # 戻り値
    /// 欠落フィールドをデフォルト値で補完したApiGatewayTarget
    pub fn from_event(event: &Value) -> Self {
        // requestContextがオブジェクトでなければ全フィールド欠落として扱う
        let request_context = event.get("requestContext").filter(|ctx| ctx.is_object());

        let field = |key: &str, default: &str| -> String {
            request_context
                .and_then(|ctx| ctx.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            domain_name: field("domainName", DEFAULT_DOMAIN_NAME),
            stage: field("stage", DEFAULT_STAGE),
            resource_path: field("resourcePath", DEFAULT_RESOURCE_PATH),
        }
    }

    /// `{domain_name}/{stage}{resource_path}` 形式のAPIエンドポイント
    pub fn api_endpoint(&self) -> String {
        format!("{}/{}{}", self.domain_name, self.stage, self.resource_path)
    }
}
