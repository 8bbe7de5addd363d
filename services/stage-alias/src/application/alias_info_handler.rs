// エイリアス情報ハンドラー
//
// API Gatewayのステージ情報と関数のバージョン情報から、
// どのエイリアス経由で呼び出されたかを示すメッセージを組み立てる。

use serde_json::Value;

use crate::domain::{ApiGatewayTarget, FunctionIdentity, ProxyResponse, ResponseError};
use crate::infrastructure::AliasConfig;

/// エイリアス情報ハンドラー
///
/// 呼び出しごとの状態は持たず、同じ入力には常に同じレスポンスを返す。
#[derive(Debug, Clone, Default)]
pub struct AliasInfoHandler {
    config: AliasConfig,
}

impl AliasInfoHandler {
    /// 新しいハンドラーを作成
    ///
    /// # 引数
    /// * `config` - エイリアス設定
    pub fn new(config: AliasConfig) -> Self {
        Self { config }
    }

    /// 呼び出し元情報と関数情報からメッセージを生成
    ///
    /// 形式: `This is {関数名} lambda called from API {エンドポイント} ... version: {バージョン} with {エイリアス} Alias!`
    pub fn build_message(&self, target: &ApiGatewayTarget, identity: &FunctionIdentity) -> String {
        let alias = self.config.resolve_alias(&target.stage);

        format!(
            "This is {} lambda called from API {} ... version: {} with {} Alias!",
            identity.function_name,
            target.api_endpoint(),
            identity.function_version,
            alias
        )
    }

    /// プロキシ統合イベントを処理してレスポンスを生成
    ///
    /// # 処理フロー
    /// 1. requestContextからドメイン・ステージ・リソースパスを抽出（欠落時はデフォルト値）
    /// 2. エイリアス名とAPIエンドポイントを導出
    /// 3. メッセージをJSON文字列として本文に格納
    ///
    /// # 引数
    /// * `event` - API Gatewayプロキシ統合イベント
    /// * `identity` - 実行中の関数情報
    pub fn handle(
        &self,
        event: &Value,
        identity: &FunctionIdentity,
    ) -> Result<ProxyResponse, ResponseError> {
        let target = ApiGatewayTarget::from_event(event);
        let message = self.build_message(&target, identity);

        ProxyResponse::json_message(&message)
    }
}
