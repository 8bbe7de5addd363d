// API Gatewayプロキシ統合レスポンス
//
// Lambdaの戻り値としてAPI Gatewayに返すレスポンス形式を定義する。
// statusCode, body, headersの3フィールドのみを持ち、
// bodyにはJSONエンコード済みの文字列を格納する。

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Content-Typeヘッダー名
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// JSONレスポンスのContent-Type
pub const APPLICATION_JSON: &str = "application/json";

/// レスポンス構築時のエラー型
#[derive(Debug, Error)]
pub enum ResponseError {
    /// 本文のJSONエンコード・デコードに失敗
    #[error("Response body JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// API Gatewayプロキシ統合レスポンス
///
/// JSONシリアライズ時のキーは`statusCode`, `body`, `headers`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    /// HTTPステータスコード
    pub status_code: u16,
    /// JSONエンコード済みの本文
    pub body: String,
    /// レスポンスヘッダー
    pub headers: BTreeMap<String, String>,
}

impl ProxyResponse {
    /// メッセージ文字列をJSON文字列リテラルとして本文に持つ200レスポンスを作成
    ///
    /// 本文はオブジェクトではなく、引用符で囲まれエスケープされた文字列になる。
    ///
    /// # 引数
    /// * `message` - 本文にするメッセージ
    ///
    /// # 戻り値
    /// Content-Type: application/json ヘッダー付きのレスポンス
    pub fn json_message(message: &str) -> Result<Self, ResponseError> {
        let body = serde_json::to_string(message)?;

        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE_HEADER.to_string(), APPLICATION_JSON.to_string());

        Ok(Self {
            status_code: 200,
            body,
            headers,
        })
    }

    /// 本文をJSON文字列としてデコード
    pub fn decoded_message(&self) -> Result<String, ResponseError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
