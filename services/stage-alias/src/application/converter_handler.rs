// 固定メッセージを返すconverterハンドラー
//
// 入力イベントとコンテキストを参照せず、常に同じ本文を返す。

use crate::domain::{ProxyResponse, ResponseError};

/// converterハンドラーが返す固定メッセージ
pub const CONVERTER_MESSAGE: &str = "Hello from converter lambda LATEST and DEV Alias!";

/// 固定メッセージハンドラー
#[derive(Debug, Clone, Copy, Default)]
pub struct ConverterHandler;

impl ConverterHandler {
    pub fn new() -> Self {
        Self
    }

    /// 固定メッセージの200レスポンスを生成
    pub fn handle(&self) -> Result<ProxyResponse, ResponseError> {
        ProxyResponse::json_message(CONVERTER_MESSAGE)
    }
}
