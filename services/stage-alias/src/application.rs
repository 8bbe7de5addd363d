// アプリケーション層モジュール
pub mod alias_info_handler;
pub mod converter_handler;

// 再エクスポート
pub use alias_info_handler::AliasInfoHandler;
pub use converter_handler::{CONVERTER_MESSAGE, ConverterHandler};
