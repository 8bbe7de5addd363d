// エイリアス設定
//
// 環境変数からLambdaエイリアス名の上書き設定を読み込む。
// 未設定の場合はステージ名からエイリアスを導出する。

use tracing::debug;

/// 環境変数名: エイリアス名の上書き
pub const ENV_FUNCTION_ALIAS: &str = "FUNCTION_ALIAS";

/// エイリアス設定
///
/// コールドスタート時に一度だけ読み込まれる不変データ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasConfig {
    /// 固定のエイリアス名（FUNCTION_ALIAS環境変数、空文字はNone扱い）
    pub alias_override: Option<String>,
}

impl AliasConfig {
    /// 環境変数から設定を読み込み
    pub fn from_env() -> Self {
        let alias_override = std::env::var(ENV_FUNCTION_ALIAS)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        debug!(alias_override = ?alias_override, "エイリアス設定を読み込み");

        Self { alias_override }
    }

    /// テスト用に明示的な値で作成
    pub fn new(alias_override: Option<String>) -> Self {
        Self { alias_override }
    }

    /// 表示するエイリアス名を決定
    ///
    /// 上書き設定があればそれを、なければステージ名を大文字化して返す。
    pub fn resolve_alias(&self, stage: &str) -> String {
        match &self.alias_override {
            Some(alias) => alias.to_uppercase(),
            None => stage.to_uppercase(),
        }
    }
}
