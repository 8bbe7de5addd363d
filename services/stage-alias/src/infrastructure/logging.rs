/// ログ基盤モジュール
///
/// CloudWatch Logs向けにJSON形式の構造化ログを出力する。
/// ハンドラー本体はログを出さず、エントリポイント側でのみ使用する。
use std::sync::Once;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Lambda環境向けのログサブスクライバーを初期化する
///
/// ログレベルは環境変数`RUST_LOG`で指定し、未設定ならinfo。
/// 複数回呼び出しても最初の一回のみ初期化する。
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .flatten_event(true)
            .with_current_span(false);

        // テストから先に別のサブスクライバーが登録されていても失敗させない
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init();
    });
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_idempotent() {
        init_logging();
        init_logging();
        init_test_logging();
        init_test_logging();
    }

    /// 呼び出し単位のフィールド付きログが出力できることを確認
    #[test]
    fn test_log_with_invocation_fields() {
        init_test_logging();

        let span = tracing::info_span!("invocation", request_id = "req-123");
        let _guard = span.enter();

        tracing::info!(
            function_name = "MyFunc",
            function_version = "3",
            stage = "prod",
            "リクエスト処理"
        );
        tracing::debug!(alias = "PROD", "エイリアス決定");
    }

    /// JSON形式のレイヤーを構築できることを確認
    #[test]
    fn test_json_logging_configuration() {
        let env_filter = EnvFilter::new("info");
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .flatten_event(true);

        let _subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer);
    }
}
