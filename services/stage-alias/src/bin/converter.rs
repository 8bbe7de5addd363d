/// converter Lambdaエントリポイント
///
/// API Gatewayプロキシ統合から呼び出され、固定メッセージを返す。
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use stage_alias::application::ConverterHandler;
use stage_alias::domain::{FunctionIdentity, ProxyResponse};
use stage_alias::infrastructure::init_logging;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    info!("converter Lambda関数を初期化");

    lambda_runtime::run(service_fn(handler)).await
}

/// Lambda関数のメインハンドラー
///
/// イベント本文は参照しない。ログ用にコンテキストのみ読む。
async fn handler(event: LambdaEvent<Value>) -> Result<ProxyResponse, Error> {
    let identity = FunctionIdentity::from_context(&event.context);

    info!(
        request_id = %event.context.request_id,
        function_name = %identity.function_name,
        function_version = %identity.function_version,
        "converterリクエスト受信"
    );

    let response = ConverterHandler::new().handle()?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::{Config, Context};
    use serde_json::json;
    use std::sync::Arc;

    fn create_context() -> Context {
        let mut config = Config::default();
        config.function_name = "converter".to_string();
        config.version = "$LATEST".to_string();

        let mut context = Context::default();
        context.request_id = "test-request-id".to_string();
        context.env_config = Arc::new(config);
        context
    }

    /// どんなイベントでも同じレスポンスを返す
    #[tokio::test]
    async fn test_handler_ignores_event() {
        init_logging();

        let events = [
            json!({}),
            json!({"requestContext": {"stage": "prod"}}),
            Value::Null,
        ];

        for payload in events {
            let response = handler(LambdaEvent::new(payload, create_context()))
                .await
                .unwrap();

            assert_eq!(
                serde_json::to_value(&response).unwrap(),
                json!({
                    "statusCode": 200,
                    "body": "\"Hello from converter lambda LATEST and DEV Alias!\"",
                    "headers": {"Content-Type": "application/json"}
                })
            );
        }
    }

    #[tokio::test]
    async fn test_handler_with_default_context() {
        init_logging();

        let response = handler(LambdaEvent::new(json!({}), Context::default()))
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);
    }
}
