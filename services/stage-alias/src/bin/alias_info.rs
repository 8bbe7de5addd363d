/// エイリアス情報 Lambdaエントリポイント
///
/// API Gatewayのステージ経由で呼び出され、呼び出し元エンドポイントと
/// 関数バージョン・エイリアスを埋め込んだメッセージを返す。
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use stage_alias::application::AliasInfoHandler;
use stage_alias::domain::{ApiGatewayTarget, FunctionIdentity, ProxyResponse};
use stage_alias::infrastructure::{AliasConfig, init_logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    // エイリアス設定はコールドスタート時に一度だけ読み込む
    let config = AliasConfig::from_env();
    info!(alias_override = ?config.alias_override, "エイリアス情報Lambda関数を初期化");

    let alias_handler = AliasInfoHandler::new(config);
    let alias_handler_ref = &alias_handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(alias_handler_ref, event).await
    }))
    .await
}

/// Lambda関数のメインハンドラー
///
/// # 処理フロー
/// 1. コンテキストから関数名とバージョンを取得
/// 2. AliasInfoHandlerでメッセージを生成
/// 3. プロキシ統合レスポンスを返却
async fn handler(
    alias_handler: &AliasInfoHandler,
    event: LambdaEvent<Value>,
) -> Result<ProxyResponse, Error> {
    let identity = FunctionIdentity::from_context(&event.context);

    // ログ用（ハンドラー内でも同じ抽出を行う）
    let target = ApiGatewayTarget::from_event(&event.payload);

    info!(
        request_id = %event.context.request_id,
        function_name = %identity.function_name,
        function_version = %identity.function_version,
        stage = %target.stage,
        "エイリアス情報リクエスト受信"
    );

    let response = alias_handler.handle(&event.payload, &identity)?;

    Ok(response)
}
