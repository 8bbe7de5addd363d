/// 関数識別情報
///
/// 実行環境が提供するLambda関数名とバージョン。
/// ハンドラーへは明示的な引数として渡し、グローバル状態からは読まない。
use lambda_runtime::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionIdentity {
    /// Lambda関数名
    pub function_name: String,
    /// 実行中の関数バージョン（$LATEST または数値）
    pub function_version: String,
}

impl FunctionIdentity {
    pub fn new(function_name: impl Into<String>, function_version: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            function_version: function_version.into(),
        }
    }

    /// Lambdaランタイムの呼び出しコンテキストから作成
    pub fn from_context(context: &Context) -> Self {
        Self::new(
            context.env_config.function_name.clone(),
            context.env_config.version.clone(),
        )
    }
}
