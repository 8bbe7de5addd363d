// Domain layer modules
pub mod api_gateway_target;
pub mod function_identity;
pub mod proxy_response;

// Re-exports
pub use api_gateway_target::{
    ApiGatewayTarget, DEFAULT_DOMAIN_NAME, DEFAULT_RESOURCE_PATH, DEFAULT_STAGE,
};
pub use function_identity::FunctionIdentity;
pub use proxy_response::{ProxyResponse, ResponseError};
