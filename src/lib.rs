#![deny(unreachable_pub)]

// Core modules
mod consts;
mod errors;
mod helpers;
mod prelude;
mod req;
mod signature;

// Shared utilities
pub mod codec;
pub mod serde_utils;
pub mod types;

// Feature modules
mod orders;

// Re-exports
pub use codec::{Codec, JsonCodec};
pub use consts::{
    ORDER_FLAG_CLOSE, ORDER_FLAG_HIDDEN, ORDER_FLAG_NO_VAR_RATES, ORDER_FLAG_OCO,
    ORDER_FLAG_POST_ONLY, ORDER_FLAG_REDUCE_ONLY, PRODUCTION_API_URL,
};
pub use errors::Error;
pub use helpers::BaseUrl;
pub use orders::*;
pub use req::{AuthenticatedRequest, HttpClient, HttpClientConfig, Permission, RequestExecutor};
pub use signature::Credentials;
pub use types::*;
