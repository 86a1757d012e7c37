pub static PRODUCTION_API_URL: &str = "https://api.bitfinex.com/v2/";

/// Prefix of the string that is signed for every authenticated request.
pub(crate) static SIGNATURE_PATH_PREFIX: &str = "/api/v2/";

pub(crate) static AUTH_SEGMENT: &str = "auth";

// Order flags, summed into the `flags` field of new/update payloads.
pub const ORDER_FLAG_HIDDEN: i64 = 64;
pub const ORDER_FLAG_CLOSE: i64 = 512;
pub const ORDER_FLAG_REDUCE_ONLY: i64 = 1024;
pub const ORDER_FLAG_POST_ONLY: i64 = 4096;
pub const ORDER_FLAG_OCO: i64 = 16384;
pub const ORDER_FLAG_NO_VAR_RATES: i64 = 524288;
