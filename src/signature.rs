//! HMAC-SHA384 request signing for the authenticated REST API.
//!
//! The signed string is `/api/v2/auth/{r|w}/{path}` followed by the nonce and
//! the raw request body. The hex digest goes in the `bfx-signature` header.

use hmac::{Hmac, Mac};
use sha2::Sha384;

use crate::{prelude::*, Error};

type HmacSha384 = Hmac<Sha384>;

#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    api_secret: String,
}

// Custom Debug so the secret never reaches logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Read credentials from the named environment variables.
    ///
    /// Returns None if either variable is unset.
    pub fn from_env(api_key_env: &str, api_secret_env: &str) -> Option<Self> {
        let api_key = std::env::var(api_key_env).ok()?;
        let api_secret = std::env::var(api_secret_env).ok()?;
        Some(Self::new(api_key, api_secret))
    }

    /// Hex-encoded HMAC-SHA384 of `payload` keyed with the API secret.
    pub fn sign(&self, payload: &str) -> Result<String> {
        sign_payload(&self.api_secret, payload)
    }
}

pub(crate) fn sign_payload(secret: &str, payload: &str) -> Result<String> {
    let mut mac = HmacSha384::new_from_slice(secret.as_bytes())
        .map_err(|e| Error::Signing(e.to_string()))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
