//! Typed errors for the key-extraction and token-signing core.

use pkcs8::ObjectIdentifier;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The input is not a single PEM-armored EC private key.
    #[error("not a valid EC private key PEM")]
    InvalidKeyFormat,

    /// Well-formed EC key, but on a curve ES256 cannot sign with.
    #[error("unsupported curve {0}, ES256 requires P-256")]
    UnsupportedCurve(ObjectIdentifier),

    /// The ECDSA primitive rejected the scalar/digest pairing.
    #[error("ECDSA signing failed")]
    SigningFailed(#[source] p256::ecdsa::signature::Error),

    #[error("claims serialization failed")]
    Json(#[from] serde_json::Error),
}
