//! Inbound callback validation.
//!
//! Three schemes exist on the platform and are deliberately kept separate:
//! application-signed callbacks (Verification/Voice, see
//! [`crate::ApplicationSigner::verify_request`]), nonce-based signatures
//! (Conversation), and single-header secret signatures (Numbers).

mod nonce;
mod secret;

pub use nonce::{
    NONCE_HEADER, SIGNATURE_HEADER as NONCE_SIGNATURE_HEADER, TIMESTAMP_HEADER,
    validate_nonce_signature,
};
pub use secret::{SIGNATURE_HEADER as SECRET_SIGNATURE_HEADER, validate_secret_signature};
