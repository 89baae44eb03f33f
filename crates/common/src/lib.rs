/**
 * Cryptographic types and operations.
 *  - Curve-domain parameters for the fixed NIST P-256 group
 *  - Hex and PEM codecs with scalar and point validation
 *  - Key-pair generation and container persistence
 *  - ECDH shared-secret agreement
 */
pub mod crypto;

pub mod prelude {
    pub use crate::crypto::{agree, CurveDomain, PrivateKey, PublicKey, SharedSecret};
}
