//! Cryptographic core for eckex
//!
//! This module holds everything the tool knows about NIST P-256 keys:
//!
//! - **Curve domain**: explicit `CurveDomain` parameters threaded through
//!   every operation instead of ambient curve state
//! - **Codec**: hex and PEM decoding with full validation, classification
//!   of command-line inputs, and container persistence
//! - **Keystore**: key-pair generation and the fixed default file names
//! - **Agreement**: ECDH shared-secret derivation
//!
//! # Validation Model
//!
//! Untrusted bytes only become a [`PrivateKey`] or [`PublicKey`] through
//! the codec, which enforces the wire formats:
//!
//! 1. Private scalars are one field element of hex, non-zero and below
//!    the group order
//! 2. Public points arrive either as a bare x-coordinate (decompressed
//!    with an even-y parity byte) or as a raw x||y pair, and both forms
//!    must satisfy the curve equation
//! 3. PEM containers are trusted for their *kind* (the tag) but their
//!    payloads are re-validated like any other input
//!
//! Once constructed, the key types are valid by construction and the
//! agreement step cannot be fed an unchecked point.

mod agreement;
mod codec;
mod curve;
mod keys;
mod keystore;

pub use agreement::{agree, AgreementError, SharedSecret};
pub use codec::{
    decode_private, decode_private_scalar, decode_public, decode_public_point, load_container,
    save_private_container, save_public_container, CodecError, KeyContainer, PrivateKeyInput,
    PublicKeyInput, CONTAINER_SUFFIX, PRIVATE_KEY_TAG, PUBLIC_KEY_TAG,
};
pub use curve::CurveDomain;
pub use keys::{PrivateKey, PublicKey};
pub use keystore::{
    generate_pair, resolve_private_output, resolve_public_output, save_generated_pair,
    DEFAULT_PRIVATE_KEY_FILE, DEFAULT_PUBLIC_KEY_FILE, GENERATED_PRIVATE_KEY_FILE,
    GENERATED_PUBLIC_KEY_FILE,
};
