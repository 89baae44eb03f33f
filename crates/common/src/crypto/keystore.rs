use std::path::{Path, PathBuf};

use rand_core::OsRng;

use super::codec::{self, CodecError};
use super::curve::CurveDomain;
use super::keys::{PrivateKey, PublicKey};

/// Private-key file written by generate mode
pub const GENERATED_PRIVATE_KEY_FILE: &str = "ecc-gen-private-key.pem";
/// Public-key file written by generate mode
pub const GENERATED_PUBLIC_KEY_FILE: &str = "ecc-gen-public-key.pem";
/// Default target of a single private-key save
pub const DEFAULT_PRIVATE_KEY_FILE: &str = "ecc-private-key.pem";
/// Default target of a single public-key save
pub const DEFAULT_PUBLIC_KEY_FILE: &str = "ecc-public-key.pem";

/// Generate a fresh key pair on the domain's curve.
///
/// The scalar is drawn from the operating system RNG and is uniform over
/// the valid range, so the public key is never the identity element.
pub fn generate_pair(domain: &CurveDomain) -> (PrivateKey, PublicKey) {
    let secret = p256::SecretKey::random(&mut OsRng);
    let public = secret.public_key();
    tracing::info!(curve = domain.name(), "generated fresh key pair");
    (secret.into(), public.into())
}

/// Write a generated pair to the two fixed generate-mode files under
/// `dir`, overwriting whatever is there.
pub fn save_generated_pair(
    dir: &Path,
    private: &PrivateKey,
    public: &PublicKey,
) -> Result<(), CodecError> {
    codec::save_private_container(&dir.join(GENERATED_PRIVATE_KEY_FILE), private)?;
    codec::save_public_container(&dir.join(GENERATED_PUBLIC_KEY_FILE), public)
}

/// Target path of a single private-key save: the explicit output if one
/// was given, the fixed default name otherwise.
pub fn resolve_private_output(output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(DEFAULT_PRIVATE_KEY_FILE))
}

/// Target path of a single public-key save: the explicit output if one
/// was given, the fixed default name otherwise.
pub fn resolve_public_output(output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_KEY_FILE))
}
