use std::path::PathBuf;

use common::crypto::{
    decode_private, decode_public, resolve_private_output, resolve_public_output,
    save_private_container, save_public_container, CodecError, CurveDomain, PrivateKeyInput,
    PublicKeyInput,
};

/// Save a single private key, given as hex or a container path, to a
/// PEM file.
#[derive(Debug, Clone)]
pub struct PersistPrivate {
    pub private: String,
    pub output: Option<PathBuf>,
}

/// Save a single public key, given as hex or a container path, to a
/// PEM file.
#[derive(Debug, Clone)]
pub struct PersistPublic {
    pub public: String,
    pub output: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("key error: {0}")]
    KeyFailed(#[from] CodecError),
}

impl PersistPrivate {
    pub fn execute(&self) -> Result<String, PersistError> {
        let domain = CurveDomain::nist_p256();
        let input = PrivateKeyInput::classify(&self.private);
        let key = decode_private(&domain, &input)?;

        let path = resolve_private_output(self.output.clone());
        save_private_container(&path, &key)?;

        let output = format!(
            "--> Saving private key to '{}'\n\
             Private key:    {}\n",
            path.display(),
            key.to_hex()
        );

        Ok(output)
    }
}

impl PersistPublic {
    pub fn execute(&self) -> Result<String, PersistError> {
        let domain = CurveDomain::nist_p256();
        let input = PublicKeyInput::classify(&self.public);
        let key = decode_public(&domain, &input)?;

        let path = resolve_public_output(self.output.clone());
        save_public_container(&path, &key)?;

        let (x, y) = key.coordinates();
        let output = format!(
            "--> Saving public key to  '{}'\n\
             Public key (X): {}\n\
             Public key (Y): {}\n",
            path.display(),
            x,
            y
        );

        Ok(output)
    }
}
