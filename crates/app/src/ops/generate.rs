use std::path::Path;

use common::crypto::{
    generate_pair, save_generated_pair, CodecError, CurveDomain, GENERATED_PRIVATE_KEY_FILE,
    GENERATED_PUBLIC_KEY_FILE,
};

/// Generate a key pair and save both keys under the fixed file names.
#[derive(Debug, Clone)]
pub struct Generate;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("generate failed: {0}")]
    SaveFailed(#[from] CodecError),
}

impl Generate {
    pub fn execute(&self) -> Result<String, GenerateError> {
        let domain = CurveDomain::nist_p256();
        let (private_key, public_key) = generate_pair(&domain);
        save_generated_pair(Path::new("."), &private_key, &public_key)?;

        let (x, y) = public_key.coordinates();
        let output = format!(
            "---------- Generated private/public key pair ---------\n\
             \n\
             Private key:    {}\n\
             \n\
             Public key (X): {}\n\
             Public key (Y): {}\n\
             \n\
             \n\
             --> Saving private key to '{}'\n\
             --> Saving public key to  '{}'\n\
             \n\
             Start using those keys next time.",
            private_key.to_hex(),
            x,
            y,
            GENERATED_PRIVATE_KEY_FILE,
            GENERATED_PUBLIC_KEY_FILE
        );

        Ok(output)
    }
}
