use common::crypto::{
    agree, decode_private, decode_public, AgreementError, CodecError, CurveDomain,
    PrivateKeyInput, PublicKeyInput,
};

/// Derive the ECDH shared secret between a private and a public key.
#[derive(Debug, Clone)]
pub struct Agree {
    pub private: String,
    pub public: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AgreeError {
    #[error("key error: {0}")]
    KeyFailed(#[from] CodecError),
    #[error(transparent)]
    AgreementFailed(#[from] AgreementError),
}

impl Agree {
    pub fn execute(&self) -> Result<String, AgreeError> {
        let domain = CurveDomain::nist_p256();
        let private_key = decode_private(&domain, &PrivateKeyInput::classify(&self.private))?;
        let public_key = decode_public(&domain, &PublicKeyInput::classify(&self.public))?;

        let secret = agree(&domain, &private_key, &public_key)?;

        let (x, y) = public_key.coordinates();
        let output = format!(
            "Private key:    {}\n\
             \n\
             Public key (X): {}\n\
             Public key (Y): {}\n\
             \n\
             Agreed shared secret key: {}",
            private_key.to_hex(),
            x,
            y,
            secret.to_hex()
        );

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATOR_X_HEX: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";
    const GENERATOR_Y_HEX: &str = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

    #[test]
    fn test_agree_scalar_one_with_base_point() {
        let op = Agree {
            private: format!("{:0>64}", "1"),
            public: format!("{}{}", GENERATOR_X_HEX, GENERATOR_Y_HEX),
        };

        let output = op.execute().unwrap();
        let expected = format!(
            "Agreed shared secret key: {}",
            GENERATOR_X_HEX.to_uppercase()
        );
        assert!(output.contains(&expected));
        assert!(output.contains(&format!("Public key (Y): {}", GENERATOR_Y_HEX)));
    }

    #[test]
    fn test_agree_matches_between_hex_and_container_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let domain = CurveDomain::nist_p256();
        let (private_key, public_key) = common::crypto::generate_pair(&domain);
        let (peer_private, peer_public) = common::crypto::generate_pair(&domain);

        let private_path = dir.path().join("private.pem");
        let public_path = dir.path().join("public.pem");
        common::crypto::save_private_container(&private_path, &private_key).unwrap();
        common::crypto::save_public_container(&public_path, &peer_public).unwrap();

        let from_files = Agree {
            private: private_path.to_str().unwrap().to_string(),
            public: public_path.to_str().unwrap().to_string(),
        }
        .execute()
        .unwrap();

        let (x, y) = public_key.coordinates();
        let from_hex = Agree {
            private: peer_private.to_hex(),
            public: format!("{}{}", x, y),
        }
        .execute()
        .unwrap();

        let secret_line = |s: &str| {
            s.lines()
                .find(|line| line.starts_with("Agreed shared secret key:"))
                .map(str::to_string)
        };
        assert_eq!(secret_line(&from_files), secret_line(&from_hex));
        assert!(secret_line(&from_files).is_some());
    }

    #[test]
    fn test_agree_rejects_off_curve_point() {
        let op = Agree {
            private: format!("{:0>64}", "1"),
            public: format!("{}{}", GENERATOR_X_HEX, "0".repeat(64)),
        };
        assert!(matches!(op.execute(), Err(AgreeError::KeyFailed(_))));
    }
}
