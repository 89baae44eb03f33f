use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::ProjectivePoint;
use zeroize::Zeroize;

use super::curve::CurveDomain;
use super::keys::{PrivateKey, PublicKey};

/// Errors that can occur during shared-secret agreement
#[derive(Debug, thiserror::Error)]
pub enum AgreementError {
    #[error("agreement failed: shared point is the identity element")]
    IdentitySharedPoint,
    #[error("agreement failed: expected a {expected}-byte shared value, got {actual}")]
    SharedValueLength { expected: usize, actual: usize },
}

/// Shared secret derived from one ECDH agreement
///
/// Opaque bytes with no structure beyond their length, rendered once for
/// display and then discarded. The buffer is wiped on drop.
pub struct SharedSecret(Vec<u8>);

impl SharedSecret {
    /// Raw agreed bytes, the big-endian x-coordinate of the shared point
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Fixed-width uppercase hex display form
    pub fn to_hex(&self) -> String {
        hex::encode_upper(&self.0)
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Compute the ECDH shared secret between a local private key and a
/// remote public key.
///
/// The remote point is multiplied by the local scalar and the encoded
/// x-coordinate of the product is the agreed value, always exactly one
/// field element wide. A shared point at the identity element is
/// rejected here regardless of what the underlying arithmetic reports.
pub fn agree(
    domain: &CurveDomain,
    private: &PrivateKey,
    public: &PublicKey,
) -> Result<SharedSecret, AgreementError> {
    let scalar = private.0.to_nonzero_scalar();
    let shared = ProjectivePoint::from(*public.0.as_affine()) * scalar.as_ref();
    if shared == ProjectivePoint::IDENTITY {
        return Err(AgreementError::IdentitySharedPoint);
    }

    let encoded = shared.to_affine().to_encoded_point(false);
    let x = encoded.x().ok_or(AgreementError::IdentitySharedPoint)?;
    if x.len() != domain.agreed_value_size() {
        return Err(AgreementError::SharedValueLength {
            expected: domain.agreed_value_size(),
            actual: x.len(),
        });
    }
    Ok(SharedSecret(x.to_vec()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::crypto::codec::{decode_private_scalar, decode_public_point};
    use crate::crypto::keystore::generate_pair;

    const GENERATOR_X_HEX: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";
    const GENERATOR_Y_HEX: &str = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

    fn domain() -> CurveDomain {
        CurveDomain::nist_p256()
    }

    #[test]
    fn test_agreement_is_symmetric() {
        let (alice_private, alice_public) = generate_pair(&domain());
        let (bob_private, bob_public) = generate_pair(&domain());

        let alice_secret = agree(&domain(), &alice_private, &bob_public).unwrap();
        let bob_secret = agree(&domain(), &bob_private, &alice_public).unwrap();
        assert_eq!(alice_secret.as_bytes(), bob_secret.as_bytes());
    }

    #[test]
    fn test_different_peers_disagree() {
        let (alice_private, _) = generate_pair(&domain());
        let (_, bob_public) = generate_pair(&domain());
        let (_, carol_public) = generate_pair(&domain());

        let with_bob = agree(&domain(), &alice_private, &bob_public).unwrap();
        let with_carol = agree(&domain(), &alice_private, &carol_public).unwrap();
        assert_ne!(with_bob.as_bytes(), with_carol.as_bytes());
    }

    #[test]
    fn test_scalar_one_agrees_to_base_point_x() {
        let one = format!("{:0>64}", "1");
        let private_key = decode_private_scalar(&domain(), &one).unwrap();
        let raw = format!("{}{}", GENERATOR_X_HEX, GENERATOR_Y_HEX);
        let public_key = decode_public_point(&domain(), &raw).unwrap();

        let secret = agree(&domain(), &private_key, &public_key).unwrap();
        assert_eq!(secret.as_bytes(), hex::decode(GENERATOR_X_HEX).unwrap());
        assert_eq!(secret.to_hex(), GENERATOR_X_HEX.to_uppercase());
    }

    #[test]
    fn test_secret_is_one_field_element() {
        let (private_key, _) = generate_pair(&domain());
        let (_, peer_public) = generate_pair(&domain());

        let secret = agree(&domain(), &private_key, &peer_public).unwrap();
        assert_eq!(secret.as_bytes().len(), 32);

        let hex = secret.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
    }
}
