use p256::elliptic_curve::sec1::ToEncodedPoint;
use zeroize::Zeroizing;

/// Public key on the NIST P-256 curve
///
/// A thin wrapper around the `p256` crate's `PublicKey`, representing a
/// validated affine point. The inner type can only hold a point that is on
/// the curve and not the identity element, so holding a `PublicKey` is
/// proof that validation already happened. Construction from untrusted hex
/// or container bytes goes through the codec, which performs that
/// validation and reports failures as typed errors.
///
/// # Examples
///
/// ```ignore
/// let (private_key, public_key) = generate_pair(&CurveDomain::nist_p256());
///
/// // Render the affine coordinates for display
/// let (x, y) = public_key.coordinates();
/// println!("Public key (X): {x}");
/// println!("Public key (Y): {y}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey(pub(crate) p256::PublicKey);

impl From<p256::PublicKey> for PublicKey {
    fn from(key: p256::PublicKey) -> Self {
        PublicKey(key)
    }
}

impl PublicKey {
    /// Affine coordinates as zero-padded lowercase hex strings, `(x, y)`.
    ///
    /// Each string is exactly twice the field-element size (64 characters
    /// for P-256), with leading zeroes preserved.
    pub fn coordinates(&self) -> (String, String) {
        let point = self.0.to_encoded_point(false);
        let x = point.x().map(hex::encode).unwrap_or_default();
        let y = point.y().map(hex::encode).unwrap_or_default();
        (x, y)
    }

    /// Uncompressed SEC1 encoding of the point (65 bytes for P-256).
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        self.0.to_encoded_point(false).as_bytes().to_vec()
    }
}

/// Private key on the NIST P-256 curve
///
/// A thin wrapper around the `p256` crate's `SecretKey`, holding a scalar
/// that is guaranteed non-zero and below the group order. The inner buffer
/// is wiped when the key is dropped.
///
/// # Examples
///
/// ```ignore
/// let key = decode_private_scalar(&CurveDomain::nist_p256(), hex_str)?;
/// let public_key = key.public();
///
/// // Serialize back to hex for display
/// let hex = key.to_hex();
/// ```
#[derive(Debug, Clone)]
pub struct PrivateKey(pub(crate) p256::SecretKey);

impl From<p256::SecretKey> for PrivateKey {
    fn from(key: p256::SecretKey) -> Self {
        PrivateKey(key)
    }
}

impl PrivateKey {
    /// Derive the public key from this private key
    pub fn public(&self) -> PublicKey {
        PublicKey(self.0.public_key())
    }

    /// Secret scalar as 32 big-endian bytes; the buffer is wiped on drop
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_bytes().to_vec())
    }

    /// Secret scalar as a zero-padded lowercase hex string (64 characters)
    pub fn to_hex(&self) -> String {
        hex::encode(self.0.to_bytes())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // Affine coordinates of the P-256 base point.
    const GENERATOR_X_HEX: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";
    const GENERATOR_Y_HEX: &str = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

    fn key_from_scalar_bytes(bytes: &[u8; 32]) -> PrivateKey {
        p256::SecretKey::from_slice(bytes).unwrap().into()
    }

    #[test]
    fn test_hex_is_zero_padded() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0x0f;
        let key = key_from_scalar_bytes(&bytes);

        let hex = key.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.starts_with("00000000"));
        assert!(hex.ends_with("0f"));
    }

    #[test]
    fn test_scalar_one_derives_base_point() {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        let key = key_from_scalar_bytes(&bytes);

        let (x, y) = key.public().coordinates();
        assert_eq!(x, GENERATOR_X_HEX);
        assert_eq!(y, GENERATOR_Y_HEX);
    }

    #[test]
    fn test_sec1_encoding_is_uncompressed() {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        let public_key = key_from_scalar_bytes(&bytes).public();

        let sec1 = public_key.to_sec1_bytes();
        assert_eq!(sec1.len(), 65);
        assert_eq!(sec1[0], 0x04);
        assert_eq!(hex::encode(&sec1[1..33]), GENERATOR_X_HEX);
        assert_eq!(hex::encode(&sec1[33..]), GENERATOR_Y_HEX);
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x01;
        bytes[31] = 0xaa;
        let key = key_from_scalar_bytes(&bytes);

        assert_eq!(key.to_bytes().as_slice(), &bytes);
        assert_eq!(key.to_hex(), hex::encode(bytes));
    }
}
