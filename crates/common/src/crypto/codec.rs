use std::path::{Path, PathBuf};

use p256::elliptic_curve::sec1::FromEncodedPoint;
use p256::EncodedPoint;
use zeroize::Zeroizing;

use super::curve::CurveDomain;
use super::keys::{PrivateKey, PublicKey};

/// File suffix that selects the PEM container form during classification
pub const CONTAINER_SUFFIX: &str = ".pem";

/// PEM tag of a stored private key
pub const PRIVATE_KEY_TAG: &str = "EC PRIVATE KEY";
/// PEM tag of a stored public key
pub const PUBLIC_KEY_TAG: &str = "EC PUBLIC KEY";

/// Errors that can occur while decoding, loading, or saving key material
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid length: expected {expected} hex characters, got {actual}")]
    InvalidLength { expected: String, actual: usize },
    #[error("invalid encoding: input contains non-hexadecimal characters")]
    InvalidEncoding,
    #[error("scalar is outside the valid range (0, order)")]
    ScalarOutOfRange,
    #[error("point is not on the curve")]
    PointNotOnCurve,
    #[error("malformed container: {0}")]
    MalformedContainer(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A private-key argument, resolved to its input form at the boundary.
///
/// Classification is by file suffix alone: an argument ending in `.pem`
/// names a container on disk, anything else is taken as a literal hex
/// scalar. Content is never sniffed, so a key file under any other name
/// must be renamed before use (known limitation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivateKeyInput {
    ContainerPath(PathBuf),
    HexScalar(String),
}

impl PrivateKeyInput {
    pub fn classify(arg: &str) -> Self {
        if arg.ends_with(CONTAINER_SUFFIX) {
            PrivateKeyInput::ContainerPath(PathBuf::from(arg))
        } else {
            PrivateKeyInput::HexScalar(arg.to_string())
        }
    }
}

/// A public-key argument, resolved to its input form at the boundary.
///
/// Same suffix rule as [`PrivateKeyInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyInput {
    ContainerPath(PathBuf),
    HexPoint(String),
}

impl PublicKeyInput {
    pub fn classify(arg: &str) -> Self {
        if arg.ends_with(CONTAINER_SUFFIX) {
            PublicKeyInput::ContainerPath(PathBuf::from(arg))
        } else {
            PublicKeyInput::HexPoint(arg.to_string())
        }
    }
}

/// One key reconstructed from a PEM container
#[derive(Debug, Clone)]
pub enum KeyContainer {
    Private(PrivateKey),
    Public(PublicKey),
}

/// Resolve a classified private-key input to a validated key.
pub fn decode_private(
    domain: &CurveDomain,
    input: &PrivateKeyInput,
) -> Result<PrivateKey, CodecError> {
    match input {
        PrivateKeyInput::ContainerPath(path) => match load_container(domain, path)? {
            KeyContainer::Private(key) => Ok(key),
            KeyContainer::Public(_) => Err(CodecError::MalformedContainer(format!(
                "'{}' holds a public key, expected a private key",
                path.display()
            ))),
        },
        PrivateKeyInput::HexScalar(hex_str) => decode_private_scalar(domain, hex_str),
    }
}

/// Resolve a classified public-key input to a validated key.
pub fn decode_public(
    domain: &CurveDomain,
    input: &PublicKeyInput,
) -> Result<PublicKey, CodecError> {
    match input {
        PublicKeyInput::ContainerPath(path) => match load_container(domain, path)? {
            KeyContainer::Public(key) => Ok(key),
            KeyContainer::Private(_) => Err(CodecError::MalformedContainer(format!(
                "'{}' holds a private key, expected a public key",
                path.display()
            ))),
        },
        PublicKeyInput::HexPoint(hex_str) => decode_public_point(domain, hex_str),
    }
}

/// Decode a hex string into a validated private scalar.
///
/// The string must be exactly one scalar wide (64 characters for P-256)
/// and is read as a big-endian unsigned integer. Zero and anything at or
/// above the group order are rejected.
pub fn decode_private_scalar(
    domain: &CurveDomain,
    hex_str: &str,
) -> Result<PrivateKey, CodecError> {
    if hex_str.len() != domain.scalar_hex_len() {
        return Err(CodecError::InvalidLength {
            expected: domain.scalar_hex_len().to_string(),
            actual: hex_str.len(),
        });
    }
    ensure_hex(hex_str)?;

    let bytes = Zeroizing::new(hex::decode(hex_str).map_err(|_| CodecError::InvalidEncoding)?);
    let secret = p256::SecretKey::from_slice(&bytes).map_err(|_| CodecError::ScalarOutOfRange)?;
    Ok(secret.into())
}

/// Decode a hex string into a validated public point.
///
/// Two widths are accepted. At one field element (64 characters) the
/// string names the x-coordinate of a compressed point with the parity
/// byte fixed to `02`, so the variant of the point with odd y cannot be
/// expressed in this form. At two field elements (128 characters) the
/// string carries the raw x||y pair. Both paths check that the point
/// satisfies the curve equation and both reject the identity element.
pub fn decode_public_point(domain: &CurveDomain, hex_str: &str) -> Result<PublicKey, CodecError> {
    let compressed_len = domain.compressed_point_hex_len();
    let raw_len = domain.raw_point_hex_len();
    if hex_str.len() != compressed_len && hex_str.len() != raw_len {
        return Err(CodecError::InvalidLength {
            expected: format!("{} or {}", compressed_len, raw_len),
            actual: hex_str.len(),
        });
    }
    ensure_hex(hex_str)?;

    let public = if hex_str.len() == compressed_len {
        let bytes = hex::decode(format!("02{}", hex_str)).map_err(|_| CodecError::InvalidEncoding)?;
        p256::PublicKey::from_sec1_bytes(&bytes).map_err(|_| CodecError::PointNotOnCurve)?
    } else {
        let bytes = hex::decode(hex_str).map_err(|_| CodecError::InvalidEncoding)?;
        let x = p256::FieldBytes::from_slice(&bytes[..domain.field_element_size()]);
        let y = p256::FieldBytes::from_slice(&bytes[domain.field_element_size()..]);
        let point = EncodedPoint::from_affine_coordinates(x, y, false);
        Option::from(p256::PublicKey::from_encoded_point(&point))
            .ok_or(CodecError::PointNotOnCurve)?
    };
    Ok(public.into())
}

/// Load a PEM container and reconstruct the typed key it holds.
///
/// The PEM tag decides the kind: [`PRIVATE_KEY_TAG`] payloads must be
/// exactly one scalar wide and in range, [`PUBLIC_KEY_TAG`] payloads must
/// be a valid SEC1 point encoding. Any other tag is rejected.
pub fn load_container(domain: &CurveDomain, path: &Path) -> Result<KeyContainer, CodecError> {
    let text = std::fs::read_to_string(path)?;
    let block = pem::parse(text)
        .map_err(|e| CodecError::MalformedContainer(format!("failed to parse PEM: {}", e)))?;
    tracing::debug!(path = %path.display(), tag = block.tag(), "loaded key container");

    match block.tag() {
        PRIVATE_KEY_TAG => {
            let contents = block.contents();
            if contents.len() != domain.scalar_size() {
                return Err(CodecError::MalformedContainer(format!(
                    "invalid private key size, expected {} bytes, got {}",
                    domain.scalar_size(),
                    contents.len()
                )));
            }
            let secret = p256::SecretKey::from_slice(contents).map_err(|_| {
                CodecError::MalformedContainer("private key scalar is out of range".to_string())
            })?;
            Ok(KeyContainer::Private(secret.into()))
        }
        PUBLIC_KEY_TAG => {
            let public = p256::PublicKey::from_sec1_bytes(block.contents()).map_err(|_| {
                CodecError::MalformedContainer("payload is not a valid curve point".to_string())
            })?;
            Ok(KeyContainer::Public(public.into()))
        }
        tag => Err(CodecError::MalformedContainer(format!(
            "unexpected PEM tag '{}'",
            tag
        ))),
    }
}

/// Serialize a private key into its PEM container and write it to `path`,
/// truncating any existing file.
pub fn save_private_container(path: &Path, key: &PrivateKey) -> Result<(), CodecError> {
    write_container(path, PRIVATE_KEY_TAG, &key.to_bytes())
}

/// Serialize a public key into its PEM container and write it to `path`,
/// truncating any existing file. The point is stored uncompressed.
pub fn save_public_container(path: &Path, key: &PublicKey) -> Result<(), CodecError> {
    write_container(path, PUBLIC_KEY_TAG, &key.to_sec1_bytes())
}

fn write_container(path: &Path, tag: &str, contents: &[u8]) -> Result<(), CodecError> {
    let block = pem::Pem::new(tag, contents);
    std::fs::write(path, pem::encode(&block))?;
    tracing::debug!(path = %path.display(), tag, "wrote key container");
    Ok(())
}

fn ensure_hex(s: &str) -> Result<(), CodecError> {
    if s.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(CodecError::InvalidEncoding)
    }
}
