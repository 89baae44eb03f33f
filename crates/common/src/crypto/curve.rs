//! Parameters of the supported elliptic-curve group.

/// Description of the elliptic-curve group a run operates over.
///
/// Exactly one curve is supported (NIST P-256), but the domain is an
/// explicit value handed to every codec, keystore, and agreement function
/// rather than ambient process state. It carries the byte-level layout of
/// the group; the group arithmetic itself lives in the `p256` types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveDomain {
    name: &'static str,
    scalar_size: usize,
    field_element_size: usize,
}

impl CurveDomain {
    /// The NIST P-256 (secp256r1) domain.
    pub const fn nist_p256() -> Self {
        CurveDomain {
            name: "NIST P-256",
            scalar_size: 32,
            field_element_size: 32,
        }
    }

    /// Human-readable curve name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Byte length of a private exponent.
    pub fn scalar_size(&self) -> usize {
        self.scalar_size
    }

    /// Byte length of one point coordinate.
    pub fn field_element_size(&self) -> usize {
        self.field_element_size
    }

    /// Hex length of a private scalar (64 for P-256).
    pub fn scalar_hex_len(&self) -> usize {
        self.scalar_size * 2
    }

    /// Hex length of a compressed public point: the x-coordinate alone,
    /// with the parity byte implicit (64 for P-256).
    pub fn compressed_point_hex_len(&self) -> usize {
        self.field_element_size * 2
    }

    /// Hex length of a raw x||y public point (128 for P-256).
    pub fn raw_point_hex_len(&self) -> usize {
        self.field_element_size * 4
    }

    /// Byte length of an agreed ECDH value: the encoded x-coordinate of
    /// the shared point (32 for P-256).
    pub fn agreed_value_size(&self) -> usize {
        self.field_element_size
    }
}

impl Default for CurveDomain {
    fn default() -> Self {
        Self::nist_p256()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_p256_wire_lengths() {
        let domain = CurveDomain::nist_p256();
        assert_eq!(domain.scalar_hex_len(), 64);
        assert_eq!(domain.compressed_point_hex_len(), 64);
        assert_eq!(domain.raw_point_hex_len(), 128);
        assert_eq!(domain.agreed_value_size(), 32);
        assert_eq!(domain.name(), "NIST P-256");
    }

    #[test]
    fn test_default_is_p256() {
        assert_eq!(CurveDomain::default(), CurveDomain::nist_p256());
    }
}
