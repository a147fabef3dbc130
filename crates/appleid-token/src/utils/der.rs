//! DER encoding of RSA public keys
//!
//! Apple publishes its signing keys as bare modulus/exponent pairs. aws-lc-rs
//! verifies against a SubjectPublicKeyInfo, built here with the RustCrypto
//! `der` and `spki` crates.

use crate::error::{Error, Result};
use crate::limits::MAX_RSA_MODULUS_SIZE;
use der::asn1::{AnyRef, BitString, UintRef};
use der::{Encode, Sequence};
use spki::{AlgorithmIdentifierOwned, ObjectIdentifier, SubjectPublicKeyInfoOwned};

/// rsaEncryption (PKCS #1)
const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// RSAPublicKey ::= SEQUENCE { modulus INTEGER, publicExponent INTEGER }
#[derive(Sequence)]
struct RsaPublicKey<'a> {
    modulus: UintRef<'a>,
    public_exponent: UintRef<'a>,
}

fn encoding_error(what: &str, details: impl std::fmt::Display) -> Error {
    Error::KeyInvalid(format!("{what}: {details}"))
}

/// Build a DER SubjectPublicKeyInfo from big-endian modulus and exponent bytes
pub(crate) fn rsa_spki(n: &[u8], e: &[u8]) -> Result<Vec<u8>> {
    if n.is_empty() {
        return Err(Error::KeyInvalid("empty RSA modulus".into()));
    }
    if e.is_empty() {
        return Err(Error::KeyInvalid("empty RSA exponent".into()));
    }
    if n.len() > MAX_RSA_MODULUS_SIZE {
        return Err(Error::KeyInvalid(format!(
            "RSA modulus too large: {} bytes (maximum: {} bytes)",
            n.len(),
            MAX_RSA_MODULUS_SIZE
        )));
    }

    let public_key = RsaPublicKey {
        modulus: UintRef::new(n).map_err(|e| encoding_error("RSA modulus", e))?,
        public_exponent: UintRef::new(e).map_err(|e| encoding_error("RSA exponent", e))?,
    }
    .to_der()
    .map_err(|e| encoding_error("RSA public key", e))?;

    let spki = SubjectPublicKeyInfoOwned {
        algorithm: AlgorithmIdentifierOwned {
            oid: RSA_ENCRYPTION_OID,
            parameters: Some(AnyRef::NULL.into()),
        },
        subject_public_key: BitString::new(0, public_key)
            .map_err(|e| encoding_error("bit string", e))?,
    };

    spki.to_der().map_err(|e| encoding_error("SPKI", e))
}
