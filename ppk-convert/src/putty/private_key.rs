use crate::putty::PuttyError;
use crate::ssh::decode::SshReadExt;
use std::fmt;
use std::io;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Key type expected in the private key section of an RSA key.
pub const RSA_KEY_TYPE: &str = "ssh-rsa";

/// RSA key fields carried by the private key section of a PPK file.
///
/// Integers are kept as the raw big-endian byte strings found in the file, leading zero bytes
/// included. No arithmetic relation between them (`p * q == n` and friends) is checked.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PpkRsaPrivateKey {
    key_type: String,
    n: Vec<u8>,
    e: Vec<u8>,
    d: Vec<u8>,
    p: Vec<u8>,
    q: Vec<u8>,
    iqmp: Vec<u8>,
}

impl PpkRsaPrivateKey {
    /// Walks the private key section left to right.
    ///
    /// Layout: a 4-byte header that is skipped, then the key type string and the `n`, `e`, `d`,
    /// `p`, `q` and `iqmp` integers, each prefixed by its 4-byte big-endian length. Bytes
    /// following `iqmp` are ignored.
    pub fn from_private_blob(blob: &[u8]) -> Result<Self, PuttyError> {
        let mut cursor = blob;

        cursor.read_ssh_u32().map_err(truncated("header"))?;

        let key_type = cursor.read_ssh_bytes().map_err(truncated("key type"))?;
        let key_type = String::from_utf8(key_type).map_err(|_| PuttyError::InvalidKeyTypeEncoding)?;
        log::debug!("private key section holds a `{}` key", key_type);

        let n = read_field(&mut cursor, "n")?;
        let e = read_field(&mut cursor, "e")?;
        let d = read_field(&mut cursor, "d")?;
        let p = read_field(&mut cursor, "p")?;
        let q = read_field(&mut cursor, "q")?;
        let iqmp = read_field(&mut cursor, "iqmp")?;

        if !cursor.is_empty() {
            log::debug!("ignoring {} trailing bytes after iqmp", cursor.len());
        }

        Ok(Self {
            key_type,
            n,
            e,
            d,
            p,
            q,
            iqmp,
        })
    }

    /// Fails unless the embedded key type is `ssh-rsa`.
    pub fn ensure_rsa(&self) -> Result<(), PuttyError> {
        if self.key_type == RSA_KEY_TYPE {
            Ok(())
        } else {
            Err(PuttyError::UnsupportedKeyType(self.key_type.clone()))
        }
    }

    /// Returns the key type string found in the private key section.
    pub fn key_type(&self) -> &str {
        &self.key_type
    }

    /// Modulus.
    pub fn n(&self) -> &[u8] {
        &self.n
    }

    /// Public exponent.
    pub fn e(&self) -> &[u8] {
        &self.e
    }

    /// Private exponent.
    pub fn d(&self) -> &[u8] {
        &self.d
    }

    /// First prime.
    pub fn p(&self) -> &[u8] {
        &self.p
    }

    /// Second prime.
    pub fn q(&self) -> &[u8] {
        &self.q
    }

    /// `q^-1 mod p`.
    pub fn iqmp(&self) -> &[u8] {
        &self.iqmp
    }
}

impl fmt::Debug for PpkRsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PpkRsaPrivateKey")
            .field("key_type", &self.key_type)
            .field("n", &format_args!("<{} bytes>", self.n.len()))
            .finish_non_exhaustive()
    }
}

fn read_field(cursor: &mut &[u8], field: &'static str) -> Result<Vec<u8>, PuttyError> {
    let value = cursor.read_ssh_bytes().map_err(truncated(field))?;
    log::trace!("{}: {} bytes", field, value.len());
    Ok(value)
}

fn truncated(field: &'static str) -> impl Fn(io::Error) -> PuttyError {
    move |e| match e.kind() {
        io::ErrorKind::UnexpectedEof => PuttyError::TruncatedData { field },
        _ => PuttyError::Io(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssh::encode::SshWriteExt;
    use rstest::rstest;

    const N: &[u8] = &[0x00, 0xC3, 0x5A, 0x11, 0x07];
    const E: &[u8] = &[0x01, 0x00, 0x01];
    const D: &[u8] = &[0x3F, 0x22, 0x9A];
    const P: &[u8] = &[0x00, 0xF1];
    const Q: &[u8] = &[0xE3];
    const IQMP: &[u8] = &[0x5D, 0x00];

    fn private_blob(key_type: &[u8], fields: &[&[u8]]) -> Vec<u8> {
        let mut blob = Vec::new();
        blob.write_ssh_u32(0xDEAD_BEEF).unwrap();
        blob.write_ssh_bytes(key_type).unwrap();
        for field in fields {
            blob.write_ssh_bytes(field).unwrap();
        }
        blob
    }

    #[test]
    fn fields_are_returned_unchanged_in_order() {
        let blob = private_blob(b"ssh-rsa", &[N, E, D, P, Q, IQMP]);
        let key = PpkRsaPrivateKey::from_private_blob(&blob).unwrap();

        assert_eq!(key.key_type(), "ssh-rsa");
        assert_eq!(key.n(), N);
        assert_eq!(key.e(), E);
        assert_eq!(key.d(), D);
        assert_eq!(key.p(), P);
        assert_eq!(key.q(), Q);
        assert_eq!(key.iqmp(), IQMP);
    }

    #[test]
    fn empty_fields_are_accepted() {
        let blob = private_blob(b"ssh-rsa", &[N, &[], D, P, &[], IQMP]);
        let key = PpkRsaPrivateKey::from_private_blob(&blob).unwrap();

        assert!(key.e().is_empty());
        assert!(key.q().is_empty());
        assert_eq!(key.iqmp(), IQMP);
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut blob = private_blob(b"ssh-rsa", &[N, E, D, P, Q, IQMP]);
        blob.extend_from_slice(&[0xAA; 7]);

        let key = PpkRsaPrivateKey::from_private_blob(&blob).unwrap();
        assert_eq!(key.iqmp(), IQMP);
    }

    #[rstest]
    #[case(0, "header")]
    #[case(3, "header")]
    #[case(4, "key type")]
    #[case(10, "key type")]
    #[case(15, "n")]
    #[case(23, "n")]
    #[case(24, "e")]
    #[case(50, "iqmp")]
    #[case(54, "iqmp")]
    fn truncation_names_the_field(#[case] len: usize, #[case] expected: &str) {
        let blob = private_blob(b"ssh-rsa", &[N, E, D, P, Q, IQMP]);
        assert_eq!(blob.len(), 55);

        match PpkRsaPrivateKey::from_private_blob(&blob[..len]) {
            Err(PuttyError::TruncatedData { field }) => assert_eq!(field, expected),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn final_field_longer_than_buffer() {
        let mut blob = private_blob(b"ssh-rsa", &[N, E, D, P, Q]);
        blob.write_ssh_u32(1024).unwrap();
        blob.extend_from_slice(IQMP);

        assert!(matches!(
            PpkRsaPrivateKey::from_private_blob(&blob),
            Err(PuttyError::TruncatedData { field: "iqmp" })
        ));
    }

    #[test]
    fn key_type_is_not_checked_by_default() {
        let blob = private_blob(b"ssh-dss", &[N, E, D, P, Q, IQMP]);
        let key = PpkRsaPrivateKey::from_private_blob(&blob).unwrap();

        assert_eq!(key.key_type(), "ssh-dss");
        assert!(matches!(key.ensure_rsa(), Err(PuttyError::UnsupportedKeyType(t)) if t == "ssh-dss"));
    }

    #[test]
    fn ensure_rsa_accepts_ssh_rsa() {
        let blob = private_blob(b"ssh-rsa", &[N, E, D, P, Q, IQMP]);
        PpkRsaPrivateKey::from_private_blob(&blob).unwrap().ensure_rsa().unwrap();
    }

    #[test]
    fn key_type_must_be_utf8() {
        let blob = private_blob(&[0xFF, 0xFE], &[N, E, D, P, Q, IQMP]);

        assert!(matches!(
            PpkRsaPrivateKey::from_private_blob(&blob),
            Err(PuttyError::InvalidKeyTypeEncoding)
        ));
    }
}
