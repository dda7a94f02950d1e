use crate::pem::Pem;
use crate::putty::{PpkRsaPrivateKey, RSA_KEY_TYPE};
use crate::ssh::encode::{SshComplexTypeEncode, SshWriteExt};
use std::fmt;
use std::io::{self, Write};

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

pub const RSA_PRIVATE_KEY_PEM_LABEL: &str = "RSA PRIVATE KEY";

/// RSA private key in the length-prefixed OpenSSH field layout.
///
/// Encoded as the `ssh-rsa` tag followed by `n`, `e`, `d`, `p`, `q` and `iqmp`, each prefixed by
/// its 4-byte big-endian length. Fields are copied byte for byte: no leading zero is added or
/// stripped and no big integer arithmetic is performed.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SshRsaPrivateKey {
    n: Vec<u8>,
    e: Vec<u8>,
    d: Vec<u8>,
    p: Vec<u8>,
    q: Vec<u8>,
    iqmp: Vec<u8>,
}

impl SshRsaPrivateKey {
    pub fn from_components(n: &[u8], e: &[u8], d: &[u8], p: &[u8], q: &[u8], iqmp: &[u8]) -> Self {
        Self {
            n: n.to_vec(),
            e: e.to_vec(),
            d: d.to_vec(),
            p: p.to_vec(),
            q: q.to_vec(),
            iqmp: iqmp.to_vec(),
        }
    }

    pub fn to_raw(&self) -> Result<Zeroizing<Vec<u8>>, io::Error> {
        let mut buffer = Zeroizing::new(Vec::with_capacity(self.encoded_len()));
        self.encode(&mut *buffer)?;
        Ok(buffer)
    }

    pub fn to_pem(&self) -> Result<String, io::Error> {
        let raw = self.to_raw()?;
        let pem = Pem::new(RSA_PRIVATE_KEY_PEM_LABEL, raw.as_slice()).to_string();
        log::debug!("encoded {} bytes of key data into {} bytes of PEM", raw.len(), pem.len());
        Ok(pem)
    }

    fn fields(&self) -> [&[u8]; 6] {
        [&self.n, &self.e, &self.d, &self.p, &self.q, &self.iqmp]
    }

    fn encoded_len(&self) -> usize {
        4 + RSA_KEY_TYPE.len() + self.fields().iter().map(|field| 4 + field.len()).sum::<usize>()
    }
}

impl From<&PpkRsaPrivateKey> for SshRsaPrivateKey {
    fn from(key: &PpkRsaPrivateKey) -> Self {
        Self::from_components(key.n(), key.e(), key.d(), key.p(), key.q(), key.iqmp())
    }
}

impl SshComplexTypeEncode for SshRsaPrivateKey {
    type Error = io::Error;

    fn encode(&self, mut stream: impl Write) -> Result<(), Self::Error> {
        stream.write_ssh_string(RSA_KEY_TYPE)?;
        for field in self.fields() {
            stream.write_ssh_bytes(field)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SshRsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SshRsaPrivateKey")
            .field("n", &format_args!("<{} bytes>", self.n.len()))
            .finish_non_exhaustive()
    }
}
