use crate::putty::key_value::PuttyKvReader;
use crate::putty::private_key::PpkRsaPrivateKey;
use crate::putty::PuttyError;
use std::fmt;
use std::str::FromStr;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Line count the converter expects after the `Private-Lines` marker unless told otherwise.
pub const DEFAULT_PRIVATE_LINES: u16 = 14;

/// How the `Private-Lines` marker is located and how many lines are read after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivateLinesPolicy {
    /// Only the exact marker `Private-Lines: <n>` is accepted, and `n` lines are read.
    Fixed(u16),
    /// Any `Private-Lines` marker is accepted, and the count it declares is read.
    FromMarker,
}

impl Default for PrivateLinesPolicy {
    fn default() -> Self {
        Self::Fixed(DEFAULT_PRIVATE_LINES)
    }
}

/// Unencrypted PuTTY Private Key (PPK) file, format version 3.
///
/// Only the pieces needed for conversion are kept: the algorithm named on the header line and
/// the decoded private key section. Encryption, comment, public lines and MAC are not read.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Ppk {
    algorithm: String,
    private_key: Vec<u8>,
}

impl Ppk {
    /// Parses a PPK document, locating the private key section according to `policy`.
    pub fn from_str_with_policy(input: &str, policy: PrivateLinesPolicy) -> Result<Self, PuttyError> {
        let mut reader = PuttyKvReader::from_str(input);

        let algorithm = reader.read_header()?.to_owned();
        let lines_count = reader.seek_private_lines(policy)?;
        let private_key = reader.next_base64_lines(lines_count)?;

        log::debug!(
            "decoded {} bytes from {} private key lines ({})",
            private_key.len(),
            lines_count,
            algorithm
        );

        Ok(Self { algorithm, private_key })
    }

    /// Returns the key algorithm named on the header line.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Returns the decoded private key section.
    pub fn private_key_blob(&self) -> &[u8] {
        &self.private_key
    }

    /// Extracts the RSA key fields from the private key section.
    pub fn rsa_private_key(&self) -> Result<PpkRsaPrivateKey, PuttyError> {
        PpkRsaPrivateKey::from_private_blob(&self.private_key)
    }
}

impl FromStr for Ppk {
    type Err = PuttyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_str_with_policy(input, PrivateLinesPolicy::default())
    }
}

impl fmt::Debug for Ppk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ppk")
            .field("algorithm", &self.algorithm)
            .field("private_key", &format_args!("<{} bytes>", self.private_key.len()))
            .finish()
    }
}
