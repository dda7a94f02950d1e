//! SSH wire encoding: big-endian, length-prefixed fields.

pub mod decode;
pub mod encode;
pub mod private_key;

pub use private_key::{SshRsaPrivateKey, RSA_PRIVATE_KEY_PEM_LABEL};
