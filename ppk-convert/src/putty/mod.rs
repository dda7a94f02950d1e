//! PuTTY private key format described in [Appendix C][1] of the PuTTY User Manual.
//!
//! Only unencrypted version 3 files holding RSA keys are supported, and only the private key
//! section is read.
//!
//! [1]: https://the.earth.li/~sgtatham/putty/0.75/htmldoc/AppendixC.html#ppk

mod error;
mod key_value;
mod ppk;
mod private_key;

pub use error::PuttyError;
pub use ppk::{Ppk, PrivateLinesPolicy, DEFAULT_PRIVATE_LINES};
pub use private_key::{PpkRsaPrivateKey, RSA_KEY_TYPE};
