use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum PuttyError {
    #[error("not a PPK v3 file")]
    NotPpkV3,
    #[error("private key section not found")]
    PrivateKeySectionNotFound,
    #[error("invalid private lines count: {actual}")]
    InvalidPrivateLinesCount { actual: String },
    #[error("private key section is incomplete: expected {expected} lines, found {found}")]
    PrivateLinesMissing { expected: u16, found: u16 },
    #[error("invalid base64 in private key section")]
    Base64(#[from] base64::DecodeError),
    #[error("truncated or malformed key data while reading {field}")]
    TruncatedData { field: &'static str },
    #[error("key type is not valid UTF-8")]
    InvalidKeyTypeEncoding,
    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("couldn't access `{}`", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
