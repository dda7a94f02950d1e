//! Line-level access to the PuTTY key-value text format.

mod reader;

pub(crate) use reader::PuttyKvReader;

const KV_DELIMITER: &str = ": ";

/// Magic prefix of the first line of every version 3 PPK file.
pub(crate) const PPK_V3_HEADER: &str = "PuTTY-User-Key-File-3:";

/// Key of the marker preceding the base64-encoded private key lines.
pub(crate) const PRIVATE_LINES_KEY: &str = "Private-Lines";
