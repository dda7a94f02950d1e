//! Whole-file conversion.

use crate::putty::PuttyError;
use crate::{ppk_to_openssh, ConvertOptions};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use zeroize::Zeroizing;

/// Reads the PPK file at `input`, converts it and writes the PEM text to `output`.
///
/// The output is first written to a temporary file next to `output` and then renamed over it,
/// so a failed run never leaves a partially written key behind. On Unix the file is created
/// with mode `0600`.
pub fn convert_file(input: &Path, output: &Path, options: &ConvertOptions) -> Result<(), PuttyError> {
    log::debug!("reading {}", input.display());
    let content = Zeroizing::new(std::fs::read_to_string(input).map_err(file_error(input))?);

    let pem = Zeroizing::new(ppk_to_openssh(&content, options)?);

    write_atomically(output, pem.as_bytes())?;
    log::info!("wrote {} bytes to {}", pem.len(), output.display());

    Ok(())
}

fn write_atomically(path: &Path, data: &[u8]) -> Result<(), PuttyError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(file_error(path))?;
    file.write_all(data).map_err(file_error(path))?;
    file.as_file().sync_all().map_err(file_error(path))?;
    file.persist(path).map_err(|e| file_error(path)(e.error))?;

    Ok(())
}

fn file_error(path: &Path) -> impl Fn(io::Error) -> PuttyError + '_ {
    move |source| PuttyError::File {
        path: path.to_path_buf(),
        source,
    }
}
