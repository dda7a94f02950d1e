use super::{KV_DELIMITER, PPK_V3_HEADER, PRIVATE_LINES_KEY};
use crate::putty::{PrivateLinesPolicy, PuttyError};

use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine;

/// Reader for PPK key-value format.
pub(crate) struct PuttyKvReader<'a> {
    input: std::str::Lines<'a>,
}

impl<'a> PuttyKvReader<'a> {
    pub fn from_str(input: &'a str) -> Self {
        Self {
            input: input.trim().lines(),
        }
    }

    /// Consumes the first line and checks the PPK v3 magic.
    ///
    /// Returns whatever follows the magic (the key algorithm name for well-formed files).
    pub fn read_header(&mut self) -> Result<&'a str, PuttyError> {
        let line = self.input.next().ok_or(PuttyError::NotPpkV3)?;
        let algorithm = line.strip_prefix(PPK_V3_HEADER).ok_or(PuttyError::NotPpkV3)?;

        Ok(algorithm.trim())
    }

    /// Skips lines up to and including the `Private-Lines` marker.
    ///
    /// Returns the number of base64 lines the caller should read next.
    pub fn seek_private_lines(&mut self, policy: PrivateLinesPolicy) -> Result<u16, PuttyError> {
        for line in self.input.by_ref() {
            match policy {
                PrivateLinesPolicy::Fixed(count) => {
                    if is_fixed_marker(line, count) {
                        return Ok(count);
                    }
                }
                PrivateLinesPolicy::FromMarker => {
                    let Some((key, value)) = line.split_once(KV_DELIMITER) else {
                        continue;
                    };

                    if key != PRIVATE_LINES_KEY {
                        continue;
                    }

                    // NOTE: u16 is enough for the line count of any RSA key PuTTY generates.
                    return value.parse().map_err(|_| PuttyError::InvalidPrivateLinesCount {
                        actual: value.to_string(),
                    });
                }
            }
        }

        Err(PuttyError::PrivateKeySectionNotFound)
    }

    /// Concatenates the next `lines_count` lines and decodes them as standard base64.
    ///
    /// ASCII whitespace inside the lines is not part of the encoding and is dropped.
    pub fn next_base64_lines(&mut self, lines_count: u16) -> Result<Vec<u8>, PuttyError> {
        let mut encoded = String::new();

        for found in 0..lines_count {
            // NOTE: newlines are only used to split the base64 data and are not part of it.
            let line = self.input.next().ok_or(PuttyError::PrivateLinesMissing {
                expected: lines_count,
                found,
            })?;
            encoded.extend(line.chars().filter(|c| !c.is_ascii_whitespace()));
        }

        Ok(BASE64_ENGINE.decode(encoded)?)
    }
}

fn is_fixed_marker(line: &str, count: u16) -> bool {
    line.strip_prefix(PRIVATE_LINES_KEY)
        .and_then(|rest| rest.strip_prefix(KV_DELIMITER))
        .map_or(false, |value| value == count.to_string())
}
