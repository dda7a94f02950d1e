use byteorder::{BigEndian, ReadBytesExt};
use std::io::{self, Read};

pub trait SshReadExt {
    type Error;

    fn read_ssh_u32(&mut self) -> Result<u32, Self::Error>;
    fn read_ssh_bytes(&mut self) -> Result<Vec<u8>, Self::Error>;
}

impl<T> SshReadExt for T
where
    T: Read,
{
    type Error = io::Error;

    fn read_ssh_u32(&mut self) -> Result<u32, Self::Error> {
        self.read_u32::<BigEndian>()
    }

    fn read_ssh_bytes(&mut self) -> Result<Vec<u8>, Self::Error> {
        let size = self.read_u32::<BigEndian>()? as u64;

        // Declared size is untrusted: read at most that much rather than allocating it.
        let mut buffer = Vec::new();
        self.by_ref().take(size).read_to_end(&mut buffer)?;

        if buffer.len() as u64 != size {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {} bytes, got {}", size, buffer.len()),
            ));
        }

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_length_prefixed_bytes() {
        let mut data: &[u8] = &[0, 0, 0, 3, b'a', b'b', b'c', 0xFF];

        assert_eq!(data.read_ssh_bytes().unwrap(), b"abc");
        assert_eq!(data, &[0xFF]);
    }

    #[test]
    fn reads_empty_field() {
        let mut data: &[u8] = &[0, 0, 0, 0];

        assert!(data.read_ssh_bytes().unwrap().is_empty());
        assert!(data.is_empty());
    }

    #[test]
    fn short_length_prefix_is_eof() {
        let mut data: &[u8] = &[0, 0, 1];

        let err = data.read_ssh_bytes().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn declared_length_past_end_is_eof() {
        let mut data: &[u8] = &[0, 0, 0, 5, 1, 2, 3];

        let err = data.read_ssh_bytes().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn huge_declared_length_does_not_allocate() {
        let mut data: &[u8] = &[0xFF, 0xFF, 0xFF, 0xFF, 1];

        let err = data.read_ssh_bytes().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
