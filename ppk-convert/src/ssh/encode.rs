use byteorder::{BigEndian, WriteBytesExt};
use std::io::{self, Write};

pub trait SshWriteExt {
    type Error;

    fn write_ssh_u32(&mut self, value: u32) -> Result<(), Self::Error>;
    fn write_ssh_string(&mut self, data: &str) -> Result<(), Self::Error>;
    fn write_ssh_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T> SshWriteExt for T
where
    T: Write,
{
    type Error = io::Error;

    fn write_ssh_u32(&mut self, value: u32) -> Result<(), Self::Error> {
        self.write_u32::<BigEndian>(value)
    }

    fn write_ssh_string(&mut self, data: &str) -> Result<(), Self::Error> {
        self.write_ssh_bytes(data.as_bytes())
    }

    fn write_ssh_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let size = u32::try_from(data.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "field is longer than u32::MAX bytes"))?;
        self.write_u32::<BigEndian>(size)?;
        self.write_all(data)
    }
}

pub trait SshComplexTypeEncode {
    type Error;

    fn encode(&self, stream: impl Write) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_length_prefix_before_data() {
        let mut out = Vec::new();
        out.write_ssh_string("ssh-rsa").unwrap();
        out.write_ssh_bytes(&[0x00, 0x80]).unwrap();

        assert_eq!(
            out,
            [0, 0, 0, 7, b's', b's', b'h', b'-', b'r', b's', b'a', 0, 0, 0, 2, 0x00, 0x80]
        );
    }

    #[test]
    fn leading_zero_bytes_are_kept() {
        let mut out = Vec::new();
        out.write_ssh_bytes(&[0, 0, 1]).unwrap();

        assert_eq!(out, [0, 0, 0, 3, 0, 0, 1]);
    }
}
