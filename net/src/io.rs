use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Read, Write};

use crate::NetError;

/// Growable byte buffer with a single cursor used for both writing and
/// reading. Write a record, `rewind`, then read it back in the same order.
#[derive(Debug, Default)]
pub struct IoBuffer {
    inner: Cursor<Vec<u8>>,
}

impl IoBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap received bytes, cursor at the start.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            inner: Cursor::new(bytes),
        }
    }

    pub fn rewind(&mut self) {
        self.inner.set_position(0);
    }

    pub fn position(&self) -> usize {
        self.inner.position() as usize
    }

    /// Bytes left between the cursor and the end of the data
    pub fn remaining(&self) -> usize {
        self.inner.get_ref().len().saturating_sub(self.position())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.inner.get_ref()
    }

    pub fn put_u8(&mut self, v: u8) -> Result<(), NetError> {
        Ok(self.inner.write_u8(v)?)
    }

    pub fn put_u16(&mut self, v: u16) -> Result<(), NetError> {
        Ok(self.inner.write_u16::<NetworkEndian>(v)?)
    }

    pub fn put_i16(&mut self, v: i16) -> Result<(), NetError> {
        Ok(self.inner.write_i16::<NetworkEndian>(v)?)
    }

    pub fn get_u8(&mut self) -> Result<u8, NetError> {
        Ok(self.inner.read_u8()?)
    }

    pub fn get_u16(&mut self) -> Result<u16, NetError> {
        Ok(self.inner.read_u16::<NetworkEndian>()?)
    }

    pub fn get_i16(&mut self) -> Result<i16, NetError> {
        Ok(self.inner.read_i16::<NetworkEndian>()?)
    }

    /// Length prefixed (u16) utf-8
    pub fn put_string(&mut self, s: &str) -> Result<(), NetError> {
        let len = u16::try_from(s.len()).map_err(|_| NetError::StringTooLong(s.len()))?;
        self.put_u16(len)?;
        self.inner.write_all(s.as_bytes())?;
        Ok(())
    }

    pub fn get_string(&mut self) -> Result<String, NetError> {
        let len = self.get_u16()? as usize;
        let mut bytes = vec![0u8; len];
        self.inner.read_exact(&mut bytes)?;
        String::from_utf8(bytes).map_err(|_| NetError::InvalidUtf8)
    }
}

#[cfg(test)]
mod tests {
    use super::IoBuffer;
    use crate::NetError;

    #[test]
    fn network_byte_order() {
        let mut buf = IoBuffer::new();
        buf.put_u16(0x0102).unwrap();
        buf.put_i16(-2).unwrap();
        assert_eq!(buf.as_bytes(), &[0x01, 0x02, 0xff, 0xfe]);
    }

    #[test]
    fn string_is_length_prefixed() {
        let mut buf = IoBuffer::new();
        buf.put_string("hi").unwrap();
        assert_eq!(buf.as_bytes(), &[0x00, 0x02, b'h', b'i']);

        buf.rewind();
        assert_eq!(buf.get_string().unwrap(), "hi");
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn short_read_is_an_error() {
        let mut buf = IoBuffer::from_bytes(vec![0x00, 0x05, b'a']);
        assert!(matches!(buf.get_string(), Err(NetError::Io(_))));

        let mut empty = IoBuffer::new();
        assert!(matches!(empty.get_u8(), Err(NetError::Io(_))));
    }

    #[test]
    fn bad_utf8() {
        let mut buf = IoBuffer::from_bytes(vec![0x00, 0x01, 0xff]);
        assert!(matches!(buf.get_string(), Err(NetError::InvalidUtf8)));
    }

    #[test]
    fn oversized_string() {
        let long = "x".repeat(u16::MAX as usize + 1);
        let mut buf = IoBuffer::new();
        assert!(matches!(
            buf.put_string(&long),
            Err(NetError::StringTooLong(65536))
        ));
    }
}
