//! Little-endian cursor over a chunk payload.

/// Not enough bytes left in the payload for a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Exhausted {
    /// Absolute buffer offset the read started at.
    pub offset: usize,
    pub needed: usize,
    pub available: usize,
}

/// Cursor over a payload slice.
///
/// `base` is the payload's offset in the whole file, so errors can point at
/// absolute positions.
pub(crate) struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8], base: usize) -> Self {
        Self { data, pos: 0, base }
    }

    /// Bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Fail unless at least `needed` more bytes are available.
    pub fn ensure(&self, needed: usize) -> Result<(), Exhausted> {
        if needed > self.remaining() {
            return Err(Exhausted {
                offset: self.base + self.pos,
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    pub fn take(&mut self, len: usize) -> Result<&'a [u8], Exhausted> {
        self.ensure(len)?;
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), Exhausted> {
        self.take(len).map(|_| ())
    }

    pub fn read_u16(&mut self) -> Result<u16, Exhausted> {
        self.array().map(u16::from_le_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32, Exhausted> {
        self.array().map(u32::from_le_bytes)
    }

    pub fn read_f32(&mut self) -> Result<f32, Exhausted> {
        self.array().map(f32::from_le_bytes)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], Exhausted> {
        let mut out = [0; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        let mut reader = ByteReader::new(&data, 0);
        assert_eq!(reader.read_u32(), Ok(0x0403_0201));
        assert_eq!(reader.read_u16(), Ok(0x0605));
        assert_eq!(reader.consumed(), 6);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn exhaustion_reports_absolute_offset() {
        let data = [0u8; 5];
        let mut reader = ByteReader::new(&data, 100);
        reader.skip(3).unwrap();
        assert_eq!(
            reader.read_u32(),
            Err(Exhausted {
                offset: 103,
                needed: 4,
                available: 2,
            })
        );
        // A failed read does not move the cursor.
        assert_eq!(reader.consumed(), 3);
    }
}
