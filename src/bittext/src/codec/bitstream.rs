//! Bitstream reader and writer for byte-aligned bit strings.

/// Bitstream reader yielding the bits of a byte slice, MSB-first
pub(crate) struct BitReader<'a> {
    bytes: &'a [u8],
    bit_offset: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            bit_offset: 0,
        }
    }

    /// Read the next bit, or None once the stream is exhausted
    pub fn read_bit(&mut self) -> Option<u8> {
        let byte_idx = self.bit_offset / 8;
        let bit_idx = 7 - (self.bit_offset % 8); // Read from MSB (bit 7) down to LSB (bit 0)

        let byte = *self.bytes.get(byte_idx)?;
        self.bit_offset += 1;
        Some((byte >> bit_idx) & 1)
    }

    /// Returns the number of bits remaining in the stream
    pub fn remaining_bits(&self) -> usize {
        let total_bits = self.bytes.len() * 8;
        total_bits.saturating_sub(self.bit_offset)
    }
}

impl Iterator for BitReader<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.read_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining_bits();
        (remaining, Some(remaining))
    }
}

/// Bitstream writer assembling whole bytes, MSB-first
pub(crate) struct BitWriter {
    bytes: Vec<u8>,
    current: u8,
    bit_offset: usize,
}

impl BitWriter {
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits / 8),
            current: 0,
            bit_offset: 0,
        }
    }

    /// Write one bit; only the lowest bit of `bit` is used
    pub fn write_bit(&mut self, bit: u8) {
        self.current = (self.current << 1) | (bit & 1);
        self.bit_offset += 1;

        if self.bit_offset % 8 == 0 {
            self.bytes.push(self.current);
            self.current = 0;
        }
    }

    /// Bits written since the last completed byte
    pub fn pending_bits(&self) -> usize {
        self.bit_offset % 8
    }

    /// Get the completed bytes. A trailing partial byte is discarded, not padded.
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_msb_first() {
        let mut reader = BitReader::new(&[0b1000_0001]);
        assert_eq!(reader.read_bit(), Some(1));
        for _ in 0..6 {
            assert_eq!(reader.read_bit(), Some(0));
        }
        assert_eq!(reader.read_bit(), Some(1));
        assert_eq!(reader.read_bit(), None);
    }

    #[test]
    fn test_remaining_bits() {
        let mut reader = BitReader::new(&[0xFF, 0xFF]);
        assert_eq!(reader.remaining_bits(), 16);
        reader.read_bit();
        assert_eq!(reader.remaining_bits(), 15);
        assert_eq!(reader.count(), 15);
    }

    #[test]
    fn test_write_whole_bytes() {
        let mut writer = BitWriter::with_capacity(16);
        for bit in [0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1] {
            writer.write_bit(bit);
        }
        assert_eq!(writer.pending_bits(), 0);
        assert_eq!(writer.finish(), vec![0x41, 0xFF]);
    }

    #[test]
    fn test_partial_byte_dropped() {
        let mut writer = BitWriter::with_capacity(11);
        for bit in [1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0] {
            writer.write_bit(bit);
        }
        assert_eq!(writer.pending_bits(), 3);
        assert_eq!(writer.finish(), vec![0xFF]);
    }

    #[test]
    fn test_reader_feeds_writer() {
        let input = b"Hi!";
        let mut writer = BitWriter::with_capacity(input.len() * 8);
        for bit in BitReader::new(input) {
            writer.write_bit(bit);
        }
        assert_eq!(writer.finish(), input.to_vec());
    }
}
