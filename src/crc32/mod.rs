/// CRC32-C hashing for winnowing fingerprints.
///
/// Table-driven reflected CRC32 over the Castagnoli polynomial. The table is
/// built once with [`Crc32Table::new`] and shared by reference — it is
/// read-only after construction, so any number of fingerprinting runs can
/// use the same instance.
// Reversed CRC32-C (Castagnoli) polynomial.
const POLYNOMIAL: u32 = 0x82F6_3B78;

/// Precomputed lookup table for the reflected CRC32-C algorithm.
pub struct Crc32Table([u32; 256]);

impl Crc32Table {
    /// Derive the 256-entry table: 8 rounds of shift-or-xor per byte value.
    pub fn new() -> Self {
        let mut table = [0u32; 256];
        for (n, entry) in table.iter_mut().enumerate() {
            let mut c = n as u32;
            for _ in 0..8 {
                c = if c & 1 != 0 {
                    POLYNOMIAL ^ (c >> 1)
                } else {
                    c >> 1
                };
            }
            *entry = c;
        }
        Self(table)
    }

    /// One rolling step: consume a single byte into the running register.
    fn step(&self, crc: u32, byte: u8) -> u32 {
        (crc >> 8) ^ self.0[((crc ^ byte as u32) & 0xFF) as usize]
    }

    /// CRC32-C over a byte sequence: all-ones seed, final inversion.
    ///
    /// Operates on raw byte values, so the result is identical regardless of
    /// platform or locale. Check value: `checksum(b"123456789") == 0xE3069283`.
    pub fn checksum(&self, bytes: &[u8]) -> u32 {
        let mut crc = !0u32;
        for &byte in bytes {
            crc = self.step(crc, byte);
        }
        !crc
    }

    /// CRC32-C over the four little-endian bytes of a 32-bit value.
    pub fn checksum_u32(&self, value: u32) -> u32 {
        let mut crc = !0u32;
        for byte in value.to_le_bytes() {
            crc = self.step(crc, byte);
        }
        !crc
    }
}

impl Default for Crc32Table {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
