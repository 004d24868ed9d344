use super::*;

#[test]
fn table_entry_zero_is_zero() {
    let table = Crc32Table::new();
    assert_eq!(table.0[0], 0);
}

#[test]
fn checksum_matches_crc32c_check_value() {
    // Standard CRC32-C check value over the nine ASCII digits.
    let table = Crc32Table::new();
    assert_eq!(table.checksum(b"123456789"), 0xE306_9283);
}

#[test]
fn checksum_empty_is_zero() {
    let table = Crc32Table::new();
    assert_eq!(table.checksum(b""), 0);
}

#[test]
fn checksum_is_deterministic() {
    let table = Crc32Table::new();
    let a = table.checksum(b"the quick brown fox");
    let b = table.checksum(b"the quick brown fox");
    assert_eq!(a, b);
}

#[test]
fn checksum_sensitive_to_single_byte() {
    let table = Crc32Table::new();
    assert_ne!(table.checksum(b"abcdef"), table.checksum(b"abcdeg"));
}

#[test]
fn checksum_u32_equals_checksum_of_le_bytes() {
    let table = Crc32Table::new();
    for value in [0u32, 1, 0xFF, 0x1234_5678, 0xDEAD_BEEF, u32::MAX] {
        assert_eq!(
            table.checksum_u32(value),
            table.checksum(&value.to_le_bytes()),
            "value {value:#x}"
        );
    }
}

#[test]
fn checksum_u32_distinguishes_byte_order() {
    // 0x00000001 and 0x01000000 decompose into different byte sequences.
    let table = Crc32Table::new();
    assert_ne!(table.checksum_u32(0x0000_0001), table.checksum_u32(0x0100_0000));
}

#[test]
fn default_builds_same_table() {
    let a = Crc32Table::default();
    let b = Crc32Table::new();
    assert_eq!(a.checksum(b"parity"), b.checksum(b"parity"));
}
