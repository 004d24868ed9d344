use md5::{Digest, Md5};

/// Hex MD5 digest of a raw buffer, used as the content identifier in
/// fingerprint document headers.
pub fn md5_hex(bytes: &[u8]) -> String {
    format!("{:x}", Md5::digest(bytes))
}

/// Check whether a buffer looks binary by scanning the first 512 bytes
/// for a null byte.
pub fn is_binary(buf: &[u8]) -> bool {
    buf[..buf.len().min(512)].contains(&0)
}

#[cfg(test)]
#[path = "util_test.rs"]
mod tests;
