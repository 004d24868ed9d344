use std::error::Error;

/// Document name used when fingerprinting pasted or piped content.
pub const DEFAULT_NAME: &str = "pasted.wfp";

/// Placeholder identifier for content whose digest was not computed.
#[allow(dead_code)]
pub const NULL_DIGEST: &str = "00000000000000000000000000000000";

/// Render a fingerprint hash as exactly 8 lowercase hex characters,
/// zero-padded on the left.
pub fn hex_hash(hash: u32) -> String {
    format!("{hash:08x}")
}

/// Accumulates fingerprints into the line-grouped wfp text format.
///
/// The document opens with a `file=<digest>,<length>,<name>` header line.
/// Each source line that produced fingerprints becomes one record,
/// `<line>=<hex8>[,<hex8>...]`; records are newline-separated and the last
/// record carries no trailing newline.
pub struct DocumentWriter {
    out: String,
    last_line: usize,
}

impl DocumentWriter {
    /// Start a document. The digest must be a 32-character hex string
    /// (see [`NULL_DIGEST`] for the no-digest variant).
    pub fn new(digest: &str, length: usize, name: &str) -> Result<Self, Box<dyn Error>> {
        if digest.len() != 32 || !digest.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("invalid content digest: {digest:?}").into());
        }
        Ok(Self {
            out: format!("file={digest},{length},{name}\n"),
            last_line: 0,
        })
    }

    /// Append one fingerprint, opening a new line record when the source
    /// line differs from the last recorded one.
    pub fn emit(&mut self, line: usize, hash: u32) {
        if line != self.last_line {
            if self.last_line > 0 {
                self.out.push('\n');
            }
            self.out.push_str(&line.to_string());
            self.out.push('=');
            self.out.push_str(&hex_hash(hash));
            self.last_line = line;
        } else {
            self.out.push(',');
            self.out.push_str(&hex_hash(hash));
        }
    }

    /// Consume the writer and return the finished document.
    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
