/// Winnowing fingerprint generation.
///
/// ## Algorithm
///
/// **Normalization:** every raw byte is mapped to lowercase alphanumeric
/// form or dropped, so fingerprints are insensitive to formatting, case,
/// and punctuation. A 1-based line counter advances on each raw `\n`
/// *before* normalization, so emitted fingerprints carry the line of the
/// raw source position.
///
/// **Gram hashing:** the most recent [`GRAM`] normalized bytes form a gram,
/// hashed with CRC32-C. Each full gram pushes its hash into a sliding
/// window of the last [`WINDOW`] gram hashes.
///
/// **Selection:** once the window is full, the smallest hash in the window
/// is selected. A fingerprint is emitted only when the selection changes —
/// the window sliding past one strong local minimum produces a single
/// fingerprint, which keeps the output sparse. The selected minimum is
/// hashed once more before emission: minimum selection skews values low,
/// and re-hashing restores a balanced distribution for the lookup service.
///
/// Emission stops at [`MAX_FINGERPRINTS`]; this is a hard cap, not an
/// error, and the document produced up to that point is valid.
pub mod document;
mod normalize;

use std::error::Error;

use crate::crc32::Crc32Table;
use document::DocumentWriter;
pub use normalize::normalize;

/// Gram size in normalized bytes.
pub const GRAM: usize = 30;

/// Window size in gram hashes.
pub const WINDOW: usize = 64;

/// Hard cap on fingerprints emitted per document.
pub const MAX_FINGERPRINTS: usize = 5000;

/// Slot value meaning "no gram hash here yet"; compares above every real hash.
const EMPTY_SLOT: u32 = u32::MAX;

/// A selected fingerprint: the source line it was discovered on and the
/// externally visible hash value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint {
    pub line: usize,
    pub hash: u32,
}

/// Run winnowing over a raw buffer and collect the selected fingerprints.
///
/// Buffers with fewer than [`GRAM`] normalized bytes yield no fingerprints.
pub fn fingerprints(table: &Crc32Table, src: &[u8]) -> Vec<Fingerprint> {
    let mut out: Vec<Fingerprint> = Vec::new();
    let mut gram = [0u8; GRAM];
    let mut gram_len = 0usize;
    let mut window = [EMPTY_SLOT; WINDOW];
    let mut window_ptr = 0usize;
    let mut last = 0u32;
    let mut line = 1usize;

    for &raw in src {
        if raw == b'\n' {
            line += 1;
        }

        let Some(byte) = normalize(raw) else { continue };

        gram[gram_len] = byte;
        gram_len += 1;
        if gram_len < GRAM {
            continue;
        }

        window[window_ptr] = table.checksum(&gram);
        window_ptr += 1;

        if window_ptr >= WINDOW {
            // Smallest hash wins; on ties the scan keeps the value it saw
            // first, which is the same value either way.
            let mut selected = EMPTY_SLOT;
            for &hash in &window {
                if hash < selected {
                    selected = hash;
                }
            }

            if selected != last {
                // Re-hash the selected minimum; see module docs.
                out.push(Fingerprint {
                    line,
                    hash: table.checksum_u32(selected),
                });
                last = selected;
            }

            if out.len() >= MAX_FINGERPRINTS {
                break;
            }

            // Slide the window: drop the oldest hash, open a slot at the tail.
            window.copy_within(1.., 0);
            window_ptr = WINDOW - 1;
            window[window_ptr] = EMPTY_SLOT;
        }

        // Slide the gram: drop the oldest normalized byte.
        gram.copy_within(1.., 0);
        gram_len = GRAM - 1;
    }

    out
}

/// Fingerprint a buffer and serialize the result as a wfp document with a
/// `file=<digest>,<length>,<name>` header.
pub fn fingerprint(
    table: &Crc32Table,
    src: &[u8],
    digest: &str,
    name: &str,
) -> Result<String, Box<dyn Error>> {
    let mut doc = DocumentWriter::new(digest, src.len(), name)?;
    for fp in fingerprints(table, src) {
        doc.emit(fp.line, fp.hash);
    }
    Ok(doc.finish())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
