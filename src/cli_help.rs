//! Long help text constants for CLI subcommands.
//!
//! Extracted from `cli.rs` to keep the argument definitions concise.

/// Winnowing fingerprint generation: normalization, gram/window selection,
/// and the wfp document format.
pub const WFP: &str = "\
Generate winnowing fingerprints (.wfp) for a file, directory, or stdin.

Each input buffer is reduced to a sparse set of CRC32-C hashes selected
by winnowing: the content is normalized (lowercased, non-alphanumerics
dropped), hashed over 30-byte grams, and only the minimum hash of each
64-gram window is kept, without repeats while the minimum stays
unchanged. At most 5000 fingerprints are emitted per file.

The output document carries one header per file:
  file=<md5>,<length>,<name>
followed by line-grouped fingerprints:
  <line>=<hash>[,<hash>...]

Directories are walked respecting .gitignore; binary files are skipped.

Examples:
  hl wfp src/main.rs              # fingerprint one file
  hl wfp src/ -o project.wfp      # fingerprint a tree into a file
  cat snippet.c | hl wfp          # fingerprint pasted code
  hl wfp . --exclude-dir vendor --exclude '*.min.js'";

/// OSSKB identification: what is submitted and what comes back.
pub const SCAN: &str = "\
Identify open source code by scanning fingerprints against the OSSKB.

Only winnowing fingerprints are submitted, never the source code
itself. The OSSKB responds with the matching component, vendor, version
range, file, line range, license, and copyright, rendered one block per
input file. The OSSKB contains only software: media files,
configuration, and other non-code content will not match.

Inputs shorter than 50 bytes are rejected — they cannot produce enough
fingerprints to match. With --hash, a known MD5 content digest is
submitted instead of fingerprinting local content.

Examples:
  hl scan src/lib.rs                      # identify one file
  hl scan src/ --csv                      # CSV, one line per match
  cat snippet.c | hl scan --json          # raw scan response
  hl scan --hash d41d8cd98f00b204e9800998ecf8427e";

/// SBOM retrieval over the same submission channel as scan.
pub const SBOM: &str = "\
Request a software bill of materials for local code from the OSSKB.

Fingerprints the given path (or stdin) exactly like `hl scan`, adds the
requested format to the submission, and prints the SBOM document
returned by the service.

Formats:
  spdx        SPDX JSON
  cyclonedx   CycloneDX JSON

Examples:
  hl sbom src/ --format spdx
  hl sbom src/ --format cyclonedx";
