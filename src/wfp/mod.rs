use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::crc32::Crc32Table;
use crate::util::{is_binary, md5_hex};
use crate::walk::{ExcludeFilter, source_files};
use crate::winnow;
use crate::winnow::document::DEFAULT_NAME;

/// Fingerprint one buffer under the given document name.
fn document_for(table: &Crc32Table, src: &[u8], name: &str) -> Result<String, Box<dyn Error>> {
    winnow::fingerprint(table, src, &md5_hex(src), name)
}

/// Build fingerprint documents for a file or a directory tree.
///
/// Directory walks skip binary files, files under `min_len` bytes, and
/// unreadable files (with a warning); a single explicit file that fails
/// any of those checks is an error instead. Document names are paths
/// relative to the walk root.
pub fn collect(
    table: &Crc32Table,
    path: &Path,
    filter: &ExcludeFilter,
    min_len: usize,
) -> Result<Vec<String>, Box<dyn Error>> {
    if path.is_file() {
        let src = fs::read(path)?;
        if is_binary(&src) {
            return Err(format!("{}: binary file", path.display()).into());
        }
        if src.len() < min_len {
            return Err(format!(
                "{}: needs at least {min_len} bytes of content",
                path.display()
            )
            .into());
        }
        let doc = document_for(table, &src, &path.display().to_string())?;
        return Ok(vec![doc]);
    }

    let mut docs = Vec::new();
    for file in source_files(path, filter) {
        let src = match fs::read(&file) {
            Ok(src) => src,
            Err(err) => {
                eprintln!("warning: {}: {err}", file.display());
                continue;
            }
        };
        if is_binary(&src) || src.len() < min_len {
            continue;
        }
        let name = file.strip_prefix(path).unwrap_or(&file).display().to_string();
        match document_for(table, &src, &name) {
            Ok(doc) => docs.push(doc),
            Err(err) => eprintln!("warning: {}: {err}", file.display()),
        }
    }
    Ok(docs)
}

/// Read stdin to the end and build its document under the pasted name.
pub fn collect_stdin(table: &Crc32Table, min_len: usize) -> Result<Vec<String>, Box<dyn Error>> {
    let mut src = Vec::new();
    io::stdin().read_to_end(&mut src)?;
    if src.len() < min_len {
        return Err(format!("need at least {min_len} bytes of content").into());
    }
    Ok(vec![document_for(table, &src, DEFAULT_NAME)?])
}

/// Join per-file documents into one submission body. The last record of a
/// document carries no newline, so one is inserted before the next header.
pub fn join_documents(docs: &[String]) -> String {
    let mut out = String::new();
    for doc in docs {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(doc);
    }
    out
}

pub fn run(
    path: Option<&Path>,
    output: Option<&Path>,
    filter: &ExcludeFilter,
) -> Result<(), Box<dyn Error>> {
    let table = Crc32Table::new();
    let docs = match path {
        Some(path) => collect(&table, path, filter, 0)?,
        None => collect_stdin(&table, 0)?,
    };

    if docs.is_empty() {
        println!("No source files found.");
        return Ok(());
    }

    let combined = join_documents(&docs);
    match output {
        Some(file) => fs::write(file, &combined)?,
        None => {
            print!("{combined}");
            if !combined.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
