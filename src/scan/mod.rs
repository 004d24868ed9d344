mod client;
mod report;

use std::error::Error;
use std::path::Path;

use crate::crc32::Crc32Table;
use crate::walk::ExcludeFilter;
use crate::wfp;
use crate::winnow::document::DEFAULT_NAME;
use client::parse_matches;

/// Default identification endpoint.
pub const DEFAULT_API_URL: &str = "https://osskb.org/api/scan/direct";

/// Buffers shorter than this cannot produce enough grams to match anything.
pub const MIN_SCAN_LEN: usize = 50;

/// Build the one-record document submitted when only a content hash is
/// known. The length field is a placeholder: the service matches whole
/// files on the digest alone.
fn hash_document(hash: &str) -> Result<String, Box<dyn Error>> {
    if hash.len() != 32 || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("invalid MD5 content hash: {hash:?}").into());
    }
    Ok(format!("file={hash},999,{DEFAULT_NAME}"))
}

fn build_wfp(
    path: Option<&Path>,
    hash: Option<&str>,
    filter: &ExcludeFilter,
) -> Result<String, Box<dyn Error>> {
    if let Some(hash) = hash {
        return hash_document(hash);
    }
    let table = Crc32Table::new();
    let docs = match path {
        Some(path) => wfp::collect(&table, path, filter, MIN_SCAN_LEN)?,
        None => wfp::collect_stdin(&table, MIN_SCAN_LEN)?,
    };
    if docs.is_empty() {
        return Err("no source files to scan".into());
    }
    Ok(wfp::join_documents(&docs))
}

pub fn run(
    path: Option<&Path>,
    hash: Option<&str>,
    api_url: &str,
    json: bool,
    csv: bool,
    filter: &ExcludeFilter,
) -> Result<(), Box<dyn Error>> {
    let document = build_wfp(path, hash, filter)?;
    let response = client::scan(api_url, document)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let results = parse_matches(response)?;
    if csv {
        report::print_csv(&results);
    } else {
        report::print_matches(&results);
    }
    Ok(())
}

pub fn run_sbom(
    path: Option<&Path>,
    format: &str,
    api_url: &str,
    filter: &ExcludeFilter,
) -> Result<(), Box<dyn Error>> {
    let document = build_wfp(path, None, filter)?;
    let response = client::sbom(api_url, document, format)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
