use super::client::{ScanMatch, ScanResults};

fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Render the version field: a single version when the match is current,
/// a `first - latest` range otherwise.
fn version_range(m: &ScanMatch) -> String {
    if m.latest.is_empty() || m.version == m.latest {
        m.version.clone()
    } else {
        format!("{} - {}", m.version, m.latest)
    }
}

/// Multi-line key/value rendering of one identification.
pub fn format_match(m: &ScanMatch) -> String {
    let mut out = String::new();
    out.push_str(&format!(" Component:  {} {}\n", m.component, version_range(m)));
    out.push_str(&format!(" Vendor:     {}\n", m.vendor));
    out.push_str(&format!(" File:       {} (lines {})\n", m.file, m.oss_lines));
    if let Some(license) = m.licenses.first() {
        out.push_str(&format!(" License:    {}\n", license.name));
    }
    if let Some(copyright) = m.copyrights.first() {
        out.push_str(&format!(" Copyright:  {}\n", copyright.name));
    }
    out.push_str(&format!(" URL:        {}", m.url));
    out
}

/// One CSV line per identification, in the column order consumed by
/// downstream tooling:
/// vendor,component,version,latest,file,lines,license,copyright,url.
pub fn csv_line(m: &ScanMatch) -> String {
    let license = m.licenses.first().map(|l| l.name.as_str()).unwrap_or("");
    let copyright = m.copyrights.first().map(|c| c.name.as_str()).unwrap_or("");
    format!(
        "{},{},{},{},{},{},{},{},{}",
        m.vendor,
        m.component,
        m.version,
        m.latest,
        m.file,
        m.oss_lines,
        license,
        copyright,
        m.url
    )
}

/// Print the first match per submitted document. Secondary matches are
/// available in the raw response via `--json`.
pub fn print_matches(results: &ScanResults) {
    let sep = separator(68);
    for (name, matches) in results {
        println!("{sep}");
        println!(" {name}");
        println!();
        match matches.first() {
            Some(m) if m.id != "none" => println!("{}", format_match(m)),
            _ => println!(" No match found in the OSSKB."),
        }
    }
    println!("{sep}");
}

/// Print one CSV line per identified document; misses are omitted.
pub fn print_csv(results: &ScanResults) {
    for matches in results.values() {
        if let Some(m) = matches.first()
            && m.id != "none"
        {
            println!("{}", csv_line(m));
        }
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
