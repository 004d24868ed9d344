use std::collections::BTreeMap;
use std::error::Error;
use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;

use crate::winnow::document::DEFAULT_NAME;

const USER_AGENT: &str = concat!("huella/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// One identification result for a submitted document. An `id` of `"none"`
/// marks a miss; every other field may be absent on misses.
#[derive(Deserialize, Debug)]
pub struct ScanMatch {
    pub id: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub latest: String,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub oss_lines: String,
    #[serde(default)]
    pub licenses: Vec<License>,
    #[serde(default)]
    pub copyrights: Vec<Copyright>,
}

#[derive(Deserialize, Debug)]
pub struct License {
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct Copyright {
    pub name: String,
}

/// Scan results keyed by submitted document name, in stable name order.
pub type ScanResults = BTreeMap<String, Vec<ScanMatch>>;

pub fn parse_matches(response: Value) -> Result<ScanResults, Box<dyn Error>> {
    Ok(serde_json::from_value(response)?)
}

/// POST a fingerprint document for identification.
pub fn scan(api_url: &str, wfp: String) -> Result<Value, Box<dyn Error>> {
    submit(api_url, wfp, None)
}

/// POST a fingerprint document and request an SBOM in the given format.
pub fn sbom(api_url: &str, wfp: String, format: &str) -> Result<Value, Box<dyn Error>> {
    submit(api_url, wfp, Some(format))
}

/// The endpoint takes a multipart form: the document as the `file` field
/// (named `pasted.wfp`) and, for SBOM requests, a `format` field.
fn submit(api_url: &str, wfp: String, format: Option<&str>) -> Result<Value, Box<dyn Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;

    let mut form = Form::new();
    if let Some(format) = format {
        form = form.text("format", format.to_string());
    }
    let part = Part::text(wfp)
        .file_name(DEFAULT_NAME)
        .mime_str("application/octet-stream")?;
    form = form.part("file", part);

    let resp = client.post(api_url).multipart(form).send()?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().unwrap_or_default();
        return Err(format!("scan API error ({status}): {body}").into());
    }
    Ok(resp.json()?)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
