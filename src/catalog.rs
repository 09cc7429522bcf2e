//! Small-body catalog ingestion.
//!
//! Consumes the tabular response shape of the JPL small-body database
//! query API: `{ "data": [[full_name, epoch, e, a, q, i, om, w, ma], ...] }`
//! where the first field is a string designation and the remaining eight
//! are numeric (the API serializes them as strings).
//!
//! Network fetch is out of scope; the response is read from a bundled
//! asset file when present. Per-row failures drop the row with a
//! diagnostic and never abort ingestion.

use std::path::Path;
use std::sync::LazyLock;

use bevy::prelude::*;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::data::BodyRecord;
use crate::orbit::OrbitalElements;
use crate::types::BodyCategory;

/// Display defaults for near-Earth objects.
const NEO_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
const NEO_OPACITY: f32 = 0.3;
const NEO_RADIUS: f64 = 0.2;

/// Expected fields per catalog row: designation + 8 numeric elements.
const ROW_FIELDS: usize = 9;

/// Catalog asset location relative to the working directory.
const CATALOG_ASSET_PATH: &str = "assets/neo/sbdb.json";

/// Failure to ingest a catalog response.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Response did not contain a `data` array of rows.
    #[error("unexpected catalog response structure")]
    UnexpectedShape,
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Matches designations like " 433 Eros (A898 PA)", capturing "433 Eros".
static NUMBER_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+(\d+\s+[A-Za-z]+)\s+\(.*\)$").expect("valid regex"));

/// Matches a leading catalog number like "433".
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)").expect("valid regex"));

/// Extract a display name from a raw designation field.
///
/// Tries the "<number> <name> (<designation>)" pattern first, then a bare
/// leading number. Returns None when the input is not textual or neither
/// pattern applies.
pub fn extract_name(input: &Value) -> Option<String> {
    let text = input.as_str()?;

    if let Some(captures) = NUMBER_NAME_RE.captures(text) {
        return Some(captures[1].to_string());
    }
    if let Some(captures) = NUMBER_RE.captures(text) {
        return Some(captures[1].to_string());
    }
    None
}

/// Parse one numeric field, accepting either a JSON number or a numeric
/// string (the API uses strings).
fn parse_field(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parse a catalog response into body records.
///
/// Rows with a bad field count or any unparsable numeric field are dropped
/// with a warning; a malformed top-level shape is an error the caller
/// recovers from by continuing without NEOs.
pub fn parse_small_bodies(response: &Value) -> Result<Vec<BodyRecord>, CatalogError> {
    let rows = response
        .get("data")
        .and_then(Value::as_array)
        .ok_or(CatalogError::UnexpectedShape)?;

    let mut records = Vec::new();

    for row in rows {
        let Some(fields) = row.as_array().filter(|f| f.len() == ROW_FIELDS) else {
            warn!("Dropping catalog row with unexpected field count: {row}");
            continue;
        };

        let designation = &fields[0];
        // Fields: full_name, epoch, e, a, q, i, om, w, ma
        let numeric: Vec<Option<f64>> = fields[1..].iter().map(parse_field).collect();
        if numeric.iter().any(Option::is_none) {
            warn!("Invalid data for object: {designation}");
            continue;
        }
        let values: Vec<f64> = numeric.into_iter().flatten().collect();
        let [epoch, e, a, _q, i, om, w, ma] = values[..] else {
            unreachable!("field count checked above");
        };

        // Fall back to the raw trimmed designation when no pattern matches
        let name = extract_name(designation).unwrap_or_else(|| {
            designation
                .as_str()
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|| "no match".to_string())
        });

        records.push(BodyRecord {
            name,
            radius: NEO_RADIUS,
            color: NEO_COLOR,
            opacity: NEO_OPACITY,
            category: BodyCategory::NearEarthObject,
            elements: Some(OrbitalElements {
                a,
                e,
                i,
                om,
                w,
                ma,
                epoch,
            }),
        });
    }

    info!("Fetched and validated {} small bodies", records.len());
    Ok(records)
}

/// Load the bundled small-body catalog, if present.
///
/// Missing or malformed files are not fatal: the error is logged by the
/// caller and the simulation continues with the bodies already loaded.
pub fn load_from_assets_dir() -> Result<Vec<BodyRecord>, CatalogError> {
    let path = Path::new(CATALOG_ASSET_PATH);
    let text = std::fs::read_to_string(path)?;
    let response: Value = serde_json::from_str(&text)?;
    parse_small_bodies(&response)
}
