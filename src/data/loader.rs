use std::io::Read;
use std::path::Path;

use serde_json::Value as JsonValue;

use super::error::LoadError;
use super::model::{GdpDataset, SeriesRow};

/// Header label of the entity column in the wide source table.
const COUNTRY_COLUMN: &str = "country";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a wide GDP-per-capita table from a file and reshape it to long
/// format.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header `country,1800,1801,...`; cells are value tokens
/// * `.json` – records orientation: `[{ "country": "USA", "1950": "10k", ... }]`
pub fn load_file(path: &Path) -> Result<GdpDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: one header row, one record per country.
/// The `country` column holds the name; every other column is labelled with
/// a year and holds a value token such as `985` or `12.5k`.
fn load_csv(path: &Path) -> Result<GdpDataset, LoadError> {
    let file = std::fs::File::open(path)?;
    parse_csv(file)
}

fn parse_csv<R: Read>(input: R) -> Result<GdpDataset, LoadError> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let country_idx = headers
        .iter()
        .position(|h| h == COUNTRY_COLUMN)
        .ok_or_else(|| {
            LoadError::MalformedSchema(format!("missing {COUNTRY_COLUMN:?} column"))
        })?;

    // Every non-country header must name a year.
    let mut year_columns: Vec<(usize, i32, String)> = Vec::with_capacity(headers.len());
    for (idx, label) in headers.iter().enumerate() {
        if idx == country_idx {
            continue;
        }
        let year = label.trim().parse::<i32>().map_err(|_| {
            LoadError::MalformedSchema(format!("column header {label:?} is not a year"))
        })?;
        year_columns.push((idx, year, label.clone()));
    }

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let country = record.get(country_idx).unwrap_or("").trim().to_string();

        for (idx, year, label) in &year_columns {
            let token = record.get(*idx).unwrap_or("");
            let value =
                coerce_value(token).ok_or_else(|| LoadError::MalformedRecord {
                    country: country.clone(),
                    column: label.clone(),
                    token: token.to_string(),
                })?;
            rows.push(SeriesRow {
                country: country.clone(),
                year: *year,
                value,
            });
        }
    }

    Ok(GdpDataset::from_rows(rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "country": "USA", "1950": "10k", "1960": "12.5k" },
///   { "country": "Chad", "1950": 480, "1960": "520" }
/// ]
/// ```
///
/// Value cells may be tokens (suffix rules apply) or plain JSON numbers.
fn load_json(path: &Path) -> Result<GdpDataset, LoadError> {
    let text = std::fs::read_to_string(path)?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<GdpDataset, LoadError> {
    let root: JsonValue = serde_json::from_str(text)?;

    let records = root
        .as_array()
        .ok_or_else(|| LoadError::MalformedSchema("expected top-level JSON array".into()))?;

    let mut rows = Vec::new();

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| LoadError::MalformedSchema(format!("record {i} is not an object")))?;

        let country = obj
            .get(COUNTRY_COLUMN)
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                LoadError::MalformedSchema(format!(
                    "record {i}: missing {COUNTRY_COLUMN:?} field"
                ))
            })?
            .trim()
            .to_string();

        for (key, val) in obj {
            if key == COUNTRY_COLUMN {
                continue;
            }
            let year = key.trim().parse::<i32>().map_err(|_| {
                LoadError::MalformedSchema(format!("field {key:?} is not a year"))
            })?;
            let value = coerce_json_value(val).ok_or_else(|| LoadError::MalformedRecord {
                country: country.clone(),
                column: key.clone(),
                token: val.to_string(),
            })?;
            rows.push(SeriesRow {
                country: country.clone(),
                year,
                value,
            });
        }
    }

    Ok(GdpDataset::from_rows(rows))
}

fn coerce_json_value(val: &JsonValue) -> Option<i64> {
    match val {
        JsonValue::String(s) => coerce_value(s),
        JsonValue::Number(n) => truncate_non_negative(n.as_f64()?),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Value coercion
// ---------------------------------------------------------------------------

/// Scale factor for a magnitude suffix. Case-sensitive to the source format.
fn magnitude(suffix: char) -> Option<f64> {
    match suffix {
        'k' => Some(1e3),
        'M' => Some(1e6),
        'B' => Some(1e9),
        _ => None,
    }
}

/// Coerce a raw value token to a whole number: resolve a trailing magnitude
/// suffix (`"12.5k"` → 12500), then truncate.  Returns `None` for anything
/// that does not resolve to a non-negative finite number.
fn coerce_value(token: &str) -> Option<i64> {
    let token = token.trim();
    let (prefix, scale) = match token.chars().last().and_then(magnitude) {
        Some(scale) => (&token[..token.len() - 1], scale),
        None => (token, 1.0),
    };
    let number: f64 = prefix.trim().parse().ok()?;
    truncate_non_negative(number * scale)
}

fn truncate_non_negative(value: f64) -> Option<i64> {
    if value.is_finite() && value >= 0.0 {
        Some(value.trunc() as i64)
    } else {
        None
    }
}
