//! Rocket row parser.

use super::tokens::{split_fields, strip_optional_quotes};
use super::RowError;
use crate::core::domain::Rocket;

/// id and name are required; wiki and height are independently optional.
const ROCKET_REQUIRED_FIELDS: usize = 2;
const ROCKET_MAX_FIELDS: usize = 4;

const HEIGHT_UNIT_SUFFIX: &str = " m";

/// Parse one rocket row into a [`Rocket`].
///
/// Rows carry 2–4 logical fields: id, name, [wiki], [height]. The token
/// count alone does not determine which optionals are present — a trailing
/// empty token still means absent, so presence is inferred per token.
/// Anything outside the 2–4 bound is a malformed row, never a silent
/// truncation.
pub fn parse_rocket(line: &str) -> Result<Rocket, RowError> {
    let fields = split_fields(line.trim());
    if fields.len() < ROCKET_REQUIRED_FIELDS {
        return Err(RowError::FieldCount {
            expected: ROCKET_REQUIRED_FIELDS,
            found: fields.len(),
        });
    }
    if fields.len() > ROCKET_MAX_FIELDS {
        return Err(RowError::FieldCount {
            expected: ROCKET_MAX_FIELDS,
            found: fields.len(),
        });
    }

    let wiki = fields
        .get(2)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string());

    let height = match fields.get(3) {
        Some(token) if !token.is_empty() => Some(parse_height(token)?),
        _ => None,
    };

    Ok(Rocket {
        id: fields[0].clone(),
        name: strip_optional_quotes(&fields[1]).to_string(),
        wiki,
        height,
    })
}

/// Heights arrive with a trailing unit suffix, e.g. `39.0 m`, which is
/// stripped before numeric parsing. A token without the suffix deviates
/// from the grammar and is rejected like any other unparseable number.
fn parse_height(token: &str) -> Result<f64, RowError> {
    token
        .trim_end()
        .strip_suffix(HEIGHT_UNIT_SUFFIX)
        .and_then(|raw| raw.parse::<f64>().ok())
        .ok_or_else(|| RowError::Number(token.to_string()))
}
