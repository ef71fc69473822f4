//! Mission row parser.

use chrono::NaiveDate;

use super::tokens::{split_fields, strip_optional_quotes, strip_quotes};
use super::RowError;
use crate::core::domain::{Detail, Mission};

/// Logical fields of a mission row, in fixed order: id, company, location,
/// date, detail, rocket status, cost, mission status.
const MISSION_FIELD_COUNT: usize = 8;

/// e.g. `Fri Aug 07, 2020`; chrono rejects a weekday that contradicts the
/// date, which is stricter than the source but still exact-match parsing.
const DATE_FORMAT: &str = "%a %b %d, %Y";

/// Parse one mission row into a [`Mission`].
///
/// `location` and `date` always arrive quote-wrapped; `detail` and `cost`
/// only when they contain a comma. Any deviation from the grammar is a
/// [`RowError`], never a panic or a silent default.
pub fn parse_mission(line: &str) -> Result<Mission, RowError> {
    let fields: [String; MISSION_FIELD_COUNT] =
        split_fields(line).try_into().map_err(|found: Vec<String>| RowError::FieldCount {
            expected: MISSION_FIELD_COUNT,
            found: found.len(),
        })?;
    let [id, company, location, date, detail, rocket_status, cost, mission_status] = fields;

    Ok(Mission {
        id,
        company,
        location: strip_quotes(&location, "location")?.to_string(),
        date: parse_launch_date(&date)?,
        detail: parse_detail(&detail)?,
        rocket_status: rocket_status.parse()?,
        cost: parse_cost(&cost)?,
        mission_status: mission_status.parse()?,
    })
}

fn parse_launch_date(token: &str) -> Result<NaiveDate, RowError> {
    let raw = strip_quotes(token, "date")?;
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| RowError::Date(raw.to_string()))
}

/// Split the detail field on its first `|`, trimming whitespace around the
/// separator. The payload is free text and may itself contain `|` or
/// commas; it is not re-parsed further.
fn parse_detail(token: &str) -> Result<Detail, RowError> {
    let inner = strip_optional_quotes(token);
    let (rocket_name, payload) = inner
        .split_once('|')
        .ok_or_else(|| RowError::Detail(inner.to_string()))?;

    Ok(Detail {
        rocket_name: rocket_name.trim_end().to_string(),
        payload: payload.trim_start().to_string(),
    })
}

/// An empty token means the cost is unknown, not zero. Present values are
/// quote-wrapped with space padding and a grouping comma, e.g. `"1,160.0 "`
/// meaning 1160.0 million.
fn parse_cost(token: &str) -> Result<Option<f64>, RowError> {
    if token.is_empty() {
        return Ok(None);
    }

    let raw = strip_quotes(token, "cost")?;
    let cleaned: String = raw.trim().chars().filter(|&ch| ch != ',').collect();
    cleaned
        .parse::<f64>()
        .map(Some)
        .map_err(|_| RowError::Number(raw.to_string()))
}
