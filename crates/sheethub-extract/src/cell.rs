//! Per-cell coercion and rendering rules.

use calamine::Data;

/// Coerce a cell to a number.
///
/// Integers, floats and booleans (as 1/0) are numeric. Strings count when
/// their trimmed content parses as a float. Dates, durations, error cells,
/// empty cells and NaN never contribute.
pub fn coerce(cell: &Data) -> Option<f64> {
    let value = match cell {
        Data::Int(i) => *i as f64,
        Data::Float(f) => *f,
        Data::Bool(b) => f64::from(u8::from(*b)),
        Data::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (!value.is_nan()).then_some(value)
}

/// Date-time cells render as `YYYY-MM-DD HH:MM:SS`.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a cell as text. Empty cells render as "".
///
/// Date-time cells render as a timestamp, not as their Excel serial. A
/// serial that does not convert, or a duration, keeps its numeric form.
pub fn render(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::DateTime(dt) if dt.is_datetime() => match dt.as_datetime() {
            Some(datetime) => datetime.format(DATETIME_FORMAT).to_string(),
            None => dt.as_f64().to_string(),
        },
        Data::DateTime(dt) => dt.as_f64().to_string(),
        other => other.to_string(),
    }
}
