use crate::domain::model::{OutputField, ResultSet};

/// Shortest round-trip rendering, `1` rather than `1.0`, with the
/// `Infinity` spelling hosts expect.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        // Plain decimal for exponents -7 < e < 21, scientific `1.5e+21` / `1e-7` outside.
        let scientific = format!("{:e}", value);
        let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
        match exponent.parse::<i32>() {
            Ok(exp) if exp >= 21 => format!("{}e+{}", mantissa, exp),
            Ok(exp) if exp <= -7 => format!("{}e{}", mantissa, exp),
            _ => format!("{}", value),
        }
    }
}

/// Fixed-point text; magnitudes of `1e21` and above fall back to [`format_number`].
pub fn format_fixed(value: f64, digits: usize) -> String {
    if value.is_finite() && value.abs() < 1e21 {
        format!("{:.*}", digits, value)
    } else {
        format_number(value)
    }
}

/// `"<raw to 6 places> (rounded as <rounded>)"`
pub fn format_weighted_average(result: &ResultSet) -> String {
    format!(
        "{} (rounded as {})",
        format_fixed(result.raw_average, 6),
        format_number(result.rounded_average)
    )
}

/// The string written to each output field for `result`.
pub fn render_field(result: &ResultSet, field: OutputField) -> String {
    match field {
        OutputField::TotalWeight => format_number(result.total_units),
        OutputField::WeightedAverage => format_weighted_average(result),
        OutputField::Class => result.standing.label().to_string(),
    }
}
