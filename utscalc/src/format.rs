//! Number rendering for the display and expression readouts

/// Integers up to 2^53 are exact in f64 and render without a fraction.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;
/// Magnitudes at or above this render in exponent form.
const EXPONENT_ABOVE: f64 = 1e15;
/// Non-zero magnitudes below this render in exponent form.
const EXPONENT_BELOW: f64 = 1e-7;

/// How non-integral values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Shortest text that parses back to the same f64.
    #[default]
    Shortest,
    /// Round to this many decimal places, then drop trailing zeros.
    Fixed(u8),
}

impl From<Option<u8>> for Precision {
    fn from(places: Option<u8>) -> Self {
        places.map_or(Self::Shortest, Self::Fixed)
    }
}

pub fn format_number(value: f64, precision: Precision) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }
    if value == value.trunc() && value.abs() < MAX_EXACT_INTEGER {
        return format!("{}", value as i64);
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        return format!("{:e}", value);
    }

    match precision {
        Precision::Shortest => format!("{}", value),
        Precision::Fixed(places) => {
            let s = format!("{:.*}", places as usize, value);
            let trimmed = if s.contains('.') {
                s.trim_end_matches('0').trim_end_matches('.')
            } else {
                s.as_str()
            };
            if trimmed == "-0" {
                "0".to_string()
            } else {
                trimmed.to_string()
            }
        }
    }
}

/// Parse what the display holds. Anything that is not a finite number,
/// such as `"Error"`, yields `None`.
pub fn parse_display(text: &str) -> Option<f64> {
    let value = text.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}
