//! Display formatting for prices and timestamps

use chrono::{DateTime, Datelike, Timelike, Utc};

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Group the integer digits in threes with `sep`
fn group_thousands(digits: &str, sep: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }
    result
}

/// Chilean pesos without decimals: 1234567.0 -> "$1.234.567"
pub fn format_price_clp(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&digits, '.'))
}

/// "19 oct 2026, 14:05"
pub fn format_datetime_es(value: &DateTime<Utc>) -> String {
    format!(
        "{} {} {}, {:02}:{:02}",
        value.day(),
        MONTHS_ES[value.month0() as usize],
        value.year(),
        value.hour(),
        value.minute()
    )
}

pub fn format_optional_datetime_es(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_datetime_es).unwrap_or_else(|| "-".to_string())
}

/// "Total: 1 tienda" / "Total: 3 tiendas"
pub fn total_label(count: usize, singular: &str, plural: &str) -> String {
    format!("Total: {} {}", count, if count == 1 { singular } else { plural })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn prices_use_dot_thousands() {
        assert_eq!(format_price_clp(0.0), "$0");
        assert_eq!(format_price_clp(990.0), "$990");
        assert_eq!(format_price_clp(1234.0), "$1.234");
        assert_eq!(format_price_clp(1234567.0), "$1.234.567");
        assert_eq!(format_price_clp(59990.4), "$59.990");
        assert_eq!(format_price_clp(-1500.0), "-$1.500");
    }

    #[test]
    fn datetime_in_spanish() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 9, 7, 0).unwrap();
        assert_eq!(format_datetime_es(&at), "5 ene 2024, 09:07");
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 14, 5, 0).unwrap();
        assert_eq!(format_datetime_es(&at), "19 oct 2026, 14:05");
    }

    #[test]
    fn total_label_pluralizes() {
        assert_eq!(total_label(1, "tienda", "tiendas"), "Total: 1 tienda");
        assert_eq!(total_label(0, "tienda", "tiendas"), "Total: 0 tiendas");
    }

    #[test]
    fn missing_datetime_is_dash() {
        assert_eq!(format_optional_datetime_es(None), "-");
    }
}
