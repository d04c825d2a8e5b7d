//! Display formatting helpers shared by templates and behaviors.

use wasm_bindgen::JsValue;

const BYTE_UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

pub const DEFAULT_BYTE_DECIMALS: i32 = 2;

/// Human-readable size in binary units (base 1024).
///
/// Negative `decimals` clamp to 0. Trailing zeros are dropped, so `1024`
/// renders as `"1 KB"` and `1536` as `"1.5 KB"`. Exactly zero bytes is the
/// literal `"0 Bytes"`.
pub fn format_bytes(bytes: f64, decimals: i32) -> String {
    if bytes == 0.0 {
        return "0 Bytes".to_string();
    }
    let precision = decimals.clamp(0, 20) as usize;

    let mut value = bytes;
    let mut unit = 0;
    while value.abs() >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{} {}", trim_fixed(&to_fixed(value, precision)), BYTE_UNITS[unit])
}

/// `value` with `precision` fractional digits, exact ties rounded away from
/// zero like `Number.prototype.toFixed`. `format!` alone rounds ties to even.
fn to_fixed(value: f64, precision: usize) -> String {
    let value = if is_decimal_tie(value, precision) {
        // The next double out is past the tie but nowhere near the next one.
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    };
    format!("{value:.precision$}")
}

/// Whether `value` sits exactly halfway between two `precision`-digit
/// decimals, i.e. `value * 10^precision * 2` is an odd integer.
fn is_decimal_tie(value: f64, precision: usize) -> bool {
    if !value.is_finite() || value == 0.0 {
        return false;
    }
    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mut mantissa, mut exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    let zeros = mantissa.trailing_zeros();
    mantissa >>= zeros;
    exponent += zeros as i32;
    // mantissa is odd and so is 5^precision; only the power of two decides.
    mantissa != 0 && exponent == -(precision as i32 + 1)
}

/// Drop trailing fractional zeros the way `parseFloat(x.toFixed(n))` does.
fn trim_fixed(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}

/// Short month, numeric day and year, plus hour:minute in the locale's
/// default clock, e.g. `Mar 4, 2025, 09:41 AM`.
pub fn format_date(date: &js_sys::Date) -> String {
    let options = js_sys::Object::new();
    for (key, value) in [
        ("year", "numeric"),
        ("month", "short"),
        ("day", "numeric"),
        ("hour", "2-digit"),
        ("minute", "2-digit"),
    ] {
        let _ = js_sys::Reflect::set(
            &options,
            &JsValue::from_str(key),
            &JsValue::from_str(value),
        );
    }
    String::from(date.to_locale_string("en-US", &options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_literal() {
        assert_eq!(format_bytes(0.0, 2), "0 Bytes");
        assert_eq!(format_bytes(0.0, -3), "0 Bytes");
    }

    #[test]
    fn small_counts_stay_in_bytes() {
        assert_eq!(format_bytes(1.0, 2), "1 Bytes");
        assert_eq!(format_bytes(1023.0, 2), "1023 Bytes");
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        assert_eq!(format_bytes(1024.0, 2), "1 KB");
        assert_eq!(format_bytes(1536.0, 2), "1.5 KB");
        assert_eq!(format_bytes(1_048_576.0, 2), "1 MB");
    }

    #[test]
    fn precision_is_applied_and_negative_clamps() {
        assert_eq!(format_bytes(1234.0, 2), "1.21 KB");
        assert_eq!(format_bytes(1234.0, 0), "1 KB");
        assert_eq!(format_bytes(1234.0, -1), "1 KB");
        assert_eq!(format_bytes(1234.0, 3), "1.205 KB");
    }

    #[test]
    fn exact_halves_round_up() {
        // 1152 / 1024 = 1.125, 2560 / 1024 = 2.5
        assert_eq!(format_bytes(1152.0, 2), "1.13 KB");
        assert_eq!(format_bytes(2560.0, 0), "3 KB");
        assert_eq!(format_bytes(1.5, 0), "2 Bytes");
        assert_eq!(format_bytes(2.5, 0), "3 Bytes");
    }

    #[test]
    fn near_halves_keep_their_exact_value() {
        // 1.005 is stored just below the half, so it rounds down.
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.375, 1), "0.4");
        assert!(!is_decimal_tie(1.5, 2));
        assert!(!is_decimal_tie(1024.0, 0));
    }

    #[test]
    fn unit_index_matches_power_of_1024() {
        for (k, unit) in BYTE_UNITS.iter().enumerate() {
            let base = 1024f64.powi(k as i32);
            for factor in [1.0, 3.5, 1000.0] {
                let rendered = format_bytes(base * factor, 2);
                let (magnitude, suffix) = rendered.split_once(' ').unwrap();
                assert_eq!(suffix, *unit, "{rendered}");
                let magnitude: f64 = magnitude.parse().unwrap();
                assert!((1.0..1024.0).contains(&magnitude), "{rendered}");
            }
        }
    }

    #[test]
    fn beyond_yottabytes_stays_in_last_unit() {
        let rendered = format_bytes(1024f64.powi(9), 2);
        assert_eq!(rendered, "1024 YB");
    }
}
