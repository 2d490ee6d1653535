/// Largest integral value an `f64` holds exactly with room to spare for phone digits.
const MAX_EXACT_PHONE: f64 = 1e15;

/// Canonical form of a phone cell, or `None` when the cell is blank.
///
/// Spreadsheet exports render numeric phone columns as floats, either as
/// `5550001234.0` or in scientific notation (`5.550001234E9`). Both collapse to
/// their integral digits. Anything else is returned trimmed but otherwise as written.
pub fn canonical_phone(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some((int_part, frac)) = trimmed.split_once('.') {
        let is_float_render = !int_part.is_empty()
            && int_part.bytes().all(|b| b.is_ascii_digit())
            && !frac.is_empty()
            && frac.bytes().all(|b| b == b'0');
        if is_float_render {
            return Some(int_part.to_string());
        }
    }
    if let Some(digits) = exponent_render(trimmed) {
        return Some(digits);
    }
    Some(trimmed.to_string())
}

/// `5.550001234E9` → `5550001234`, only when the value is a non-negative integer.
fn exponent_render(value: &str) -> Option<String> {
    let (mantissa, exp) = value.split_once(['e', 'E'])?;
    let mantissa_ok = !mantissa.is_empty()
        && mantissa.bytes().any(|b| b.is_ascii_digit())
        && mantissa.bytes().all(|b| b.is_ascii_digit() || b == b'.');
    let exp_digits = exp.strip_prefix('+').unwrap_or(exp);
    let exp_ok = !exp_digits.is_empty() && exp_digits.bytes().all(|b| b.is_ascii_digit());
    if !(mantissa_ok && exp_ok) {
        return None;
    }
    let v: f64 = value.parse().ok()?;
    if v.is_finite() && v.fract() == 0.0 && (0.0..MAX_EXACT_PHONE).contains(&v) {
        Some(format!("{:.0}", v))
    } else {
        None
    }
}
