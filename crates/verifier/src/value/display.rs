//! Text form of values, used by `len` and by string rules that receive
//! non-string needles.

use std::fmt;

use super::Value;

/// Significant digits kept when rendering floats.
const FLOAT_PRECISION: usize = 14;

impl Value {
    /// Renders the value as text.
    ///
    /// `Null` and `false` render empty, `true` as `1`; floats keep 14
    /// significant digits and switch to `1.0E+25` notation below `1e-4` and
    /// from `1e14` up.
    ///
    /// ```
    /// use nebula_verifier::Value;
    ///
    /// assert_eq!(Value::from(-8).to_text(), "-8");
    /// assert_eq!(Value::from(3.1416).to_text(), "3.1416");
    /// assert_eq!(Value::from(1.0).to_text(), "1");
    /// assert_eq!(Value::from(true).to_text(), "1");
    /// ```
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Null | Self::Bool(false) => String::new(),
            Self::Bool(true) => "1".to_owned(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => format_float(*f),
            Self::String(s) => s.clone(),
            Self::List(_) => "Array".to_owned(),
            Self::Object(obj) => obj.class().to_owned(),
            Self::Resource(res) => format!("Resource({})", res.kind()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NAN".to_owned();
    }
    if f.is_infinite() {
        return if f > 0.0 { "INF" } else { "-INF" }.to_owned();
    }
    if f == 0.0 {
        return if f.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    // `{:e}` with PRECISION-1 fraction digits yields exactly PRECISION
    // significant digits, already rounded.
    let scientific = format!("{:.*e}", FLOAT_PRECISION - 1, f.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return f.to_string();
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let mut out = String::new();
    if f.is_sign_negative() {
        out.push('-');
    }

    if (-4..FLOAT_PRECISION as i32).contains(&exponent) {
        if exponent >= 0 {
            let int_len = exponent as usize + 1;
            if digits.len() <= int_len {
                out.push_str(digits);
                out.extend(std::iter::repeat_n('0', int_len - digits.len()));
            } else {
                out.push_str(&digits[..int_len]);
                out.push('.');
                out.push_str(&digits[int_len..]);
            }
        } else {
            out.push_str("0.");
            out.extend(std::iter::repeat_n('0', (-exponent - 1) as usize));
            out.push_str(digits);
        }
    } else {
        out.push_str(&digits[..1]);
        out.push('.');
        out.push_str(if digits.len() > 1 { &digits[1..] } else { "0" });
        out.push('E');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&exponent.unsigned_abs().to_string());
    }
    out
}
