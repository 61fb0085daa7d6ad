//! `FormatValue` and its implementations for the built-in value types.

use std::fmt::{Display, LowerExp};

use super::spec::{Align, StandardSpec};

/// A value that can fill a template's replacement field.
///
/// `format_into` receives the spec text between ':' and '}' and appends the
/// rendered value to `out`. Errors are short reasons; the template renderer
/// attaches the spec and value kind.
pub trait FormatValue {
    /// Name of the value's kind, used in error messages.
    fn kind(&self) -> &'static str;

    /// Render `self` according to `spec`, appending to `out`.
    fn format_into(&self, spec: &str, out: &mut String) -> Result<(), &'static str>;
}

impl<T: FormatValue + ?Sized> FormatValue for &T {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn format_into(&self, spec: &str, out: &mut String) -> Result<(), &'static str> {
        (**self).format_into(spec, out)
    }
}

fn is_integer_type(ty: Option<char>) -> bool {
    matches!(ty, None | Some('d' | 'x' | 'X' | 'o' | 'b' | 'B' | 'c'))
}

fn render_integer(
    negative: bool,
    magnitude: u128,
    spec: &StandardSpec,
    out: &mut String,
) -> Result<(), &'static str> {
    if spec.precision.is_some() {
        return Err("precision not allowed for this argument type");
    }

    let (digits, radix_prefix) = match spec.ty {
        None | Some('d') => (magnitude.to_string(), ""),
        Some('x') => (format!("{magnitude:x}"), "0x"),
        Some('X') => (format!("{magnitude:X}"), "0X"),
        Some('o') => (format!("{magnitude:o}"), if magnitude == 0 { "" } else { "0" }),
        Some('b') => (format!("{magnitude:b}"), "0b"),
        Some('B') => (format!("{magnitude:b}"), "0B"),
        Some('c') => {
            spec.require_non_numeric()?;
            let c = u32::try_from(magnitude)
                .ok()
                .filter(|_| !negative)
                .and_then(char::from_u32)
                .ok_or("invalid character code")?;
            spec.pad(out, "", c.encode_utf8(&mut [0; 4]), Align::Left);
            return Ok(());
        }
        Some(_) => return Err("invalid type specifier"),
    };

    let mut prefix = String::new();
    if let Some(sign) = spec.sign_char(negative) {
        prefix.push(sign);
    }
    if spec.alternate {
        prefix.push_str(radix_prefix);
    }
    spec.pad(out, &prefix, &digits, Align::Right);
    Ok(())
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl FormatValue for $t {
            fn kind(&self) -> &'static str {
                "integer"
            }

            fn format_into(&self, spec: &str, out: &mut String) -> Result<(), &'static str> {
                let spec = StandardSpec::parse(spec)?;
                render_integer(*self < 0, (*self as i128).unsigned_abs(), &spec, out)
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl FormatValue for $t {
            fn kind(&self) -> &'static str {
                "integer"
            }

            fn format_into(&self, spec: &str, out: &mut String) -> Result<(), &'static str> {
                let spec = StandardSpec::parse(spec)?;
                render_integer(false, *self as u128, &spec, out)
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

/// Floating-point types the renderer accepts.
trait Float: Copy + Display + LowerExp {
    fn is_finite(self) -> bool;
    fn is_nan(self) -> bool;
    fn is_sign_negative(self) -> bool;
    fn abs(self) -> Self;
    fn percent(self) -> Self;
}

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl Float for $t {
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            fn is_sign_negative(self) -> bool {
                <$t>::is_sign_negative(self)
            }

            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            fn percent(self) -> Self {
                self * 100.0
            }
        }

        impl FormatValue for $t {
            fn kind(&self) -> &'static str {
                "floating-point"
            }

            fn format_into(&self, spec: &str, out: &mut String) -> Result<(), &'static str> {
                render_float(*self, &StandardSpec::parse(spec)?, out)
            }
        }
    )*};
}

impl_float!(f32, f64);

/// Rewrite Rust's `1.5e3` exponent notation as `1.5e+03`.
fn c_exponent(s: &str) -> String {
    let Some((mantissa, exp)) = s.split_once('e') else {
        return s.to_owned();
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
}

/// Split Rust's exponent notation into its significant digits and exponent.
fn digits_and_exponent(s: &str) -> (String, i32) {
    let (mantissa, exp) = s.split_once('e').unwrap_or((s, "0"));
    let digits = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exp.parse().unwrap_or(0))
}

/// Lay `digits` (d.ddd × 10^exp) out in fixed notation.
fn fixed_from_digits(digits: &str, exp: i32) -> String {
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("0.{zeros}{digits}");
    }
    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        format!("{digits}{}", "0".repeat(int_len - digits.len()))
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

fn strip_trailing_zeros(body: &str) -> String {
    let (mantissa, exp) = match body.find('e') {
        Some(i) => body.split_at(i),
        None => (body, ""),
    };
    if !mantissa.contains('.') {
        return body.to_owned();
    }
    let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{mantissa}{exp}")
}

fn render_float<F: Float>(
    value: F,
    spec: &StandardSpec,
    out: &mut String,
) -> Result<(), &'static str> {
    let upper = matches!(spec.ty, Some('F' | 'E' | 'G'));
    // The sign bit of a NaN is platform noise; never show it.
    let negative = value.is_sign_negative() && !value.is_nan();
    let abs = value.abs();

    if !matches!(
        spec.ty,
        None | Some('f' | 'F' | 'e' | 'E' | 'g' | 'G' | '%')
    ) {
        return Err("invalid type specifier");
    }

    let mut prefix = String::new();
    if let Some(sign) = spec.sign_char(negative) {
        prefix.push(sign);
    }

    if !value.is_finite() {
        let body = match (value.is_nan(), upper) {
            (true, false) => "nan",
            (true, true) => "NAN",
            (false, false) => "inf",
            (false, true) => "INF",
        };
        let spec = StandardSpec {
            zero_pad: false,
            ..*spec
        };
        spec.pad(out, &prefix, body, Align::Right);
        return Ok(());
    }

    let mut body = match (spec.ty, spec.precision) {
        (None, None) => {
            let (digits, exp) = digits_and_exponent(&format!("{abs:e}"));
            if (-4..16).contains(&exp) {
                fixed_from_digits(&digits, exp)
            } else {
                c_exponent(&format!("{abs:e}"))
            }
        }
        (Some('f' | 'F'), precision) => {
            let precision = precision.unwrap_or(6);
            let mut body = format!("{abs:.precision$}");
            if spec.alternate && precision == 0 {
                body.push('.');
            }
            body
        }
        (Some('e' | 'E'), precision) => {
            let precision = precision.unwrap_or(6);
            let mut body = c_exponent(&format!("{abs:.precision$e}"));
            if spec.alternate && precision == 0 {
                if let Some(i) = body.find('e') {
                    body.insert(i, '.');
                }
            }
            body
        }
        (Some('%'), precision) => {
            let precision = precision.unwrap_or(6);
            format!("{:.precision$}%", abs.percent())
        }
        // 'g', 'G', or a bare precision
        (_, precision) => {
            let precision = precision.unwrap_or(6).max(1);
            let mantissa_digits = precision - 1;
            let sci = format!("{abs:.mantissa_digits$e}");
            let (_, exp) = digits_and_exponent(&sci);
            let body = if exp >= -4 && exp < precision as i32 {
                let decimals = (precision as i32 - 1 - exp) as usize;
                format!("{abs:.decimals$}")
            } else {
                c_exponent(&sci)
            };
            if spec.alternate {
                body
            } else {
                strip_trailing_zeros(&body)
            }
        }
    };

    if spec.alternate && spec.ty.is_none() && spec.precision.is_none() && !body.contains('.') {
        match body.find('e') {
            Some(i) => body.insert(i, '.'),
            None => body.push('.'),
        }
    }
    if upper {
        body.make_ascii_uppercase();
    }

    spec.pad(out, &prefix, &body, Align::Right);
    Ok(())
}

impl FormatValue for str {
    fn kind(&self) -> &'static str {
        "string"
    }

    fn format_into(&self, spec: &str, out: &mut String) -> Result<(), &'static str> {
        let spec = StandardSpec::parse(spec)?;
        spec.require_non_numeric()?;
        if !matches!(spec.ty, None | Some('s')) {
            return Err("invalid type specifier");
        }
        match spec.precision {
            Some(precision) => {
                let end = self
                    .char_indices()
                    .nth(precision)
                    .map_or(self.len(), |(i, _)| i);
                spec.pad(out, "", &self[..end], Align::Left);
            }
            None => spec.pad(out, "", self, Align::Left),
        }
        Ok(())
    }
}

impl FormatValue for String {
    fn kind(&self) -> &'static str {
        "string"
    }

    fn format_into(&self, spec: &str, out: &mut String) -> Result<(), &'static str> {
        self.as_str().format_into(spec, out)
    }
}

impl FormatValue for char {
    fn kind(&self) -> &'static str {
        "char"
    }

    fn format_into(&self, spec: &str, out: &mut String) -> Result<(), &'static str> {
        let spec = StandardSpec::parse(spec)?;
        if matches!(spec.ty, None | Some('c')) {
            spec.require_non_numeric()?;
            if spec.precision.is_some() {
                return Err("precision not allowed for this argument type");
            }
            spec.pad(out, "", self.encode_utf8(&mut [0; 4]), Align::Left);
            return Ok(());
        }
        if !is_integer_type(spec.ty) {
            return Err("invalid type specifier");
        }
        render_integer(false, u128::from(u32::from(*self)), &spec, out)
    }
}

impl FormatValue for bool {
    fn kind(&self) -> &'static str {
        "bool"
    }

    fn format_into(&self, spec: &str, out: &mut String) -> Result<(), &'static str> {
        let spec = StandardSpec::parse(spec)?;
        if matches!(spec.ty, None | Some('s')) {
            spec.require_non_numeric()?;
            if spec.precision.is_some() {
                return Err("precision not allowed for this argument type");
            }
            let text = if *self { "true" } else { "false" };
            spec.pad(out, "", text, Align::Left);
            return Ok(());
        }
        if !is_integer_type(spec.ty) || spec.ty == Some('c') {
            return Err("invalid type specifier");
        }
        render_integer(false, u128::from(*self), &spec, out)
    }
}
