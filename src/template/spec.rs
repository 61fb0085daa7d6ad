//! Standard format spec parsing and padding.

/// Alignment of a value inside its field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

/// How the sign of a number is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    /// Only negative numbers get a sign
    #[default]
    Minus,
    /// Non-negative numbers get '+'
    Plus,
    /// Non-negative numbers get a leading space
    Space,
}

/// A parsed `[[fill]align][sign]['#']['0'][width]['.'precision]['L'][type]` spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardSpec {
    pub fill: char,
    pub align: Option<Align>,
    pub sign: Option<Sign>,
    pub alternate: bool,
    pub zero_pad: bool,
    pub width: usize,
    pub precision: Option<usize>,
    pub ty: Option<char>,
}

impl Default for StandardSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: None,
            sign: None,
            alternate: false,
            zero_pad: false,
            width: 0,
            precision: None,
            ty: None,
        }
    }
}

fn align_of(c: char) -> Option<Align> {
    match c {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        _ => None,
    }
}

/// Largest width or precision a spec may name.
const MAX_NUMBER: usize = i32::MAX as usize;

fn parse_number(chars: &[char], pos: &mut usize) -> Result<Option<usize>, &'static str> {
    let start = *pos;
    let mut n: usize = 0;
    while let Some(d) = chars.get(*pos).and_then(|c| c.to_digit(10)) {
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(d as usize))
            .filter(|&n| n <= MAX_NUMBER)
            .ok_or("number is too big")?;
        *pos += 1;
    }
    Ok((*pos > start).then_some(n))
}

impl StandardSpec {
    /// Parse a spec.
    pub fn parse(spec: &str) -> Result<Self, &'static str> {
        let (parsed, rest) = Self::parse_prefix(spec)?;
        let mut parsed = parsed;
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            if chars.next().is_some() || !c.is_ascii_alphabetic() && c != '%' {
                return Err("invalid format specifier");
            }
            parsed.ty = Some(c);
        }
        Ok(parsed)
    }

    /// Parse everything up to the presentation type and return the unparsed tail.
    pub(crate) fn parse_prefix(spec: &str) -> Result<(Self, &str), &'static str> {
        let chars: Vec<char> = spec.chars().collect();
        let mut out = StandardSpec::default();
        let mut pos = 0;

        if let Some(align) = chars.get(1).copied().and_then(align_of) {
            if chars[0] == '{' || chars[0] == '}' {
                return Err("invalid fill character '{'");
            }
            out.fill = chars[0];
            out.align = Some(align);
            pos = 2;
        } else if let Some(align) = chars.first().copied().and_then(align_of) {
            out.align = Some(align);
            pos = 1;
        }

        match chars.get(pos) {
            Some('+') => out.sign = Some(Sign::Plus),
            Some('-') => out.sign = Some(Sign::Minus),
            Some(' ') => out.sign = Some(Sign::Space),
            _ => {}
        }
        if out.sign.is_some() {
            pos += 1;
        }

        if chars.get(pos) == Some(&'#') {
            out.alternate = true;
            pos += 1;
        }

        if chars.get(pos) == Some(&'0') {
            out.zero_pad = true;
            pos += 1;
        }

        out.width = parse_number(&chars, &mut pos)?.unwrap_or(0);

        if chars.get(pos) == Some(&'.') {
            pos += 1;
            out.precision =
                Some(parse_number(&chars, &mut pos)?.ok_or("missing precision specifier")?);
        }

        // Locale-specific formatting uses the C locale, which changes nothing.
        if chars.get(pos) == Some(&'L') {
            pos += 1;
        }

        let consumed: usize = chars[..pos].iter().map(|c| c.len_utf8()).sum();
        Ok((out, &spec[consumed..]))
    }

    /// Sign, '#' and '0' only make sense for numbers.
    pub(crate) fn require_non_numeric(&self) -> Result<(), &'static str> {
        if self.sign.is_some() || self.alternate || self.zero_pad {
            return Err("format specifier requires numeric argument");
        }
        Ok(())
    }

    /// The character shown before a non-negative number.
    pub(crate) fn sign_char(&self, negative: bool) -> Option<char> {
        if negative {
            return Some('-');
        }
        match self.sign.unwrap_or_default() {
            Sign::Minus => None,
            Sign::Plus => Some('+'),
            Sign::Space => Some(' '),
        }
    }

    /// Append `body` to `out`, padded to the field width.
    ///
    /// `prefix` (sign, radix prefix) goes before any zero padding; `default_align`
    /// applies when the spec names no alignment.
    pub(crate) fn pad(&self, out: &mut String, prefix: &str, body: &str, default_align: Align) {
        let len = prefix.chars().count() + body.chars().count();
        let padding = self.width.saturating_sub(len);

        if self.align.is_none() && self.zero_pad {
            out.push_str(prefix);
            out.extend(std::iter::repeat_n('0', padding));
            out.push_str(body);
            return;
        }

        let (before, after) = match self.align.unwrap_or(default_align) {
            Align::Left => (0, padding),
            Align::Right => (padding, 0),
            Align::Center => (padding / 2, padding - padding / 2),
        };
        out.extend(std::iter::repeat_n(self.fill, before));
        out.push_str(prefix);
        out.push_str(body);
        out.extend(std::iter::repeat_n(self.fill, after));
    }
}
