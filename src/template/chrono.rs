//! Duration formatting with `%`-style conversions.
//!
//! An empty spec renders `42s` (or `1.234s` with a millisecond remainder).
//! Otherwise the spec is literal text mixed with conversions such as `%H`,
//! `%M` and `%S`; see `render_conversion` for the full set.

use std::fmt::Write as _;
use std::time::Duration;

use super::value::FormatValue;

struct Clock {
    secs: u64,
    millis: u32,
}

impl Clock {
    fn new(d: &Duration) -> Self {
        Self {
            secs: d.as_secs(),
            millis: d.subsec_millis(),
        }
    }

    fn hour(&self) -> u64 {
        (self.secs / 3600) % 24
    }

    fn hour12(&self) -> u64 {
        match (self.secs / 3600) % 12 {
            0 => 12,
            h => h,
        }
    }

    fn minute(&self) -> u64 {
        (self.secs / 60) % 60
    }

    fn second(&self) -> u64 {
        self.secs % 60
    }

    fn am_pm(&self) -> &'static str {
        if self.hour() < 12 { "AM" } else { "PM" }
    }
}

fn two(out: &mut String, n: u64) {
    let _ = write!(out, "{n:02}");
}

fn render_conversion(clock: &Clock, c: char, out: &mut String) -> Result<(), &'static str> {
    match c {
        '%' => out.push('%'),
        'n' => out.push('\n'),
        't' => out.push('\t'),
        'H' => two(out, clock.hour()),
        'I' => two(out, clock.hour12()),
        'M' => two(out, clock.minute()),
        'S' => {
            two(out, clock.second());
            if clock.millis != 0 {
                let _ = write!(out, ".{:03}", clock.millis);
            }
        }
        'p' => out.push_str(clock.am_pm()),
        'R' => {
            two(out, clock.hour());
            out.push(':');
            two(out, clock.minute());
        }
        'T' | 'X' => {
            two(out, clock.hour());
            out.push(':');
            two(out, clock.minute());
            out.push(':');
            two(out, clock.second());
        }
        'r' => {
            two(out, clock.hour12());
            out.push(':');
            two(out, clock.minute());
            out.push(':');
            two(out, clock.second());
            out.push(' ');
            out.push_str(clock.am_pm());
        }
        // A duration has no calendar date; these render the zeroed date.
        'c' => {
            out.push_str("Sun Jan  0 ");
            two(out, clock.hour());
            out.push(':');
            two(out, clock.minute());
            out.push(':');
            two(out, clock.second());
            out.push_str(" 1900");
        }
        'D' | 'x' => out.push_str("01/00/00"),
        'F' => out.push_str("0001-00-00"),
        'a' | 'A' | 'w' | 'u' | 'b' | 'B' => {}
        _ => return Err("invalid format"),
    }
    Ok(())
}

impl FormatValue for Duration {
    fn kind(&self) -> &'static str {
        "duration"
    }

    fn format_into(&self, spec: &str, out: &mut String) -> Result<(), &'static str> {
        let clock = Clock::new(self);

        if spec.is_empty() {
            let _ = write!(out, "{}", clock.secs);
            if clock.millis != 0 {
                let _ = write!(out, ".{:03}", clock.millis);
            }
            out.push('s');
            return Ok(());
        }

        let mut chars = spec.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            let mut conversion = chars.next().ok_or("invalid format")?;
            if conversion == 'O' {
                conversion = chars.next().ok_or("invalid format")?;
                if !matches!(conversion, 'H' | 'I' | 'M' | 'S' | 'u' | 'w') {
                    return Err("invalid format");
                }
            }
            render_conversion(&clock, conversion, out)?;
        }
        Ok(())
    }
}
