use crate::domain::model::Sum;
use std::ffi::OsStr;

pub fn addition(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

pub fn sum(x: i32, y: i32) -> Sum {
    Sum {
        x,
        y,
        total: addition(x, y),
    }
}

fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Permissive integer conversion with C `atoi` rules.
///
/// Leading whitespace and a single sign are accepted, digits are read until the
/// first non-digit, and anything after that is ignored. Input without digits
/// converts to 0. Out-of-range values wrap. Works on raw bytes, so text that is
/// not UTF-8 converts the same way.
pub fn atoi(text: impl AsRef<[u8]>) -> i32 {
    let bytes = text.as_ref();
    let start = bytes.iter().position(|b| !is_c_space(*b)).unwrap_or(bytes.len());
    let bytes = &bytes[start..];

    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let magnitude = digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i32, |acc, b| {
            acc.wrapping_mul(10).wrapping_add(i32::from(b - b'0'))
        });

    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

/// `atoi` that leaves a debug trace when the text was not a clean integer.
pub fn parse_operand(text: &OsStr) -> i32 {
    let value = atoi(text.as_encoded_bytes());
    if text.to_str().and_then(|s| s.parse::<i32>().ok()).is_none() {
        tracing::debug!("operand {:?} is not a well-formed integer, using {}", text, value);
    }
    value
}
