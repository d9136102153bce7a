use std::fmt;
use std::fmt::Formatter;
use crate::bencode::structs::bencode_integer::BencodeInteger;

impl BencodeInteger {
    /// Parses the text between `i` and `e`.
    ///
    /// Accepts an optional leading `-` followed by at least one ASCII digit.
    /// Leading zeros and `-0` are accepted and normalised away.
    pub fn parse(text: &[u8]) -> Option<BencodeInteger>
    {
        let (negative, digits) = match text.split_first() {
            Some((b'-', rest)) => (true, rest),
            _ => (false, text),
        };
        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }

        let significant = match digits.iter().position(|digit| *digit != b'0') {
            Some(first) => &digits[first..],
            None => return Some(BencodeInteger { digits: String::from("0") }),
        };

        let mut canonical = String::with_capacity(significant.len() + 1);
        if negative {
            canonical.push('-');
        }
        canonical.extend(significant.iter().map(|digit| *digit as char));
        Some(BencodeInteger { digits: canonical })
    }

    /// The value as `i64`, or `None` when it does not fit.
    pub fn as_i64(&self) -> Option<i64>
    {
        self.digits.parse::<i64>().ok()
    }

    pub fn as_str(&self) -> &str
    {
        &self.digits
    }

    pub fn is_negative(&self) -> bool
    {
        self.digits.starts_with('-')
    }
}

impl fmt::Display for BencodeInteger {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl From<i64> for BencodeInteger {
    fn from(data: i64) -> Self {
        BencodeInteger { digits: data.to_string() }
    }
}
