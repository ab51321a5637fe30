// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Numbers, and the grammar for numeric literals:
//!
//! * `#<radix>r<digits>` (or `R`), radix 2..36 in decimal
//! * `0x<hex>`, `0b<binary>`, `0<octal>`
//! * `<decimal>`, `<decimal>.<decimal places>`, `0.<decimal places>`
//!
//! where decimal places may carry one exponent marker `e`/`E`,
//! optionally directly followed by one sign. Matching is longest
//! match without backtracking: whatever can't continue the literal
//! is left for the next read (`0.19+1` is `0.19`, then `+1`).

use crate::buffered_chars::CharResult;
use crate::pos::Pos;
use crate::read::{Reader, ReadError, ReadErrorWithPos};
use num::BigInt;

#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    /// Only used for integers that don't fit `Integer`.
    BigInteger(BigInt),
    Float(f64),
}

impl Number {
    /// Parse a digit run in `radix` (2..36), trying `i64` first.
    /// `None` if `digits` is empty or contains anything not valid in
    /// `radix`.
    pub fn parse_integer(digits: &str, radix: u32) -> Option<Number> {
        if ! (2..=36).contains(&radix)
            || digits.is_empty()
            || ! digits.chars().all(|c| c.is_digit(radix))
        {
            return None
        }
        if let Ok(n) = i64::from_str_radix(digits, radix) {
            Some(Number::Integer(n))
        } else {
            BigInt::parse_bytes(digits.as_bytes(), radix).map(Number::BigInteger)
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(n) => Some(*n),
            _ => None
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Number::Float(x) => Some(*x),
            _ => None
        }
    }

    pub fn is_integer(&self) -> bool {
        ! matches!(self, Number::Float(_))
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Number {
        Number::Integer(n)
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Number {
        Number::Float(x)
    }
}

impl From<BigInt> for Number {
    fn from(n: BigInt) -> Number {
        Number::BigInteger(n)
    }
}

impl<I: Iterator<Item = CharResult>> Reader<I> {
    /// Read a numeric literal; the lookahead should be `#` or a
    /// decimal digit.
    pub fn read_number(&mut self) -> Result<Number, ReadErrorWithPos> {
        let start = self.pos();
        match self.peek() {
            Some('#') => {
                self.advance();
                let radix = self.read_digits(10).parse::<u32>().ok()
                    .filter(|r| (2..=36).contains(r))
                    .ok_or_else(|| ReadError::MalformedRadixPrefix.at(start))?;
                match self.peek() {
                    Some('r') | Some('R') => self.advance(),
                    _ => return Err(ReadError::MalformedRadixPrefix.at(start))
                }
                self.read_integer(radix)
            }
            Some('0') => {
                self.advance();
                match self.peek() {
                    Some('.') => self.read_float(String::from("0"), start),
                    Some('x') | Some('X') => {
                        self.advance();
                        self.read_integer(16)
                    }
                    Some('b') | Some('B') => {
                        self.advance();
                        self.read_integer(2)
                    }
                    _ if self.is_radix(8) => self.read_integer(8),
                    _ => Ok(Number::Integer(0))
                }
            }
            _ => {
                let digits = self.read_digits(10);
                if self.peek() == Some('.') {
                    self.read_float(digits, start)
                } else {
                    integer_or_error(digits, 10, start)
                }
            }
        }
    }

    /// The maximal run of digits valid in `radix`, possibly empty.
    pub fn read_digits(&mut self, radix: u32) -> String {
        let mut out = String::new();
        while self.is_radix(radix) {
            if let Some(c) = self.next_char() {
                out.push(c);
            }
        }
        out
    }

    /// A digit run in `radix`; an empty run is an error.
    pub fn read_integer(&mut self, radix: u32) -> Result<Number, ReadErrorWithPos> {
        let start = self.pos();
        let digits = self.read_digits(radix);
        integer_or_error(digits, radix, start)
    }

    // The lookahead is the '.' after `int_part`.
    fn read_float(&mut self, int_part: String, start: Pos)
                  -> Result<Number, ReadErrorWithPos> {
        let mut text = int_part;
        text.push('.');
        self.advance();
        let exponent = self.read_decimal_places(&mut text);
        text.push_str(&exponent);
        match text.parse::<f64>() {
            Ok(x) => Ok(Number::Float(x)),
            Err(_) => Err(ReadError::InvalidNumber { digits: text, radix: 10 }
                          .at(start))
        }
    }

    /// Append the digits after the decimal point to `mantissa`, and
    /// return the exponent part (`e`, sign, digits), which may be
    /// empty or incomplete.
    fn read_decimal_places(&mut self, mantissa: &mut String) -> String {
        let mut exponent = String::new();
        loop {
            match self.peek() {
                Some('e') | Some('E') if exponent.is_empty() => {
                    exponent.push('e');
                }
                Some(c @ ('+' | '-')) if exponent.len() == 1 => {
                    exponent.push(c);
                }
                Some(c) if c.is_ascii_digit() => {
                    match exponent.len() {
                        0 => mantissa.push(c),
                        1 => {
                            exponent.push('+');
                            exponent.push(c);
                        }
                        _ => exponent.push(c),
                    }
                }
                _ => break,
            }
            self.advance();
        }
        exponent
    }
}

fn integer_or_error(digits: String, radix: u32, start: Pos)
                    -> Result<Number, ReadErrorWithPos> {
    match Number::parse_integer(&digits, radix) {
        Some(n) => Ok(n),
        None => Err(ReadError::InvalidNumber { digits, radix }.at(start))
    }
}

#[cfg(test)]
mod tests {
    use super::Number;
    use crate::read::{reader_from_str, ReadError};
    use crate::settings::DEFAULT_SETTINGS;
    use num::BigInt;

    fn number(s: &str) -> Number {
        match reader_from_str(s, DEFAULT_SETTINGS).read_number() {
            Ok(n) => n,
            Err(e) => panic!("{:?}: {}", s, e),
        }
    }

    fn int(s: &str) -> i64 {
        number(s).as_i64().unwrap_or_else(|| panic!("{:?} is not an i64", s))
    }

    fn float(s: &str) -> f64 {
        number(s).as_f64().unwrap_or_else(|| panic!("{:?} is not a float", s))
    }

    fn error(s: &str) -> ReadError {
        match reader_from_str(s, DEFAULT_SETTINGS).read_number() {
            Ok(n) => panic!("{:?} should fail, got {:?}", s, n),
            Err(e) => e.err,
        }
    }

    #[test]
    fn decimal() {
        for i in 0..=10 {
            assert_eq!(int(&i.to_string()), i);
        }
        assert_eq!(int("9223372036854775807"), i64::MAX);
    }

    #[test]
    fn explicit_radix() {
        assert_eq!(int("#2r0"), 0);
        assert_eq!(int("#2r1"), 1);
        assert_eq!(int("#2r10"), 2);
        assert_eq!(int("#3r10"), 3);
        assert_eq!(int("#03r10"), 3);
        assert_eq!(int("#8r10"), 8);
        assert_eq!(int("#16rA"), 10);
        assert_eq!(int("#16rF"), 15);
        assert_eq!(int("#16rFF"), 255);
        assert_eq!(int("#16rff"), 255);
        assert_eq!(int("#16R10"), 16);
        assert_eq!(int("#36rz"), 35);
    }

    #[test]
    fn explicit_radix_errors() {
        for s in ["#2r2", "#2r]", "#3r3", "#03r3", "#8r8", "#16rG", "#2r"] {
            assert!(matches!(error(s), ReadError::InvalidNumber { .. }), "{:?}", s);
        }
        for s in ["#]r0", "#2", "#2x1", "#", "#1r0", "#37r0", "#0r0"] {
            assert!(matches!(error(s), ReadError::MalformedRadixPrefix), "{:?}", s);
        }
    }

    #[test]
    fn prefixed() {
        assert_eq!(int("0x10"), 16);
        assert_eq!(int("0XfF"), 255);
        assert_eq!(int("0b10"), 2);
        assert_eq!(int("0B1"), 1);
        assert_eq!(int("010"), 8);
        assert_eq!(int("07"), 7);
        assert_eq!(int("00"), 0);
        assert_eq!(int("0"), 0);
        for s in ["0x", "0xG", "0b", "0b2"] {
            assert!(matches!(error(s), ReadError::InvalidNumber { .. }), "{:?}", s);
        }
    }

    #[test]
    fn zero_followed_by_non_octal_digit_is_zero() {
        let mut r = reader_from_str("08", DEFAULT_SETTINGS);
        assert_eq!(r.read_number().unwrap(), Number::Integer(0));
        assert_eq!(r.peek(), Some('8'));
    }

    #[test]
    fn floats() {
        assert_eq!(float("0."), 0.0);
        assert_eq!(float("0.0"), 0.0);
        assert_eq!(float("0.1"), 0.1);
        assert_eq!(float("0.19"), 0.19);
        assert_eq!(float("0.19e1"), 0.19e1);
        assert_eq!(float("0.19e+10"), 0.19e10);
        assert_eq!(float("0.19e-10"), 0.19e-10);
        assert_eq!(float("1."), 1.0);
        assert_eq!(float("1.19e+1"), 1.19e1);
        assert_eq!(float("1.19E-1"), 1.19e-1);
        assert_eq!(float("9991.19e1"), 9991.19e1);
        assert_eq!(float("9991.19e-10"), 9991.19e-10);
    }

    #[test]
    fn sign_without_exponent_ends_the_literal() {
        let mut r = reader_from_str("0.19+1", DEFAULT_SETTINGS);
        assert_eq!(r.read_number().unwrap(), Number::Float(0.19));
        assert_eq!(r.peek(), Some('+'));
        let mut r = reader_from_str("1.19-1", DEFAULT_SETTINGS);
        assert_eq!(r.read_number().unwrap(), Number::Float(1.19));
        assert_eq!(r.peek(), Some('-'));
    }

    #[test]
    fn second_exponent_marker_ends_the_literal() {
        let mut r = reader_from_str("1.5e2e3", DEFAULT_SETTINGS);
        assert_eq!(r.read_number().unwrap(), Number::Float(150.0));
        assert_eq!(r.peek(), Some('e'));
    }

    #[test]
    fn exponent_without_digits_is_invalid() {
        assert!(matches!(error("1.5e"), ReadError::InvalidNumber { .. }));
        assert!(matches!(error("1.5e+"), ReadError::InvalidNumber { .. }));
    }

    #[test]
    fn overflow_falls_back_to_bigint() {
        let s = "123456789012345678901234567890";
        assert_eq!(number(s),
                   Number::BigInteger(s.parse::<BigInt>().unwrap()));
        assert_eq!(number("#16r10000000000000000"),
                   Number::BigInteger(BigInt::from(1u128 << 64)));
        assert!(! matches!(number("#16r7FFFFFFFFFFFFFFF"), Number::BigInteger(_)));
    }

    #[test]
    fn not_a_number() {
        assert!(matches!(error("A"), ReadError::InvalidNumber { .. }));
        assert!(matches!(error("]"), ReadError::InvalidNumber { .. }));
    }

    #[test]
    fn parse_integer_rejects_foreign_digits() {
        assert_eq!(Number::parse_integer("", 10), None);
        assert_eq!(Number::parse_integer("12", 2), None);
        assert_eq!(Number::parse_integer("-1", 10), None);
        assert_eq!(Number::parse_integer("zz", 36), Some(Number::Integer(35 * 36 + 35)));
    }
}
