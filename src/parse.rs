// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading symbols and strings, including the escape sequences
//! allowed in strings. Numbers are in [number](../number/index.html).

use crate::buffered_chars::CharResult;
use crate::pos::Pos;
use crate::read::{Reader, ReadError, ReadErrorWithPos, At};
use kstring::KString;

fn try_u32_to_char(code: u32) -> Result<char, ReadError> {
    char::from_u32(code).ok_or(ReadError::InvalidCodePoint(code))
}

impl<I: Iterator<Item = CharResult>> Reader<I> {
    /// Read symbol characters until whitespace, a delimiter or the end
    /// of input. The result is empty if the lookahead isn't a symbol
    /// character; the caller decides what that means.
    pub fn read_symbol(&mut self) -> KString {
        let mut out = String::new();
        self.read_symbol_into(&mut out);
        KString::from_string(out)
    }

    pub(crate) fn read_symbol_into(&mut self, out: &mut String) {
        while self.is_valid_symbol() {
            if let Some(c) = self.next_char() {
                out.push(c);
            }
        }
    }

    /// Read a string, which must start at the lookahead. Consumes the
    /// closing delimiter and the whitespace after it.
    pub fn read_string(&mut self) -> Result<KString, ReadErrorWithPos> {
        let start = self.pos();
        if ! self.is_string_start() {
            return Err(ReadError::NotAString.at(start))
        }
        self.advance();
        let mut out = String::new();
        while ! self.is_string_end() {
            match self.peek() {
                None => return Err(self.eof_error("string", start)),
                Some('\\') => {
                    let c = self.read_char()?;
                    out.push(c);
                }
                Some(c) => {
                    out.push(c);
                    self.advance();
                }
            }
        }
        self.advance();
        self.skip_whitespace();
        Ok(KString::from_string(out))
    }

    /// Read one character, decoding it if it is an escape sequence
    /// (starting with a backslash):
    ///
    /// * `\a \b \f \n \r \t \v`: the usual control characters
    /// * `\uXXXX`: exactly 4 hex digits
    /// * `\xX`, `\xXX`: 1 or 2 hex digits
    /// * `\O`, `\OO`, `\OOO`: 1 to 3 octal digits
    /// * any other letter or digit is an error, anything else
    ///   (e.g. `\"`, `\\`, `\'`) stands for itself.
    pub fn read_char(&mut self) -> Result<char, ReadErrorWithPos> {
        let start = self.pos();
        match self.next_char() {
            None => Err(self.eof_error("character", start)),
            Some('\\') => self.read_escape(start),
            Some(c) => Ok(c),
        }
    }

    // After the backslash.
    fn read_escape(&mut self, start: Pos) -> Result<char, ReadErrorWithPos> {
        let c = match self.next_char() {
            Some(c) => c,
            None => return Err(self.eof_error("escape sequence", start)),
        };
        match c {
            'a' => Ok('\x07'), // alarm
            'b' => Ok('\x08'), // backspace
            'f' => Ok('\x0C'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            'v' => Ok('\x0B'),
            'u' => {
                let code = self.read_hex_escape(c, start, 4, 4)?;
                try_u32_to_char(code).at(start)
            }
            'x' => {
                let code = self.read_hex_escape(c, start, 1, 2)?;
                try_u32_to_char(code).at(start)
            }
            '0'..='7' => {
                let mut code = c as u32 - '0' as u32;
                for _ in 0..2 {
                    if ! self.is_radix(8) {
                        break;
                    }
                    if let Some(d) = self.next_char().and_then(|d| d.to_digit(8)) {
                        code = code * 8 + d;
                    }
                }
                try_u32_to_char(code).at(start)
            }
            c if c.is_ascii_alphanumeric() => {
                Err(ReadError::IllegalEscape(c).at(start))
            }
            c => Ok(c),
        }
    }

    // Between `min` and `max` hex digits after `\<kind>`.
    fn read_hex_escape(&mut self, kind: char, start: Pos, min: usize, max: usize)
                       -> Result<u32, ReadErrorWithPos> {
        let mut code = 0;
        let mut numdigits = 0;
        while numdigits < max && self.is_radix(16) {
            if let Some(d) = self.next_char().and_then(|d| d.to_digit(16)) {
                code = code * 16 + d;
                numdigits += 1;
            }
        }
        if numdigits < min {
            if self.at_end() {
                return Err(self.eof_error("escape sequence", start))
            }
            return Err(ReadError::IllegalEscape(kind).at(start))
        }
        Ok(code)
    }
}
