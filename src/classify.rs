// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Predicates over the lookahead character. None of these consume
//! anything except `skip_whitespace`.

use crate::buffered_chars::CharResult;
use crate::read::Reader;

pub fn is_line_break_char(c: char) -> bool {
    c == '\n' || c == '\r'
}

pub fn is_whitespace_char(c: char) -> bool {
    c == ' ' || c == '\t' || is_line_break_char(c)
}

/// Digits of radix 2..36: '0'-'9', then 'A'-'Z' / 'a'-'z'.
pub fn is_radix_char(c: char, radix: u32) -> bool {
    (2..=36).contains(&radix) && c.is_digit(radix)
}

impl<I: Iterator<Item = CharResult>> Reader<I> {
    fn peek_is(&self, pred: impl Fn(char) -> bool) -> bool {
        self.peek().map_or(false, pred)
    }

    pub fn is_eof(&self) -> bool {
        self.at_end()
    }

    pub fn is_line_break(&self) -> bool {
        self.peek_is(is_line_break_char)
    }

    pub fn is_whitespace(&self) -> bool {
        self.peek_is(is_whitespace_char)
    }

    pub fn is_delimiter(&self, d: char) -> bool {
        self.peek() == Some(d)
    }

    pub fn is_string_start(&self) -> bool {
        self.is_delimiter(self.settings.string.start)
    }

    pub fn is_string_end(&self) -> bool {
        self.is_delimiter(self.settings.string.end)
    }

    pub fn is_list_start(&self) -> bool {
        self.is_delimiter(self.settings.list.start)
    }

    pub fn is_list_end(&self) -> bool {
        self.is_delimiter(self.settings.list.end)
    }

    pub fn is_array_start(&self) -> bool {
        self.is_delimiter(self.settings.array.start)
    }

    pub fn is_array_end(&self) -> bool {
        self.is_delimiter(self.settings.array.end)
    }

    pub fn is_alpha(&self) -> bool {
        self.peek_is(|c| c.is_ascii_alphabetic())
    }

    pub fn is_radix(&self, radix: u32) -> bool {
        self.peek_is(|c| is_radix_char(c, radix))
    }

    /// Anything but end of input, whitespace or one of the configured
    /// delimiters.
    pub fn is_valid_symbol(&self) -> bool {
        self.peek_is(|c| ! is_whitespace_char(c)
                     && ! self.settings.is_delimiter_char(c))
    }

    pub fn skip_whitespace(&mut self) {
        while self.is_whitespace() {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::read::reader_from_str;
    use crate::settings::{DEFAULT_SETTINGS, BRACE_ARRAYS};
    use super::is_radix_char;

    #[test]
    fn line_breaks() {
        for s in ["\n", "\r", "\n\r", "\r\n", "\n\r\n", "\r\n\r"] {
            let mut r = reader_from_str(s, DEFAULT_SETTINGS);
            while ! r.is_eof() {
                assert!(r.is_line_break(), "{:?} at {}", s, r.pos());
                assert!(r.is_whitespace());
                r.advance();
            }
        }
        assert!(! reader_from_str(" ", DEFAULT_SETTINGS).is_line_break());
    }

    #[test]
    fn skip_whitespace_stops_at_first_non_blank() {
        for (s, c) in [("", None), ("A", Some('A')), (" A", Some('A')),
                       ("   A", Some('A')), ("B   A", Some('B')),
                       (" \tA", Some('A')), ("\tB   A", Some('B')),
                       ("\r\n \n\tx", Some('x'))] {
            let mut r = reader_from_str(s, DEFAULT_SETTINGS);
            r.skip_whitespace();
            assert_eq!(r.peek(), c, "{:?}", s);
            r.skip_whitespace();
            assert_eq!(r.peek(), c, "idempotent for {:?}", s);
        }
    }

    #[test]
    fn whitespace_only_input_reaches_end() {
        for s in ["", " ", "\t\t", " \n \r\n\t "] {
            let mut r = reader_from_str(s, DEFAULT_SETTINGS);
            r.skip_whitespace();
            assert!(r.is_eof());
            assert_eq!(r.peek(), None);
        }
    }

    #[test]
    fn delimiters() {
        let mut r = reader_from_str("))", DEFAULT_SETTINGS);
        assert!(r.is_delimiter(')'));
        assert!(r.is_list_end());
        r.advance();
        assert!(r.is_delimiter(')'));
        let r = reader_from_str("(", DEFAULT_SETTINGS);
        assert!(! r.is_delimiter(')'));
        assert!(r.is_list_start());
    }

    #[test]
    fn symbol_chars_depend_on_settings() {
        for s in ["", "(", ")", "[", "]", "\"", " ", "\t", "\r", "\n"] {
            assert!(! reader_from_str(s, DEFAULT_SETTINGS).is_valid_symbol(),
                    "{:?}", s);
        }
        for s in ["{", "}", "A", "+", "'", "#", "."] {
            assert!(reader_from_str(s, DEFAULT_SETTINGS).is_valid_symbol(),
                    "{:?}", s);
        }
        assert!(! reader_from_str("{", BRACE_ARRAYS).is_valid_symbol());
        assert!(reader_from_str("[", BRACE_ARRAYS).is_valid_symbol());
    }

    #[test]
    fn radix_digits() {
        assert!(is_radix_char('1', 2));
        assert!(! is_radix_char('2', 2));
        assert!(is_radix_char('7', 8));
        assert!(! is_radix_char('8', 8));
        assert!(is_radix_char('f', 16));
        assert!(is_radix_char('F', 16));
        assert!(! is_radix_char('G', 16));
        assert!(is_radix_char('z', 36));
        assert!(is_radix_char('Z', 36));
        assert!(! is_radix_char('0', 37));
        assert!(! is_radix_char('0', 1));
    }

    #[test]
    fn alpha_is_ascii_letters() {
        assert!(reader_from_str("q", DEFAULT_SETTINGS).is_alpha());
        assert!(! reader_from_str("1", DEFAULT_SETTINGS).is_alpha());
        assert!(! reader_from_str("é", DEFAULT_SETTINGS).is_alpha());
    }
}
