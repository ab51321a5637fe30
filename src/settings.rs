// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Settings for reading: which characters open and close the
//! bracketing constructs, and a few policies.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub start: char,
    pub end: char,
}

impl Delimiters {
    pub const fn new(start: char, end: char) -> Self {
        Delimiters { start, end }
    }

    pub fn contains(self, c: char) -> bool {
        c == self.start || c == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub string: Delimiters,
    pub list: Delimiters,
    pub array: Delimiters,
    /// Separator for the tail of a dotted pair inside lists; `None`
    /// reads it as an ordinary symbol.
    pub dot: Option<char>,
    /// Maximum nesting of lists and arrays. `None` means only the
    /// stack limits it (the limit with default settings on Linux is
    /// somewhere above 1000 levels).
    pub max_depth: Option<u32>,
}

pub const DEFAULT_SETTINGS : Settings = Settings {
    string: Delimiters::new('"', '"'),
    list: Delimiters::new('(', ')'),
    array: Delimiters::new('[', ']'),
    dot: Some('.'),
    max_depth: None,
};

/// Clojure-ish map braces for arrays, square brackets become symbol
/// characters.
pub const BRACE_ARRAYS : Settings = Settings {
    array: Delimiters::new('{', '}'),
    ..DEFAULT_SETTINGS
};

impl Default for Settings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

impl Settings {
    /// Whether `c` opens or closes any of the bracketing constructs.
    pub fn is_delimiter_char(&self, c: char) -> bool {
        self.string.contains(c) || self.list.contains(c) || self.array.contains(c)
    }
}
