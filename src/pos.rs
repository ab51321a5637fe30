// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp::Eq;

/// Both line and col are zero based; Emacs uses 1-based line
/// numbering, so line is incremented by 1 in Display. `offset`
/// counts characters (not bytes) from the start of the stream.

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, PartialOrd, Ord)]
pub struct Pos {
    pub offset: u64,
    pub line: u32,
    pub col: u32,
}

impl Pos {
    /// The position of the character following `c`, if `c` is at
    /// `self`.
    pub fn after(self, c: char) -> Pos {
        if c == '\n' {
            Pos { offset: self.offset + 1, line: self.line + 1, col: 0 }
        } else {
            Pos { offset: self.offset + 1, line: self.line, col: self.col + 1 }
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        // This, when prefixed with a Debug style path string, is
        // following the Emacs convention for location information.
        f.write_fmt(format_args!("@{}.{}", self.line + 1, self.col))
    }
}

#[cfg(test)]
mod tests {
    use super::Pos;

    #[test]
    fn after_newline_starts_next_line() {
        let p = Pos::default().after('a').after('\n');
        assert_eq!(p, Pos { offset: 2, line: 1, col: 0 });
        assert_eq!(p.after('b'), Pos { offset: 3, line: 1, col: 1 });
    }

    #[test]
    fn display_is_one_based_line() {
        let p = Pos { offset: 7, line: 2, col: 4 };
        assert_eq!(p.to_string(), "@3.4");
    }
}
