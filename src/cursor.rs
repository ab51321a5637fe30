// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Single character lookahead over a character stream.

//! None of the operations fail: an error from the underlying stream
//! is treated as the end of input, and kept around so that the reader
//! can report it instead of a plain premature EOF.

use crate::buffered_chars::CharResult;
use crate::pos::Pos;

pub struct Cursor<I> {
    cs: I,
    current: Option<(char, Pos)>,
    // Position just after the last character delivered.
    end: Pos,
    error: Option<anyhow::Error>,
}

impl<I: Iterator<Item = CharResult>> Cursor<I> {
    pub fn new(cs: I) -> Self {
        let mut cursor = Cursor {
            cs,
            current: None,
            end: Pos::default(),
            error: None,
        };
        cursor.load();
        cursor
    }

    fn load(&mut self) {
        if self.error.is_some() {
            self.current = None;
            return;
        }
        self.current = match self.cs.next() {
            Some(Ok((c, pos))) => {
                self.end = pos.after(c);
                Some((c, pos))
            }
            Some(Err(e)) => {
                self.error = Some(e);
                None
            }
            None => None,
        };
    }

    /// The lookahead character, `None` at the end of input.
    pub fn peek(&self) -> Option<char> {
        self.current.map(|(c, _)| c)
    }

    /// Consume the lookahead character. Does nothing at the end of
    /// input.
    pub fn advance(&mut self) {
        if self.current.is_some() {
            self.load();
        }
    }

    /// Consume the lookahead character and return it.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek();
        self.advance();
        c
    }

    pub fn at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Position of the lookahead character, or the position right
    /// after the last character once at the end.
    pub fn pos(&self) -> Pos {
        match self.current {
            Some((_, pos)) => pos,
            None => self.end,
        }
    }

    /// Whether the stream ended because of an error.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Hand out the stream error, if any. The cursor stays at the end
    /// of input afterwards.
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }
}
