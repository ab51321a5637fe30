// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The reader proper: dispatching on the lookahead character, and
//! reading lists and arrays by recursing back into the dispatcher.
//! Atoms are read in [parse](../parse/index.html) and
//! [number](../number/index.html).

use crate::pos::Pos;
use crate::context::{self, Context};
use crate::cursor::Cursor;
use crate::buffered_chars::{buffered_chars, CharResult};
use crate::settings::{Settings, DEFAULT_SETTINGS};
use crate::value::{Value, List};
use std::fmt::{Formatter, Display};
use std::io::Read;
use std::path::Path;
use std::fs::File;
use thiserror::Error;
use kstring::KString;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("{0}")]
    IO(anyhow::Error),
    #[error("unexpected EOF while reading {0}")]
    UnexpectedEof(&'static str),
    #[error("unmatched terminator '{0}'")]
    UnmatchedTerminator(char),
    #[error("not at the start of a string")]
    NotAString,
    #[error("not at the start of a list")]
    NotAList,
    #[error("not at the start of an array")]
    NotAnArray,
    #[error("illegal escape sequence '\\{0}'")]
    IllegalEscape(char),
    #[error("invalid code point {0}")]
    InvalidCodePoint(u32),
    #[error("invalid number {digits:?} for radix {radix}")]
    InvalidNumber { digits: String, radix: u32 },
    #[error("malformed radix prefix, expecting '#' followed by 2..36 and 'r'")]
    MalformedRadixPrefix,
    #[error("'.' without preceding item")]
    DotWithoutPrecedingItem,
    #[error("missing item after '.'")]
    MissingItemAfterDot,
    #[error("expecting '{0}' after the item following '.'")]
    ExpectedCloseAfterDottedTail(char),
    #[error("nesting too deep")]
    NestingTooDeep,
}

#[derive(Error, Debug)]
#[error("{err} {pos}")]
pub struct ReadErrorWithPos {
    pub err: ReadError,
    pub pos: Pos
}

impl ReadError {
    pub fn at(self, p: Pos) -> ReadErrorWithPos {
        ReadErrorWithPos {
            err: self,
            pos: p
        }
    }
}

pub(crate) trait At<T> {
    fn at(self, p: Pos) -> Result<T, ReadErrorWithPos>;
}

impl<T> At<T> for Result<T, ReadError> {
    fn at(self, p: Pos) -> Result<T, ReadErrorWithPos> {
        self.map_err(|e| e.at(p))
    }
}

#[derive(Error, Debug)]
pub struct ReadErrorWithPosContext {
    err_with_pos: ReadErrorWithPos,
    container: Box<dyn Context>
}

impl ReadErrorWithPosContext {
    pub fn error(&self) -> &ReadErrorWithPos {
        &self.err_with_pos
    }
}

impl Display for ReadErrorWithPosContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_fmt(format_args!("{} ",
                                 self.err_with_pos.err))?;
        self.container.format_with_pos(self.err_with_pos.pos, f)?;
        Ok(())
    }
}

impl ReadErrorWithPos {
    /// Attach the origin of the stream, e.g. a
    /// [FileContext](crate::context::FileContext).
    pub fn in_context(self, container: Box<dyn Context>)
                      -> ReadErrorWithPosContext {
        ReadErrorWithPosContext {
            err_with_pos: self,
            container
        }
    }
}

#[derive(Error, Debug)]
pub enum ReadErrorWithContext {
    #[error("{}: {0}", .1.name())]
    IO(std::io::Error, Box<dyn Context>)
}

#[derive(Error, Debug)]
pub enum ReadErrorWithLocation {
    #[error("{0}")]
    PC(Box<ReadErrorWithPosContext>),
    #[error("{0}")]
    IO(Box<ReadErrorWithContext>)
}

fn file_context(path: &Path) -> Box<dyn Context> {
    Box::new(context::FileContext { path: path.to_path_buf() })
}

/// Reads values from a character stream, one top-level value per
/// call to [read](Reader::read). Owns the cursor exclusively.
pub struct Reader<I> {
    pub(crate) cursor: Cursor<I>,
    pub(crate) settings: Settings,
    depth: u32,
    // Set once the iterator has yielded an error.
    failed: bool,
}

impl<I: Iterator<Item = CharResult>> Reader<I> {
    pub fn new(cs: I, settings: Settings) -> Self {
        Reader {
            cursor: Cursor::new(cs),
            settings,
            depth: 0,
            failed: false,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn peek(&self) -> Option<char> {
        self.cursor.peek()
    }

    pub fn advance(&mut self) {
        self.cursor.advance()
    }

    pub(crate) fn next_char(&mut self) -> Option<char> {
        self.cursor.next_char()
    }

    pub fn at_end(&self) -> bool {
        self.cursor.at_end()
    }

    pub fn pos(&self) -> Pos {
        self.cursor.pos()
    }

    /// The error for running out of input while reading `what`,
    /// which started at `start`. If the stream broke off because of
    /// an error, that is reported instead.
    pub(crate) fn eof_error(&mut self, what: &'static str, start: Pos)
                            -> ReadErrorWithPos {
        if let Some(e) = self.cursor.take_error() {
            ReadError::IO(e).at(self.cursor.pos())
        } else {
            ReadError::UnexpectedEof(what).at(start)
        }
    }

    /// Read exactly one top-level value, leaving the cursor after it
    /// (and the whitespace following a closing delimiter). At the end
    /// of input this fails with `UnexpectedEof`, every time.
    pub fn read(&mut self) -> Result<Value, ReadErrorWithPos> {
        self.depth = 0;
        let start = self.pos();
        let v = self.read_datum()?;
        tracing::trace!("read value from {} to {}", start, self.pos());
        Ok(v)
    }

    fn read_datum(&mut self) -> Result<Value, ReadErrorWithPos> {
        self.skip_whitespace();
        let pos = self.pos();
        let c = match self.peek() {
            Some(c) => c,
            None => return Err(self.eof_error("a value", pos)),
        };
        if self.is_list_start() {
            Ok(Value::List(self.read_list()?))
        } else if self.is_array_start() {
            Ok(Value::Array(self.read_array()?))
        } else if self.is_string_start() {
            Ok(Value::String(self.read_string()?))
        } else if self.is_list_end() || self.is_array_end() || self.is_string_end() {
            Err(ReadError::UnmatchedTerminator(c).at(pos))
        } else if c == '#' || c.is_ascii_digit() {
            Ok(Value::Number(self.read_number()?))
        } else {
            Ok(Value::Symbol(self.read_symbol()))
        }
    }

    fn enter(&mut self, start: Pos) -> Result<(), ReadErrorWithPos> {
        if let Some(max) = self.settings.max_depth {
            if self.depth >= max {
                return Err(ReadError::NestingTooDeep.at(start))
            }
        }
        self.depth += 1;
        Ok(())
    }

    // Consume the closing delimiter and following whitespace.
    fn leave(&mut self) {
        self.advance();
        self.skip_whitespace();
    }

    fn is_dot(&self) -> bool {
        self.settings.dot.is_some() && self.peek() == self.settings.dot
    }

    /// Read a list, which must start at the lookahead. Values are
    /// collected first, the cells are built once the list is closed.
    pub fn read_list(&mut self) -> Result<List, ReadErrorWithPos> {
        let start = self.pos();
        if ! self.is_list_start() {
            return Err(ReadError::NotAList.at(start))
        }
        self.enter(start)?;
        let res = self.read_list_items(start);
        self.depth -= 1;
        res
    }

    fn read_list_items(&mut self, start: Pos) -> Result<List, ReadErrorWithPos> {
        self.advance();
        let mut values = Vec::new();
        let mut tail = None;
        loop {
            self.skip_whitespace();
            if self.is_list_end() {
                break;
            }
            if self.at_end() {
                return Err(self.eof_error("list", start))
            }
            if self.is_dot() {
                let dotpos = self.pos();
                let mut tmp = String::new();
                if let Some(dot) = self.next_char() {
                    tmp.push(dot);
                }
                if self.is_valid_symbol() {
                    // `...`, `.foo`: just a symbol
                    self.read_symbol_into(&mut tmp);
                    values.push(Value::Symbol(KString::from_string(tmp)));
                    continue;
                }
                if values.is_empty() {
                    return Err(ReadError::DotWithoutPrecedingItem.at(dotpos))
                }
                self.skip_whitespace();
                if self.is_list_end() {
                    return Err(ReadError::MissingItemAfterDot.at(dotpos))
                }
                if self.at_end() {
                    return Err(self.eof_error("list", start))
                }
                tail = Some(self.read_datum()?);
                self.skip_whitespace();
                if self.at_end() {
                    return Err(self.eof_error("list", start))
                }
                if ! self.is_list_end() {
                    return Err(ReadError::ExpectedCloseAfterDottedTail(
                        self.settings.list.end).at(self.pos()))
                }
                break;
            }
            values.push(self.read_datum()?);
        }
        self.leave();
        // `(a . (b c))` is just `(a b c)`
        let tail = match tail {
            Some(Value::List(l)) => {
                values.extend(l.iter().cloned());
                l.dotted_tail().cloned()
            }
            other => other,
        };
        Ok(List::from_values(values, tail))
    }

    /// Read an array, which must start at the lookahead.
    pub fn read_array(&mut self) -> Result<Vec<Value>, ReadErrorWithPos> {
        let start = self.pos();
        if ! self.is_array_start() {
            return Err(ReadError::NotAnArray.at(start))
        }
        self.enter(start)?;
        let res = self.read_array_items(start);
        self.depth -= 1;
        res
    }

    fn read_array_items(&mut self, start: Pos) -> Result<Vec<Value>, ReadErrorWithPos> {
        self.advance();
        let mut values = Vec::new();
        loop {
            self.skip_whitespace();
            if self.is_array_end() {
                break;
            }
            if self.at_end() {
                return Err(self.eof_error("array", start))
            }
            values.push(self.read_datum()?);
        }
        self.leave();
        Ok(values)
    }
}

/// Yields the top-level values until the input is exhausted; unlike
/// [read](Reader::read), reaching the end between values is not an
/// error. Ends after the first error.
impl<I: Iterator<Item = CharResult>> Iterator for Reader<I> {
    type Item = Result<Value, ReadErrorWithPos>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None
        }
        self.skip_whitespace();
        if self.at_end() {
            let pos = self.pos();
            self.failed = true;
            return self.cursor.take_error().map(|e| Err(ReadError::IO(e).at(pos)))
        }
        let res = self.read();
        self.failed = res.is_err();
        Some(res)
    }
}

pub fn reader_from_read<R: Read>(
    fh: R,
    settings: Settings,
) -> Reader<impl Iterator<Item = CharResult>>
{
    Reader::new(buffered_chars(fh), settings)
}

pub fn reader_from_str(
    s: &str,
    settings: Settings,
) -> Reader<impl Iterator<Item = CharResult> + '_>
{
    reader_from_read(s.as_bytes(), settings)
}

pub fn read_all(
    fh: impl Read,
) -> Result<Vec<Value>, ReadErrorWithPos>
{
    reader_from_read(fh, DEFAULT_SETTINGS).collect()
}

pub fn read_str(s: &str) -> Result<Vec<Value>, ReadErrorWithPos> {
    read_all(s.as_bytes())
}

pub fn read_file(path: &Path) -> Result<Vec<Value>, ReadErrorWithLocation> {
    tracing::debug!("reading {:?}", path);
    let fh = File::open(path).map_err(|e| {
        ReadErrorWithLocation::IO(Box::new(
            ReadErrorWithContext::IO(e, file_context(path))))
    })?;
    let v = read_all(fh).map_err(|e| {
        ReadErrorWithLocation::PC(Box::new(e.in_context(file_context(path))))
    })?;
    Ok(v)
}
