// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A reader for S-expression style literals: symbols, strings,
//! numbers in several radixes, parenthesised lists and bracketed
//! arrays, turned into an in-memory [Value](value::Value) tree.
//!
//! * [read](read) has the [Reader](read::Reader), which reads one
//!   top-level value per call (or iterates over all of them), and
//!   conveniences like `read_str` and `read_file`.
//!
//! * The delimiters for strings, lists and arrays are configurable
//!   via [Settings](settings::Settings).
//!
//! * Errors carry the line and column of the offending input, and for
//!   files, the path.
//!
//! The reader is a recursive descent over a single character of
//! lookahead; it never backtracks. Nesting depth is limited only by
//! the stack unless `Settings::max_depth` is set. Nothing is evaluated,
//! and there is no way to print values back as text.
//!
//! ```
//! use atomiser::read::read_str;
//! use atomiser::value::Value;
//!
//! let vals = read_str("(0x10 \"hi\" [a b]) #2r101").unwrap();
//! assert_eq!(vals.len(), 2);
//! assert!(matches!(vals[0], Value::List(_)));
//! ```

pub mod buffered_chars;
pub mod classify;
pub mod context;
pub mod cursor;
pub mod number;
pub mod parse;
pub mod pos;
pub mod read;
pub mod settings;
pub mod value;
