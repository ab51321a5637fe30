// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Where a character stream comes from (other than position), for
//! error messages.

use crate::pos::Pos;
use std::fmt::{Debug, Formatter};
use std::path::PathBuf;

pub trait Context : Debug + Send + Sync {
    /// How the source is named before a colon, e.g. a quoted path.
    fn name(&self) -> String;

    /// "in" for files, "from" for streams.
    fn preposition(&self) -> &'static str;

    /// Written after the error reason and a space.
    fn format_with_pos(&self, pos: Pos, f: &mut Formatter<'_>)
                       -> Result<(), std::fmt::Error> {
        write!(f, "{} {}{}", self.preposition(), self.name(), pos)
    }
}

/// Input read from a file.
#[derive(Debug)]
pub struct FileContext {
    pub path: PathBuf
}

impl Context for FileContext {
    fn name(&self) -> String {
        format!("{:?}", self.path)
    }
    fn preposition(&self) -> &'static str { "in" }
}

/// Input without a path, e.g. "stdin".
#[derive(Debug)]
pub struct SpecialContext {
    name: String
}

impl SpecialContext {
    pub fn new(name: impl Into<String>) -> Self {
        SpecialContext { name: name.into() }
    }
}

impl Context for SpecialContext {
    fn name(&self) -> String {
        format!("({})", self.name)
    }
    fn preposition(&self) -> &'static str { "from" }
}
