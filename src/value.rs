// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runtime data types representing a literal read from text.

//! Lists are singly linked chains of [Cell](Cell)s, each owning its
//! successor; arrays are plain vectors. A list can end in a
//! non-list tail (dotted pair), but there are no cycles.

use crate::number::Number;
use kstring::KString;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Symbol(KString),
    String(KString),
    Number(Number),
    List(List),
    Array(Vec<Value>),
}

impl Value {
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(l) => Some(l),
            _ => None
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(v) => Some(v),
            _ => None
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Value {
        Value::Number(n)
    }
}

impl From<List> for Value {
    fn from(l: List) -> Value {
        Value::List(l)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Value {
        Value::Array(v)
    }
}

/// What follows a cell.
pub enum Rest {
    Nil,
    Cell(Box<Cell>),
    /// Non-list tail of a dotted pair.
    Dotted(Value),
}

pub struct Cell {
    pub value: Value,
    pub rest: Rest,
}

// Unlink iteratively, the derived drop would recurse once per cell.
impl Drop for Cell {
    fn drop(&mut self) {
        let mut rest = std::mem::replace(&mut self.rest, Rest::Nil);
        while let Rest::Cell(mut cell) = rest {
            rest = std::mem::replace(&mut cell.rest, Rest::Nil);
        }
    }
}

/// The empty list has no cell at all.
#[derive(Default)]
pub struct List {
    first: Option<Box<Cell>>,
}

// Build a chain back to front; `tail`, if given, ends up behind the
// last value.
fn build_rest(values: Vec<Value>, tail: Option<Value>) -> Rest {
    let mut rest = match tail {
        Some(v) => Rest::Dotted(v),
        None => Rest::Nil,
    };
    for value in values.into_iter().rev() {
        rest = Rest::Cell(Box::new(Cell { value, rest }));
    }
    rest
}

fn tail_of(mut cell: &Cell) -> Option<&Value> {
    loop {
        match &cell.rest {
            Rest::Nil => return None,
            Rest::Cell(next) => cell = &**next,
            Rest::Dotted(v) => return Some(v),
        }
    }
}

fn debug_chain(name: &str, first: Option<&Cell>, f: &mut std::fmt::Formatter<'_>)
               -> std::fmt::Result {
    f.write_str(name)?;
    let mut l = f.debug_list();
    l.entries(Iter { next: first });
    if let Some(tail) = first.and_then(tail_of) {
        l.entry(&format_args!(". {:?}", tail));
    }
    l.finish()
}

// Clone, compare and print cell by cell; derived impls would recurse
// once per cell.

impl Clone for Rest {
    fn clone(&self) -> Rest {
        match self {
            Rest::Nil => Rest::Nil,
            Rest::Dotted(v) => Rest::Dotted(v.clone()),
            Rest::Cell(cell) => build_rest(
                Iter { next: Some(&**cell) }.cloned().collect(),
                tail_of(cell).cloned()),
        }
    }
}

impl Clone for Cell {
    fn clone(&self) -> Cell {
        Cell { value: self.value.clone(), rest: self.rest.clone() }
    }
}

impl PartialEq for Rest {
    fn eq(&self, other: &Rest) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Rest::Nil, Rest::Nil) => return true,
                (Rest::Dotted(x), Rest::Dotted(y)) => return x == y,
                (Rest::Cell(x), Rest::Cell(y)) => {
                    if x.value != y.value {
                        return false
                    }
                    a = &x.rest;
                    b = &y.rest;
                }
                _ => return false,
            }
        }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Cell) -> bool {
        self.value == other.value && self.rest == other.rest
    }
}

impl std::fmt::Debug for Rest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rest::Nil => f.write_str("Nil"),
            Rest::Dotted(v) => f.debug_tuple("Dotted").field(v).finish(),
            Rest::Cell(cell) => debug_chain("Cell", Some(&**cell), f),
        }
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        debug_chain("Cell", Some(self), f)
    }
}

impl Clone for List {
    fn clone(&self) -> List {
        List { first: self.first.clone() }
    }
}

impl std::fmt::Debug for List {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        debug_chain("List", self.first.as_deref(), f)
    }
}

impl PartialEq for List {
    fn eq(&self, other: &List) -> bool {
        self.first == other.first
    }
}

impl List {
    pub fn new() -> List {
        List { first: None }
    }

    /// Build the chain back to front in one pass; `tail`, if given,
    /// becomes the dotted tail of the last cell. A tail without any
    /// values gives the empty list (callers ensure this doesn't
    /// happen).
    pub fn from_values(values: Vec<Value>, tail: Option<Value>) -> List {
        let first = match build_rest(values, tail) {
            Rest::Cell(cell) => Some(cell),
            _ => None,
        };
        List { first }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn first(&self) -> Option<&Cell> {
        self.first.as_deref()
    }

    /// Number of cells (a dotted tail is not counted).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.first.as_deref() }
    }

    /// The non-list tail, if this is a dotted list.
    pub fn dotted_tail(&self) -> Option<&Value> {
        tail_of(self.first.as_deref()?)
    }

    pub fn is_proper(&self) -> bool {
        self.dotted_tail().is_none()
    }
}

impl From<Vec<Value>> for List {
    fn from(values: Vec<Value>) -> List {
        List::from_values(values, None)
    }
}

/// Iterates the values of the cells, in order.
pub struct Iter<'t> {
    next: Option<&'t Cell>,
}

impl<'t> Iterator for Iter<'t> {
    type Item = &'t Value;
    fn next(&mut self) -> Option<&'t Value> {
        let cell = self.next?;
        self.next = match &cell.rest {
            Rest::Cell(next) => Some(&**next),
            _ => None,
        };
        Some(&cell.value)
    }
}

impl<'t> IntoIterator for &'t List {
    type Item = &'t Value;
    type IntoIter = Iter<'t>;
    fn into_iter(self) -> Iter<'t> {
        self.iter()
    }
}

/// Easily create a symbol
pub fn symbol(s: &str) -> Value {
    Value::Symbol(KString::from_ref(s))
}

/// Easily create a string
pub fn string(s: &str) -> Value {
    Value::String(KString::from_ref(s))
}

/// Easily create a proper list
pub fn list(values: Vec<Value>) -> Value {
    Value::List(List::from(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_cell() {
        let l = List::from_values(vec![], None);
        assert!(l.is_empty());
        assert!(l.first().is_none());
        assert_eq!(l, List::new());
    }

    #[test]
    fn cells_keep_order() {
        let l = List::from(vec![symbol("a"), symbol("b"), symbol("c")]);
        let names: Vec<&str> = l.iter().filter_map(|v| v.as_symbol()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(l.len(), 3);
        assert!(l.is_proper());
    }

    #[test]
    fn dotted_tail_hangs_off_last_cell() {
        let l = List::from_values(vec![symbol("a"), symbol("b")], Some(symbol("c")));
        assert_eq!(l.len(), 2);
        assert_eq!(l.dotted_tail(), Some(&symbol("c")));
        let first = l.first().unwrap();
        match &first.rest {
            Rest::Cell(second) => {
                assert_eq!(second.value, symbol("b"));
                assert_eq!(second.rest, Rest::Dotted(symbol("c")));
            }
            other => panic!("expected a second cell, got {:?}", other),
        }
    }

    #[test]
    fn dropping_a_long_list_does_not_overflow() {
        let values: Vec<Value> = (0..1_000_000).map(|_| symbol("x")).collect();
        let l = List::from(values);
        assert_eq!(l.len(), 1_000_000);
        let copy = l.clone();
        assert!(copy == l);
        drop(l);
        drop(copy);
    }

    #[test]
    fn long_cell_chains_clone_compare_and_print() {
        let values: Vec<Value> = (0..200_000).map(|_| symbol("x")).collect();
        let l = List::from_values(values, Some(symbol("end")));
        let first = match l.first() {
            Some(cell) => cell,
            None => panic!("list is empty"),
        };
        let copy = first.clone();
        assert!(copy == *first);
        assert!(copy.rest == first.rest);
        let printed = format!("{:?}", copy);
        assert!(printed.starts_with("Cell["));
        assert!(printed.ends_with("]"));
        assert!(printed.contains(". Symbol("));
        let shorter = List::from(vec![symbol("x")]);
        assert!(shorter.first() != Some(first));
    }
}
