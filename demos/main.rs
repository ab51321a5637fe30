// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use atomiser::context::{Context, SpecialContext};
use atomiser::read::{read_file, reader_from_read};
use atomiser::settings::{Settings, DEFAULT_SETTINGS, BRACE_ARRAYS};
use atomiser::value::Value;
use clap::Parser as ClapParser;
use std::io::stdin;
use std::path::PathBuf;
use anyhow::{Result, anyhow};


#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Print the values read (default: only count them)
    #[clap(long, value_parser)]
    print: bool,
    /// Use '{' and '}' for arrays instead of '[' and ']' (only when
    /// reading stdin)
    #[clap(long, value_parser)]
    braces: bool,
    /// Give up on lists and arrays nested deeper than this
    #[clap(long, value_parser)]
    max_depth: Option<u32>,
    /// Path to the input file (default: stdin)
    #[clap(value_parser)]
    input_path: Option<PathBuf>,
}

fn count_cells(v: &Value) -> usize {
    match v {
        Value::List(l) => l.iter().map(count_cells).sum::<usize>() + l.len(),
        Value::Array(vals) => vals.iter().map(count_cells).sum(),
        _ => 0,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let vals: Vec<Value> = if let Some(path) = &args.input_path {

        // Files always use the default settings.
        read_file(path)?

    } else {

        let settings = Settings {
            max_depth: args.max_depth,
            ..if args.braces { BRACE_ARRAYS } else { DEFAULT_SETTINGS }
        };
        let context = SpecialContext::new("stdin");
        let mut vals = Vec::new();
        for r in reader_from_read(stdin().lock(), settings) {
            match r {
                Ok(v) => vals.push(v),
                Err(e) => {
                    let e = e.in_context(Box::new(context));
                    return Err(anyhow!("{}", e))
                }
            }
        }
        vals

    };

    if args.print {
        for v in &vals {
            println!("{:?}", v);
        }
    }
    let ncells: usize = vals.iter().map(count_cells).sum();
    eprintln!(";; values = {}, cells = {} ({})",
              vals.len(),
              ncells,
              match &args.input_path {
                  Some(p) => format!("{:?}", p),
                  None => SpecialContext::new("stdin").name(),
              });
    Ok(())
}
