//! Builder module for `arbor`.
//! See [documentation root](https://docs.rs/arbor/latest/arbor/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod caster;
mod constant;
mod matcher;
mod model;
mod parser;
pub mod prelude;
mod schema;
mod tokens;

pub use api::*;
pub use model::*;
pub use parser::{AccessError, Cli, Dispatch, SetupError, UsageError};
pub use schema::{FieldSpec, OptionSpec};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
