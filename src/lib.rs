//! `arbor` is a command tree parser for Rust.
//!
//! A program declares a tree of named commands, each with typed options and typed positional arguments.
//! `arbor` resolves the Cli input to a single command of the tree, binds the rest of the input to that command's parameters, and invokes the command's behavior.
//! Specifically, `arbor` prioritizes the following design concerns:
//! * *Command tree paradigm*:
//! Commands nest arbitrarily deep, and each is selected by its name or any of its aliases (ex: `git remote add`, or `git remote a`).
//! * *Typed parameters*:
//! Every parameter declares its [`Kind`]; the input is cast before any behavior runs.
//! Behaviors read the typed values back out of a [`Context`] (ex: `context.option::<i32>("count")`).
//! * *Fail early*:
//! Configuration mistakes (ex: a repeated parameter name) are reported when the tree is built, never when the program is used.
//! * *Deterministic help*:
//! The help message is a pure function of the tree, so the same program always prints the same text.
//! We do not aim to support rich display configurations, such as colour output, shell completions, etc.
//!
//! # Usage
//! More examples are outlined in [the source](https://github.com/arbor-cli/arbor/tree/main/demos).
//!
//! ```no_run
#![doc = include_str!("../demos/remote.rs")]
//! ```
//!
//! ```console
//! $ remote -h
//! Usage: remote [COMMAND] [OPTIONS]
//!
//! Manage the set of tracked repositories.
//!
//! Commands:
//!   add (a)     Add a remote.
//!   prune       Delete stale references.
//!   rename      Rename a remote.
//!
//! Options:
//!   -h, --help        [Optional, Type: bool] Display the help text and exit.
//!   -v, --verbose     [Optional, Type: bool] Show the remote urls.
//!
//! $ remote a --help
//! Usage: remote add [OPTIONS] name url
//!
//! Options:
//!   -b, --branch     [Optional, Type: string] The branch to track.
//!   -h, --help       [Optional, Type: bool] Display the help text and exit.
//!
//! Arguments:
//!   name     [Required, Type: string]
//!   url      [Required, Type: string]
//!
//! $ remote add origin https://example.com/repo.git -b=main
//! Added 'origin' at https://example.com/repo.git.
//! Tracking 'main'.
//!
//! $ remote add origin
//! Usage error: Missing or empty required field 'url'.
//!
//! $ remote prune origin --older-than soon
//! Usage error: Invalid value for '--older-than'. Expected an integer (int32), got 'soon'.
//! ```
//!
//! # Builder Api
//! Configure `arbor` by starting with a root [`Command`], and `add`ing parameters.
//! There are two classes of parameters: [`Parameter::option`] and [`Parameter::argument`].
//! Each declares a [`Kind`]: `Bool`, `String`, `Int8`, `Int16`, `Int32`, `Int64`, `Float32` or `Float64`.
//!
//! Wrap the root in a [`CommandTree`], and [`CommandTree::attach`] sub-commands to any command of the tree.
//! Finally, [`CommandTree::build`] the [`Cli`] and [`Cli::exec`] it.
//!
//! ```no_run
#![doc = include_str!("../demos/echo.rs")]
//! ```
//!
//! ### Initials
//! A parameter which is not specified on the Cli holds its *initial* value: the one declared via [`Parameter::initial`], or otherwise the zero value of its kind (`false`, `""`, `0`, `0.0`).
//! Use [`Context::is_present`] to tell an initial apart from the same value given on the Cli.
//!
//! ### Testing
//! [`Cli::parse_tokens`] resolves and binds the input without invoking any behavior, returning the [`Dispatch`] for inspection.
//! With the `unit_test` feature, `Command::test_dispatch` does the same for a single command, outside of any tree.
//!
//! # Cli Semantics
//! `arbor` parses the Cli tokens according to the following set of rules.
//!
//! * The leading tokens which name a sub-command (by name or alias) descend the tree.
//! Descent stops at the first flag, or the first token which names no sub-command of the current command.
//! * Options are specified via `--NAME VALUE`, `--NAME=VALUE`, `-N VALUE` or `-N=VALUE`.
//! Only the first `=` splits, and its right hand side is always a value (ex: `--offset=-5`).
//! * `Bool` options are set by presence alone and never take a value (ex: `--verbose file.txt` sets `verbose` and leaves `file.txt` for the arguments).
//! * When an option is repeated, the last value wins.
//! Short options are never combined (ex: `-abc` is an unknown option).
//! * Arguments are bound positionally, in declared order.
//! Tokens beyond the final argument are joined (by single spaces) into the final argument (ex: `echo hello world` binds `message = "hello world"`).
//! Use [`Command::exact_arguments`] to reject these tokens instead.
//! * `-h`/`--help` anywhere in the input prints the help message of the resolved command and exits with code `0`, regardless of the other tokens.
//! * Any other invalid input prints a single line usage error and exits with code `1`.
//! The behavior of the command is only invoked after the entire input binds successfully.
//! * A command without a behavior prints its help message.
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events for tree construction, command resolution and binding.
//! * `unit_test`: expose `Command::test_dispatch`.

pub use arbor_builder::*;
