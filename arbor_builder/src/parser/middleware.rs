use std::env;

use crate::api::{CommandId, Context};
use crate::matcher::{Action, Binder, Bindings};
use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::tokens::{is_help, Token};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The outcome of dispatching Cli input.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// Help was requested; holds the help message of the resolved command.
    Help(String),
    /// The resolved command, with its bound options/arguments.
    Invoke(Context),
}

/// The configured command line interface.
/// Built via [`CommandTree::build`](./struct.CommandTree.html#method.build).
pub struct Cli {
    tree: usize,
    nodes: Vec<CommandNode>,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for Cli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cli")
            .field("tree", &self.tree)
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl Cli {
    pub(crate) fn new(
        tree: usize,
        nodes: Vec<CommandNode>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            tree,
            nodes,
            user_interface,
        }
    }

    /// Walk the tree along the leading tokens which name sub-commands.
    ///
    /// Help tokens are skipped (and kept for the binder), any other flag stops the walk.
    /// Returns the resolved node and the tokens left for it.
    fn resolve<'t>(&self, tokens: &[&'t str]) -> (usize, Vec<&'t str>) {
        let mut current = 0;
        let mut remaining = Vec::default();
        let mut position = 0;

        while position < tokens.len() {
            let token = tokens[position];

            if is_help(token) {
                remaining.push(token);
            } else if Token::classify(token).is_flag() {
                break;
            } else {
                match self.nodes[current].children.get(token) {
                    Some(&child) => {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!(
                                "Token '{token}' descends into '{}'.",
                                self.nodes[child].name
                            );
                        }

                        current = child;
                    }
                    None => break,
                }
            }

            position += 1;
        }

        remaining.extend_from_slice(&tokens[position..]);

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Resolved '{}', remaining {remaining:?}.",
                self.nodes[current].name
            );
        }

        (current, remaining)
    }

    fn invocation_path(&self, index: usize) -> Vec<String> {
        let mut path = vec![self.nodes[index].name.clone()];
        let mut parent = self.nodes[index].parent;

        while let Some(index) = parent {
            path.push(self.nodes[index].name.clone());
            parent = self.nodes[index].parent;
        }

        path.reverse();
        path
    }

    /// Resolve and bind the input tokens, without invoking any behavior or printing anything.
    ///
    /// The leading tokens which name sub-commands (by name or alias) select the command.
    /// The rest are bound to the options/arguments of that command.
    /// If the help switch (`-h` or `--help`) is anywhere in the input, the result is [`Dispatch::Help`], regardless of the other tokens.
    ///
    /// ### Example
    /// ```
    /// # use arbor_builder as arbor;
    /// use arbor::{Command, CommandTree, Dispatch, Kind, Parameter, UsageError};
    ///
    /// let mut tree = CommandTree::new(Command::new("git"));
    /// tree.attach(
    ///     tree.root(),
    ///     Command::new("status").alias("st").add(Parameter::option(Kind::Bool, "short", Some('s'))),
    /// );
    /// let cli = tree.build();
    ///
    /// for tokens in [["status", "-s"], ["st", "--short"]] {
    ///     match cli.parse_tokens(&tokens).unwrap() {
    ///         Dispatch::Invoke(context) => {
    ///             assert_eq!(context.invocation_path(), &["git", "status"]);
    ///             assert!(context.option::<bool>("short").unwrap());
    ///         }
    ///         Dispatch::Help(_) => unreachable!(),
    ///     }
    /// }
    /// assert_matches::assert_matches!(cli.parse_tokens(&["st", "--bogus", "-h"]), Ok(Dispatch::Help(_)));
    /// assert_eq!(
    ///     cli.parse_tokens(&["st", "--bogus"]).unwrap_err(),
    ///     UsageError::UnknownOption("--bogus".to_string())
    /// );
    /// ```
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<Dispatch, UsageError> {
        let (index, remaining) = self.resolve(tokens);
        let node = &self.nodes[index];

        match Binder::new(&node.schema).bind(&remaining)? {
            Action::PrintHelp => Ok(Dispatch::Help(node.help.clone())),
            Action::Bound(Bindings { options, arguments }) => Ok(Dispatch::Invoke(Context::new(
                options,
                arguments,
                node.help.clone(),
                self.invocation_path(index),
                tokens.iter().map(|token| token.to_string()).collect(),
                CommandId::new(self.tree, index),
            ))),
        }
    }

    /// Run the Cli against the input tokens.
    ///
    /// If the help switch is encountered, prints the help message and returns with `Err(0)`.
    /// If the input is invalid, prints the usage error and returns with `Err(1)`.
    /// Otherwise, invokes the behavior of the resolved command (or prints its help message, when it has no behavior).
    ///
    /// ### Example
    /// ```
    /// # use arbor_builder as arbor;
    /// use arbor::{Command, CommandTree, Kind, Parameter};
    ///
    /// let cli = CommandTree::new(
    ///     Command::new("program")
    ///         .add(Parameter::argument(Kind::Int32, "value").required())
    ///         .behavior(|context| assert_eq!(context.argument::<i32>("value").unwrap(), 7)),
    /// )
    /// .build();
    ///
    /// assert_eq!(cli.exec_tokens(&["7"]), Ok(()));
    /// assert_eq!(cli.exec_tokens(&["--help"]), Err(0));
    /// assert_eq!(cli.exec_tokens(&["seven"]), Err(1));
    /// ```
    pub fn exec_tokens(&self, tokens: &[&str]) -> Result<(), i32> {
        match self.parse_tokens(tokens) {
            Ok(Dispatch::Help(help)) => {
                self.user_interface.print(help);
                Err(0)
            }
            Ok(Dispatch::Invoke(context)) => {
                match &self.nodes[context.command().index()].behavior {
                    Some(behavior) => behavior(&context),
                    None => self.user_interface.print(context.help().to_string()),
                }

                Ok(())
            }
            Err(error) => {
                self.user_interface.print_error(&error);
                Err(1)
            }
        }
    }

    /// Run the Cli against the program's input, [`std::env::args`].
    ///
    /// Exits (via [`std::process::exit`]) with code `0` after printing the help message, or `1` after printing a usage error.
    pub fn exec(&self) {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.exec_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(()) => {}
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        };
    }

    #[cfg(test)]
    pub(crate) fn help(&self, index: usize) -> &str {
        &self.nodes[index].help
    }

    #[cfg(test)]
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
