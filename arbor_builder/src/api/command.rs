use crate::api::{Context, Parameter};

#[cfg(feature = "unit_test")]
use crate::api::CommandTree;
#[cfg(feature = "unit_test")]
use crate::parser::Dispatch;

/// The callback invoked with the [`Context`] of a resolved command.
pub type Behavior = Box<dyn Fn(&Context) + Send + Sync>;

/// A command (or sub-command) of the command tree.
///
/// ### Example
/// ```
/// # use arbor_builder as arbor;
/// use arbor::{Command, CommandTree, Kind, Parameter};
///
/// let cli = CommandTree::new(
///     Command::new("program")
///         .about("My program that does awesome stuff.  Check it out!")
///         .add(Parameter::argument(Kind::String, "file").required())
///         .behavior(|context| {
///             println!("{}", context.argument::<String>("file").unwrap());
///         }),
/// )
/// .build();
///
/// cli.exec_tokens(&["a.txt"]).unwrap();
/// ```
pub struct Command {
    pub(crate) name: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) summary: Option<String>,
    pub(crate) about: Option<String>,
    pub(crate) parameters: Vec<Parameter>,
    pub(crate) exact_arguments: bool,
    pub(crate) behavior: Option<Behavior>,
}

impl Command {
    /// Create a command.
    /// The name is how the command is selected on the Cli (and, for the root, how it is shown in the usage line).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::default(),
            summary: None,
            about: None,
            parameters: Vec::default(),
            exact_arguments: false,
            behavior: None,
        }
    }

    /// Add an alternative name by which the command may be selected.
    /// The root command cannot have aliases.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Document the command in the `Commands:` section of its parent's help message.
    /// If repeated, only the final summary will apply.
    pub fn summary(mut self, description: impl Into<String>) -> Self {
        self.summary.replace(description.into());
        self
    }

    /// Document the command in its own help message, below the usage line.
    /// If repeated, only the final about message will apply.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Add an argument/option to the command.
    ///
    /// The order of argument parameters corresponds to their positional order during parsing.
    /// The order of option parameters does not affect the parsing semantics.
    pub fn add(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Reject positional tokens beyond the declared arguments (with [`UsageError::UnexpectedArgument`](./enum.UsageError.html)).
    ///
    /// By default, the overflow is joined into the final argument instead.
    ///
    /// ### Example
    /// ```
    /// # use arbor_builder as arbor;
    /// use arbor::{Command, CommandTree, Kind, Parameter, UsageError};
    ///
    /// let cli = CommandTree::new(
    ///     Command::new("program")
    ///         .add(Parameter::argument(Kind::String, "message"))
    ///         .exact_arguments(),
    /// )
    /// .build();
    ///
    /// assert_eq!(
    ///     cli.parse_tokens(&["hello", "world"]).unwrap_err(),
    ///     UsageError::UnexpectedArgument("world".to_string())
    /// );
    /// ```
    pub fn exact_arguments(mut self) -> Self {
        self.exact_arguments = true;
        self
    }

    /// Set the callback invoked when the command is resolved.
    /// If repeated, only the final behavior will apply.
    ///
    /// Without a behavior, the command prints its help message.
    pub fn behavior(mut self, behavior: impl Fn(&Context) + Send + Sync + 'static) -> Self {
        self.behavior.replace(Box::new(behavior));
        self
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Dispatch this command in isolation, as if it were the root of a command tree.
    /// Tests a command definition without building the entire program.
    ///
    /// ### Example
    /// ```
    /// # use arbor_builder as arbor;
    /// use arbor::{Command, Dispatch, Kind, Parameter};
    ///
    /// fn status() -> Command {
    ///     Command::new("status").add(Parameter::option(Kind::Bool, "short", Some('s')))
    /// }
    ///
    /// match status().test_dispatch(&["-s"]).unwrap() {
    ///     Dispatch::Invoke(context) => assert!(context.option::<bool>("short").unwrap()),
    ///     Dispatch::Help(_) => unreachable!(),
    /// }
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_dispatch(self, tokens: &[&str]) -> Result<Dispatch, String> {
        let cli = CommandTree::new(self)
            .build_cli()
            .map_err(|error| error.to_string())?;
        cli.parse_tokens(tokens).map_err(|error| error.to_string())
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("parameters", &self.parameters)
            .field("exact_arguments", &self.exact_arguments)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Kind;

    #[test]
    fn builder() {
        let command = Command::new("remote")
            .alias("r")
            .alias("rem")
            .summary("--this will get discarded--")
            .summary("Manage remotes.")
            .about("Manage the set of tracked repositories.")
            .add(Parameter::option(Kind::Bool, "verbose", Some('v')))
            .add(Parameter::argument(Kind::String, "name"));

        assert_eq!(command.name, "remote");
        assert_eq!(command.aliases, vec!["r", "rem"]);
        assert_eq!(command.summary, Some("Manage remotes.".to_string()));
        assert_eq!(
            command.about,
            Some("Manage the set of tracked repositories.".to_string())
        );
        assert_eq!(command.parameters.len(), 2);
        assert!(!command.exact_arguments);
        assert!(command.behavior.is_none());
        assert!(Command::new("x").exact_arguments().exact_arguments);
    }

    #[test]
    fn behavior() {
        let command = Command::new("x").behavior(|_| {});
        assert!(command.behavior.is_some());
    }

    #[test]
    #[cfg(feature = "unit_test")]
    fn test_dispatch() {
        // Setup
        fn status() -> Command {
            Command::new("status")
                .add(Parameter::option(Kind::Bool, "short", Some('s')))
                .add(Parameter::argument(Kind::String, "path").required())
        }

        // Execute & verify
        match status().test_dispatch(&["-s", "src"]).unwrap() {
            Dispatch::Invoke(context) => {
                assert!(context.option::<bool>("short").unwrap());
                assert_eq!(context.argument::<String>("path").unwrap(), "src");
                assert_eq!(context.invocation_path(), ["status"]);
            }
            Dispatch::Help(_) => unreachable!(),
        }
        assert_matches!(status().test_dispatch(&["-h"]), Ok(Dispatch::Help(help)) => {
            assert!(help.starts_with("Usage: status [OPTIONS] path"));
        });
        assert_eq!(
            status().test_dispatch(&[]).unwrap_err(),
            "Missing or empty required field 'path'."
        );
        assert_eq!(
            Command::new("status")
                .add(Parameter::argument(Kind::Bool, "flag"))
                .test_dispatch(&[])
                .unwrap_err(),
            "Command 'status' cannot have the bool argument 'flag'; a bool is only set by an option's presence."
        );
    }

    #[test]
    fn debug() {
        assert_eq!(
            format!(
                "{:?}",
                Command::new("remote").add(Parameter::argument(Kind::String, "name"))
            ),
            "Command { name: \"remote\", aliases: [], parameters: [Arg[string, name]], exact_arguments: false }"
        );
    }
}
