use crate::model::{Kind, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParameterClass {
    Opt,
    Arg,
}

/// An argument/option for a [`Command`](./struct.Command.html).
///
/// Options are specified via `--NAME VALUE` (or `--NAME=VALUE`, or the short name `-N VALUE`).
/// `Bool` options take no value; they are set to `true` by their presence alone.
/// Arguments are specified positionally, in the order they are added.
pub struct Parameter {
    pub(crate) class: ParameterClass,
    pub(crate) name: String,
    pub(crate) short: Option<char>,
    pub(crate) kind: Kind,
    pub(crate) required: bool,
    pub(crate) description: Option<String>,
    pub(crate) initial: Option<Value>,
}

impl Parameter {
    /// Create an option parameter.
    ///
    /// ### Example
    /// ```
    /// # use arbor_builder as arbor;
    /// use arbor::{Command, CommandTree, Dispatch, Kind, Parameter};
    ///
    /// let cli = CommandTree::new(
    ///     Command::new("program")
    ///         .add(Parameter::option(Kind::Bool, "verbose", Some('v')))
    ///         .add(Parameter::option(Kind::Int32, "count", None)),
    /// )
    /// .build();
    ///
    /// match cli.parse_tokens(&["-v", "--count", "3"]).unwrap() {
    ///     Dispatch::Invoke(context) => {
    ///         assert_eq!(context.option::<bool>("verbose").unwrap(), true);
    ///         assert_eq!(context.option::<i32>("count").unwrap(), 3);
    ///     }
    ///     Dispatch::Help(_) => unreachable!(),
    /// }
    /// ```
    pub fn option(kind: Kind, name: impl Into<String>, short: Option<char>) -> Self {
        Self {
            class: ParameterClass::Opt,
            name: name.into(),
            short,
            kind,
            required: false,
            description: None,
            initial: None,
        }
    }

    /// Create an argument parameter.
    ///
    /// When more tokens are provided than there are arguments, the overflow is joined (by single spaces) into the final argument.
    /// See [`Command::exact_arguments`](./struct.Command.html#method.exact_arguments) to reject the overflow instead.
    ///
    /// ### Example
    /// ```
    /// # use arbor_builder as arbor;
    /// use arbor::{Command, CommandTree, Dispatch, Kind, Parameter};
    ///
    /// let cli = CommandTree::new(
    ///     Command::new("program").add(Parameter::argument(Kind::String, "message")),
    /// )
    /// .build();
    ///
    /// match cli.parse_tokens(&["hello", "world", "!"]).unwrap() {
    ///     Dispatch::Invoke(context) => {
    ///         assert_eq!(context.argument::<String>("message").unwrap(), "hello world !");
    ///     }
    ///     Dispatch::Help(_) => unreachable!(),
    /// }
    /// ```
    pub fn argument(kind: Kind, name: impl Into<String>) -> Self {
        Self {
            class: ParameterClass::Arg,
            name: name.into(),
            short: None,
            kind,
            required: false,
            description: None,
            initial: None,
        }
    }

    /// Require the parameter to be specified on the Cli.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Document the parameter.
    /// If repeated, only the final description will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Declare the value this parameter holds when it is not specified on the Cli.
    /// Without an initial, the parameter holds the zero value of its kind.
    ///
    /// The value must be of the parameter's kind; otherwise building the command tree fails.
    ///
    /// ### Example
    /// ```
    /// # use arbor_builder as arbor;
    /// use arbor::{Command, CommandTree, Dispatch, Kind, Parameter};
    ///
    /// let cli = CommandTree::new(
    ///     Command::new("program")
    ///         .add(Parameter::option(Kind::Float64, "ratio", None).initial(0.5)),
    /// )
    /// .build();
    ///
    /// match cli.parse_tokens(&[]).unwrap() {
    ///     Dispatch::Invoke(context) => {
    ///         assert_eq!(context.option::<f64>("ratio").unwrap(), 0.5);
    ///         assert!(!context.is_present("ratio"));
    ///     }
    ///     Dispatch::Help(_) => unreachable!(),
    /// }
    /// ```
    pub fn initial(mut self, value: impl Into<Value>) -> Self {
        self.initial.replace(value.into());
        self
    }
}

impl std::fmt::Debug for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (class, name) = match &self.class {
            ParameterClass::Opt => ("Opt", format!("--{n}", n = self.name)),
            ParameterClass::Arg => ("Arg", self.name.clone()),
        };
        let short = match &self.short {
            Some(s) => format!(", -{s}"),
            None => "".to_string(),
        };
        let required = if self.required { ", required" } else { "" };

        write!(f, "{class}[{kind}, {name}{short}{required}]", kind = self.kind)
    }
}
