use crate::api::CommandId;
use crate::model::Value;
use crate::parser::AccessError;
use crate::prelude::Primitive;
use crate::schema::FieldSpec;

/// The value of one option/argument, after binding.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundValue {
    field: FieldSpec,
    populated: bool,
    value: Value,
}

impl BoundValue {
    pub(crate) fn new(field: FieldSpec) -> Self {
        let value = field.initial().clone();
        Self {
            field,
            populated: false,
            value,
        }
    }

    // Last write wins.
    pub(crate) fn populate(&mut self, value: Value) {
        self.populated = true;
        self.value = value;
    }

    /// The static description of this option/argument.
    pub fn field(&self) -> &FieldSpec {
        &self.field
    }

    /// Whether the option/argument was specified on the Cli.
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// The bound value: the Cli input when populated, otherwise the declared initial (or zero value).
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// The result of a successful dispatch, handed to the behavior of the resolved command.
///
/// ### Example
/// ```
/// # use arbor_builder as arbor;
/// use arbor::{Command, CommandTree, Dispatch, Kind, Parameter};
///
/// let mut tree = CommandTree::new(Command::new("git"));
/// let remote = tree.attach(
///     tree.root(),
///     Command::new("remote").add(Parameter::option(Kind::Bool, "verbose", Some('v'))),
/// );
/// let cli = tree.build();
///
/// match cli.parse_tokens(&["remote", "-v"]).unwrap() {
///     Dispatch::Invoke(context) => {
///         assert_eq!(context.command(), remote);
///         assert_eq!(context.invocation_path(), &["git", "remote"]);
///         assert_eq!(context.raw_tokens(), &["remote", "-v"]);
///         assert!(context.option::<bool>("verbose").unwrap());
///     }
///     Dispatch::Help(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    options: Vec<BoundValue>,
    arguments: Vec<BoundValue>,
    help: String,
    invocation_path: Vec<String>,
    raw_tokens: Vec<String>,
    command: CommandId,
}

impl Context {
    pub(crate) fn new(
        options: Vec<BoundValue>,
        arguments: Vec<BoundValue>,
        help: String,
        invocation_path: Vec<String>,
        raw_tokens: Vec<String>,
        command: CommandId,
    ) -> Self {
        Self {
            options,
            arguments,
            help,
            invocation_path,
            raw_tokens,
            command,
        }
    }

    /// Read the value of the option `name` as the native type `T`.
    pub fn option<T: Primitive>(&self, name: &str) -> Result<T, AccessError> {
        read(&self.options, name)
    }

    /// Read the value of the argument `name` as the native type `T`.
    pub fn argument<T: Primitive>(&self, name: &str) -> Result<T, AccessError> {
        read(&self.arguments, name)
    }

    /// Whether the option/argument `name` was specified on the Cli.
    /// Unknown names are never present.
    pub fn is_present(&self, name: &str) -> bool {
        self.options
            .iter()
            .chain(self.arguments.iter())
            .any(|bound| bound.field().name() == name && bound.is_populated())
    }

    /// The options of the resolved command, in declared order (the implicit help option is first).
    pub fn options(&self) -> &[BoundValue] {
        &self.options
    }

    /// The arguments of the resolved command, in declared order.
    pub fn arguments(&self) -> &[BoundValue] {
        &self.arguments
    }

    /// The help message of the resolved command.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// The command names from the root to the resolved command.
    /// Aliases used on the Cli are reported by their primary name.
    pub fn invocation_path(&self) -> &[String] {
        &self.invocation_path
    }

    /// Every token handed to the dispatch, unmodified.
    pub fn raw_tokens(&self) -> &[String] {
        &self.raw_tokens
    }

    /// The resolved command.
    pub fn command(&self) -> CommandId {
        self.command
    }
}

fn read<T: Primitive>(bound: &[BoundValue], name: &str) -> Result<T, AccessError> {
    let bound = bound
        .iter()
        .find(|bound| bound.field().name() == name)
        .ok_or_else(|| AccessError::UnknownField(name.to_string()))?;

    T::from_value(bound.value()).ok_or_else(|| AccessError::KindMismatch {
        name: name.to_string(),
        requested: T::KIND,
        actual: bound.value().kind(),
    })
}
