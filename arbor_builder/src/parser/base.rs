use thiserror::Error;

use crate::api::Behavior;
use crate::caster::InvalidValue;
use crate::model::Kind;
use crate::schema::Schema;

/// A programmer error in the configuration of the command tree (ex: a repeated parameter name).
///
/// Detected when the tree is built, before any Cli input is processed.
#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("Received a command definition with an empty name.")]
    EmptyCommandName,

    #[error("Received a command definition with the invalid name '{0}'.")]
    InvalidCommandName(String),

    #[error("Root command '{0}' cannot have aliases.")]
    RootAliases(String),

    #[error("Command '{command}' has an invalid parameter name '{name}'.")]
    InvalidParameterName { command: String, name: String },

    #[error("Command '{command}' has an invalid short option '{short}'.")]
    InvalidShortOption { command: String, short: char },

    #[error("'{name}' is a reserved option. Command '{command}' cannot configure it.")]
    ReservedOption { command: String, name: String },

    #[error("'{short}' is a reserved short option. Command '{command}' cannot configure it.")]
    ReservedShortOption { command: String, short: char },

    #[error("Command '{command}' cannot duplicate the parameter '{name}'.")]
    DuplicateParameter { command: String, name: String },

    #[error("Command '{command}' cannot duplicate the short option '{short}'.")]
    DuplicateShortOption { command: String, short: char },

    #[error("Command '{command}' cannot have the bool argument '{name}'; a bool is only set by an option's presence.")]
    BoolArgument { command: String, name: String },

    #[error("Command '{command}' declares parameter '{name}' as {expected}, but its initial value is {actual}.")]
    InvalidInitial {
        command: String,
        name: String,
        expected: Kind,
        actual: Kind,
    },

    #[error("Could not attach '{child}'. Parent command does not exist.")]
    UnknownParent { child: String },

    #[error("Could not attach '{name}' to parent '{parent}'. A child command or alias already exists with the name '{name}'.")]
    DuplicateCommand { parent: String, name: String },
}

/// A user error in the Cli input (ex: an unknown option).
#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// A flag that names no option of the command.
    #[error("Unexpected option '{0}'.")]
    UnknownOption(String),

    /// A token which cannot be cast to the field's kind.
    #[error("Invalid value for '{field}'. {reason}")]
    InvalidValue { field: String, reason: String },

    /// A value-taking option at the end of the input, or immediately followed by another flag.
    #[error("Missing value for option '{0}'.")]
    MissingOptionValue(String),

    /// A required option/argument that was not specified.
    #[error("Missing or empty required field '{0}'.")]
    MissingRequiredField(String),

    /// A positional token with no argument to bind to.
    #[error("Unexpected argument '{0}'.")]
    UnexpectedArgument(String),
}

/// An error reading a value out of a [`Context`](./struct.Context.html).
#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The command declares no option/argument by this name.
    #[error("Unknown field '{0}'.")]
    UnknownField(String),

    /// The field holds a different kind than the one requested.
    #[error("Field '{name}' holds {actual} values, not {requested} values.")]
    KindMismatch {
        name: String,
        requested: Kind,
        actual: Kind,
    },
}

impl UsageError {
    pub(crate) fn invalid_value(field: impl Into<String>, error: InvalidValue) -> Self {
        UsageError::InvalidValue {
            field: field.into(),
            reason: error.to_string(),
        }
    }
}

/// A node of the built command tree.
///
/// Nodes live in a single arena; `children` and `parent` are indices into it.
pub(crate) struct CommandNode {
    pub(crate) name: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) summary: Option<String>,
    pub(crate) about: Option<String>,
    pub(crate) schema: Schema,
    pub(crate) behavior: Option<Behavior>,
    pub(crate) parent: Option<usize>,
    // Keyed by both the name and the aliases of each child.
    pub(crate) children: std::collections::HashMap<String, usize>,
    pub(crate) help: String,
}

impl std::fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("parent", &self.parent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_messages() {
        assert_eq!(
            SetupError::ReservedOption {
                command: "program".to_string(),
                name: "help".to_string(),
            }
            .to_string(),
            "'help' is a reserved option. Command 'program' cannot configure it."
        );
        assert_eq!(
            SetupError::DuplicateCommand {
                parent: "git".to_string(),
                name: "st".to_string(),
            }
            .to_string(),
            "Could not attach 'st' to parent 'git'. A child command or alias already exists with the name 'st'."
        );
        assert_eq!(
            SetupError::InvalidInitial {
                command: "program".to_string(),
                name: "count".to_string(),
                expected: Kind::Int32,
                actual: Kind::String,
            }
            .to_string(),
            "Command 'program' declares parameter 'count' as int32, but its initial value is string."
        );
    }

    #[test]
    fn invalid_command_message() {
        assert_eq!(
            SetupError::InvalidCommandName("--sub".to_string()).to_string(),
            "Received a command definition with the invalid name '--sub'."
        );
    }

    #[test]
    fn usage_messages() {
        assert_eq!(
            UsageError::UnknownOption("--bogus".to_string()).to_string(),
            "Unexpected option '--bogus'."
        );
        assert_eq!(
            UsageError::invalid_value(
                "--count",
                InvalidValue::Unparsable {
                    token: "x".to_string(),
                    expected: "an integer (int32)".to_string(),
                }
            )
            .to_string(),
            "Invalid value for '--count'. Expected an integer (int32), got 'x'."
        );
        assert_eq!(
            UsageError::MissingRequiredField("name".to_string()).to_string(),
            "Missing or empty required field 'name'."
        );
    }
}
