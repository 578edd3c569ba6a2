use std::collections::{HashMap, HashSet};

use crate::api::{Parameter, ParameterClass};
use crate::caster::{cast, InvalidValue};
use crate::constant::*;
use crate::model::{Kind, Value};
use crate::parser::SetupError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The static description of an option/argument.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    name: String,
    kind: Kind,
    required: bool,
    description: Option<String>,
    initial: Value,
}

impl FieldSpec {
    /// The name of the field (options are specified on the Cli as `--NAME`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kind of value this field holds.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether the field must be specified on the Cli.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The help description of the field.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The value the field holds when it is not specified on the Cli.
    pub fn initial(&self) -> &Value {
        &self.initial
    }
}

/// The static description of an option: a field plus an optional short alias.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    field: FieldSpec,
    short: Option<char>,
}

impl OptionSpec {
    /// The field of this option.
    pub fn field(&self) -> &FieldSpec {
        &self.field
    }

    /// The short alias (specified on the Cli as `-S`).
    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub(crate) fn help() -> Self {
        Self {
            field: FieldSpec {
                name: HELP_NAME.to_string(),
                kind: Kind::Bool,
                required: false,
                description: Some(HELP_MESSAGE.to_string()),
                initial: Value::Bool(false),
            },
            short: Some(HELP_SHORT),
        }
    }

    /// The long form, as written on the Cli.
    pub(crate) fn flag(&self) -> String {
        format!("--{}", self.field.name)
    }
}

/// The ordered declaration of one command's options and arguments.
///
/// The help option is always the first option.
#[derive(Debug)]
pub(crate) struct Schema {
    options: Vec<OptionSpec>,
    arguments: Vec<FieldSpec>,
    long_options: HashMap<String, usize>,
    short_options: HashMap<char, usize>,
    exact_arguments: bool,
}

impl Schema {
    /// A schema with only the implicit help option.
    pub(crate) fn empty() -> Self {
        let help = OptionSpec::help();
        Self {
            long_options: HashMap::from([(help.field.name.clone(), 0)]),
            short_options: HashMap::from([(HELP_SHORT, 0)]),
            options: vec![help],
            arguments: Vec::default(),
            exact_arguments: false,
        }
    }

    pub(crate) fn new(
        command: &str,
        parameters: Vec<Parameter>,
        exact_arguments: bool,
    ) -> Result<Self, SetupError> {
        let mut schema = Self::empty();
        schema.exact_arguments = exact_arguments;
        let mut argument_names: HashSet<String> = HashSet::default();

        for parameter in parameters.into_iter() {
            let field = field_spec(command, &parameter)?;

            if parameter.class == ParameterClass::Opt && field.name.eq_ignore_ascii_case(HELP_NAME)
            {
                return Err(SetupError::ReservedOption {
                    command: command.to_string(),
                    name: field.name,
                });
            }

            if schema.long_options.contains_key(&field.name) || argument_names.contains(&field.name)
            {
                return Err(SetupError::DuplicateParameter {
                    command: command.to_string(),
                    name: field.name,
                });
            }

            match parameter.class {
                ParameterClass::Opt => {
                    if let Some(short) = parameter.short {
                        validate_short(command, short)?;

                        if schema
                            .short_options
                            .insert(short, schema.options.len())
                            .is_some()
                        {
                            return Err(SetupError::DuplicateShortOption {
                                command: command.to_string(),
                                short,
                            });
                        }
                    }

                    schema
                        .long_options
                        .insert(field.name.clone(), schema.options.len());
                    schema.options.push(OptionSpec {
                        field,
                        short: parameter.short,
                    });
                }
                ParameterClass::Arg => {
                    if field.kind == Kind::Bool {
                        return Err(SetupError::BoolArgument {
                            command: command.to_string(),
                            name: field.name,
                        });
                    }

                    argument_names.insert(field.name.clone());
                    schema.arguments.push(field);
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Schema for '{command}': {} options, {} arguments.",
                schema.options.len(),
                schema.arguments.len()
            );
        }

        Ok(schema)
    }

    pub(crate) fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    pub(crate) fn arguments(&self) -> &[FieldSpec] {
        &self.arguments
    }

    pub(crate) fn exact_arguments(&self) -> bool {
        self.exact_arguments
    }

    pub(crate) fn long_option(&self, name: &str) -> Option<usize> {
        self.long_options.get(name).copied()
    }

    pub(crate) fn short_option(&self, short: char) -> Option<usize> {
        self.short_options.get(&short).copied()
    }
}

fn field_spec(command: &str, parameter: &Parameter) -> Result<FieldSpec, SetupError> {
    let name = &parameter.name;

    // The name must survive the Cli syntax: `--NAME=VALUE` splits on the first '='.
    if name.is_empty()
        || name.starts_with('-')
        || name.contains('=')
        || name.chars().any(char::is_whitespace)
    {
        return Err(SetupError::InvalidParameterName {
            command: command.to_string(),
            name: name.clone(),
        });
    }

    let initial = match &parameter.initial {
        Some(value) => cast(value.clone(), parameter.kind).map_err(|error| match error {
            InvalidValue::KindMismatch { expected, actual } => SetupError::InvalidInitial {
                command: command.to_string(),
                name: name.clone(),
                expected,
                actual,
            },
            InvalidValue::Unparsable { .. } => {
                unreachable!("internal error - a typed initial is never parsed")
            }
        })?,
        None => Value::zero(parameter.kind),
    };

    Ok(FieldSpec {
        name: name.clone(),
        kind: parameter.kind,
        required: parameter.required,
        description: parameter.description.clone(),
        initial,
    })
}

fn validate_short(command: &str, short: char) -> Result<(), SetupError> {
    if short.eq_ignore_ascii_case(&HELP_SHORT) {
        return Err(SetupError::ReservedShortOption {
            command: command.to_string(),
            short,
        });
    }

    if short == '-' || short == '=' || short.is_whitespace() {
        return Err(SetupError::InvalidShortOption {
            command: command.to_string(),
            short,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty() {
        let schema = Schema::new("program", Vec::default(), false).unwrap();
        assert_eq!(schema.options(), &[OptionSpec::help()]);
        assert!(schema.arguments().is_empty());
        assert!(!schema.exact_arguments());
        assert_eq!(schema.long_option("help"), Some(0));
        assert_eq!(schema.short_option('h'), Some(0));
    }

    #[test]
    fn declared_order() {
        let schema = Schema::new(
            "program",
            vec![
                Parameter::argument(Kind::String, "b"),
                Parameter::option(Kind::Int8, "zeta", Some('z')),
                Parameter::argument(Kind::Int32, "a").required(),
                Parameter::option(Kind::Bool, "alpha", None).help("first"),
            ],
            true,
        )
        .unwrap();

        let option_names: Vec<&str> = schema.options().iter().map(|o| o.field().name()).collect();
        assert_eq!(option_names, vec!["help", "zeta", "alpha"]);
        let argument_names: Vec<&str> = schema.arguments().iter().map(|a| a.name()).collect();
        assert_eq!(argument_names, vec!["b", "a"]);

        assert_eq!(schema.long_option("zeta"), Some(1));
        assert_eq!(schema.short_option('z'), Some(1));
        assert_eq!(schema.long_option("alpha"), Some(2));
        assert_eq!(schema.long_option("z"), None);
        assert_eq!(schema.short_option('a'), None);
        assert!(schema.exact_arguments());

        let alpha = &schema.options()[2];
        assert_eq!(alpha.short(), None);
        assert_eq!(alpha.flag(), "--alpha");
        assert_eq!(alpha.field().description(), Some("first"));
        assert!(schema.arguments()[1].is_required());
    }

    #[rstest]
    #[case(Kind::Bool, Value::Bool(false))]
    #[case(Kind::String, Value::String("".to_string()))]
    #[case(Kind::Int16, Value::Int16(0))]
    #[case(Kind::Float64, Value::Float64(0.0))]
    fn zero_initial(#[case] kind: Kind, #[case] expected: Value) {
        let schema =
            Schema::new("program", vec![Parameter::option(kind, "value", None)], false).unwrap();
        assert_eq!(schema.options()[1].field().initial(), &expected);
    }

    #[test]
    fn declared_initial() {
        let schema = Schema::new(
            "program",
            vec![Parameter::argument(Kind::Int64, "value").initial(7i64)],
            false,
        )
        .unwrap();
        assert_eq!(schema.arguments()[0].initial(), &Value::Int64(7));
    }

    #[rstest]
    #[case(Parameter::option(Kind::Bool, "help", None), SetupError::ReservedOption {
        command: "program".to_string(),
        name: "help".to_string(),
    })]
    #[case(Parameter::option(Kind::Bool, "HELP", None), SetupError::ReservedOption {
        command: "program".to_string(),
        name: "HELP".to_string(),
    })]
    #[case(Parameter::option(Kind::Bool, "hat", Some('h')), SetupError::ReservedShortOption {
        command: "program".to_string(),
        short: 'h',
    })]
    #[case(Parameter::option(Kind::Bool, "hat", Some('H')), SetupError::ReservedShortOption {
        command: "program".to_string(),
        short: 'H',
    })]
    #[case(Parameter::argument(Kind::Bool, "flag"), SetupError::BoolArgument {
        command: "program".to_string(),
        name: "flag".to_string(),
    })]
    #[case(Parameter::option(Kind::Int32, "count", None).initial("3"), SetupError::InvalidInitial {
        command: "program".to_string(),
        name: "count".to_string(),
        expected: Kind::Int32,
        actual: Kind::String,
    })]
    #[case(Parameter::option(Kind::Int32, "", None), SetupError::InvalidParameterName {
        command: "program".to_string(),
        name: "".to_string(),
    })]
    #[case(Parameter::option(Kind::Int32, "-count", None), SetupError::InvalidParameterName {
        command: "program".to_string(),
        name: "-count".to_string(),
    })]
    #[case(Parameter::argument(Kind::String, "a=b"), SetupError::InvalidParameterName {
        command: "program".to_string(),
        name: "a=b".to_string(),
    })]
    #[case(Parameter::argument(Kind::String, "a b"), SetupError::InvalidParameterName {
        command: "program".to_string(),
        name: "a b".to_string(),
    })]
    #[case(Parameter::option(Kind::Int32, "count", Some('-')), SetupError::InvalidShortOption {
        command: "program".to_string(),
        short: '-',
    })]
    #[case(Parameter::option(Kind::Int32, "count", Some('=')), SetupError::InvalidShortOption {
        command: "program".to_string(),
        short: '=',
    })]
    fn invalid_parameter(#[case] parameter: Parameter, #[case] expected: SetupError) {
        assert_eq!(
            Schema::new("program", vec![parameter], false).unwrap_err(),
            expected
        );
    }

    #[rstest]
    #[case(
        Parameter::option(Kind::Bool, "name", None),
        Parameter::option(Kind::Int8, "name", Some('n'))
    )]
    #[case(
        Parameter::argument(Kind::String, "name"),
        Parameter::argument(Kind::Int8, "name")
    )]
    #[case(
        Parameter::option(Kind::Bool, "name", None),
        Parameter::argument(Kind::Int8, "name")
    )]
    #[case(
        Parameter::argument(Kind::String, "name"),
        Parameter::option(Kind::Bool, "name", None)
    )]
    fn duplicate_parameter(#[case] first: Parameter, #[case] second: Parameter) {
        assert_eq!(
            Schema::new("program", vec![first, second], false).unwrap_err(),
            SetupError::DuplicateParameter {
                command: "program".to_string(),
                name: "name".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_short() {
        let parameters = vec![
            Parameter::option(Kind::Bool, "verbose", Some('v')),
            Parameter::option(Kind::Bool, "version", Some('v')),
        ];
        assert_eq!(
            Schema::new("program", parameters, false).unwrap_err(),
            SetupError::DuplicateShortOption {
                command: "program".to_string(),
                short: 'v',
            }
        );
    }
}
