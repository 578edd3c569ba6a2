use crate::api::BoundValue;
use crate::caster::cast;
use crate::matcher::model::*;
use crate::model::{Kind, Value};
use crate::parser::UsageError;
use crate::schema::Schema;
use crate::tokens::{expand, has_help, Token};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Binds the tokens of a single command to the options/arguments of its schema.
pub(crate) struct Binder<'s> {
    schema: &'s Schema,
}

impl<'s> Binder<'s> {
    pub(crate) fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// Bind the tokens in a single left-to-right scan.
    ///
    /// A help token anywhere short-circuits the scan, regardless of the validity of the other tokens.
    /// Otherwise, the first error aborts the scan.
    pub(crate) fn bind(&self, tokens: &[&str]) -> Result<Action, UsageError> {
        if has_help(tokens) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Help requested in {tokens:?}.");
            }

            return Ok(Action::PrintHelp);
        }

        let mut options: Vec<BoundValue> = self
            .schema
            .options()
            .iter()
            .map(|option| BoundValue::new(option.field().clone()))
            .collect();
        let mut arguments: Vec<BoundValue> = self
            .schema
            .arguments()
            .iter()
            .map(|argument| BoundValue::new(argument.clone()))
            .collect();
        let mut scan = Scan::Ready;
        let mut next_argument = 0;
        let mut trailing = Trailing::default();

        for token in expand(tokens) {
            match token {
                Token::LongFlag(_) | Token::ShortFlag(_) => {
                    if let Scan::AwaitingValue { option } = scan {
                        return Err(UsageError::MissingOptionValue(
                            self.schema.options()[option].flag(),
                        ));
                    }

                    let option = self.find_option(&token)?;

                    if self.schema.options()[option].field().kind() == Kind::Bool {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Flag '{token}' set by presence.");
                        }

                        options[option].populate(Value::Bool(true));
                    } else {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Flag '{token}' awaiting its value.");
                        }

                        scan = Scan::AwaitingValue { option };
                    }
                }
                Token::Positional(value) => match scan {
                    Scan::AwaitingValue { option } => {
                        let spec = &self.schema.options()[option];
                        let typed = cast(value, spec.field().kind())
                            .map_err(|error| UsageError::invalid_value(spec.flag(), error))?;

                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Option '{}' bound to '{value}'.", spec.flag());
                        }

                        options[option].populate(typed);
                        scan = Scan::Ready;
                    }
                    Scan::Ready => {
                        if next_argument < arguments.len() {
                            let field = &self.schema.arguments()[next_argument];
                            let typed = cast(value, field.kind())
                                .map_err(|error| UsageError::invalid_value(field.name(), error))?;

                            #[cfg(feature = "tracing_debug")]
                            {
                                debug!("Argument '{}' bound to '{value}'.", field.name());
                            }

                            arguments[next_argument].populate(typed);
                            next_argument += 1;

                            if next_argument == arguments.len() {
                                trailing.push(value);
                            }
                        } else if arguments.is_empty() || self.schema.exact_arguments() {
                            return Err(UsageError::UnexpectedArgument(value.to_string()));
                        } else {
                            trailing.push(value);
                        }
                    }
                },
            }
        }

        if let Scan::AwaitingValue { option } = scan {
            return Err(UsageError::MissingOptionValue(
                self.schema.options()[option].flag(),
            ));
        }

        if let Some(joined) = trailing.overflow() {
            // Overflow only occurs once every argument is bound, so there is a final argument.
            if let (Some(field), Some(last)) =
                (self.schema.arguments().last(), arguments.last_mut())
            {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Overflow folded into argument '{}': '{joined}'.", field.name());
                }

                let typed = cast(joined.as_str(), field.kind())
                    .map_err(|error| UsageError::invalid_value(field.name(), error))?;
                last.populate(typed);
            }
        }

        self.check_required(&options, &arguments)?;

        Ok(Action::Bound(Bindings { options, arguments }))
    }

    fn find_option(&self, token: &Token) -> Result<usize, UsageError> {
        let found = match token {
            Token::LongFlag(name) => self.schema.long_option(name),
            Token::ShortFlag(name) => {
                let mut characters = name.chars();
                match (characters.next(), characters.next()) {
                    (Some(short), None) => self.schema.short_option(short),
                    _ => None,
                }
            }
            Token::Positional(_) => None,
        };

        found.ok_or_else(|| UsageError::UnknownOption(token.to_string()))
    }

    fn check_required(
        &self,
        options: &[BoundValue],
        arguments: &[BoundValue],
    ) -> Result<(), UsageError> {
        for (spec, bound) in self.schema.options().iter().zip(options) {
            if spec.field().is_required() && !bound.is_populated() {
                return Err(UsageError::MissingRequiredField(spec.flag()));
            }
        }

        for (field, bound) in self.schema.arguments().iter().zip(arguments) {
            if field.is_required() && !bound.is_populated() {
                return Err(UsageError::MissingRequiredField(field.name().to_string()));
            }
        }

        Ok(())
    }
}
