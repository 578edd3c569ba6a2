use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::api::Command;
use crate::parser::{Cli, CommandNode, ConsoleInterface, Printer, SetupError, UserInterface};
use crate::schema::Schema;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Distinguishes the ids of separate trees.
static NEXT_TREE: AtomicUsize = AtomicUsize::new(0);

// The index of commands which failed to attach.
const DETACHED: usize = usize::MAX;

/// Identifies a command within its [`CommandTree`] (and the resulting [`Cli`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandId {
    tree: usize,
    index: usize,
}

impl CommandId {
    pub(crate) fn new(tree: usize, index: usize) -> Self {
        Self { tree, index }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }
}

/// The tree of commands of a program.
///
/// Configuration errors (ex: a repeated parameter name) are deferred until the tree is built.
///
/// ### Example
/// ```
/// # use arbor_builder as arbor;
/// use arbor::{Command, CommandTree, Dispatch};
///
/// let mut tree = CommandTree::new(Command::new("git"));
/// let remote = tree.attach(tree.root(), Command::new("remote"));
/// let add = tree.attach(remote, Command::new("add"));
/// let status = tree.attach(tree.root(), Command::new("status").alias("st"));
/// let cli = tree.build();
///
/// match cli.parse_tokens(&["remote", "add"]).unwrap() {
///     Dispatch::Invoke(context) => assert_eq!(context.command(), add),
///     Dispatch::Help(_) => unreachable!(),
/// }
/// match cli.parse_tokens(&["st"]).unwrap() {
///     Dispatch::Invoke(context) => assert_eq!(context.command(), status),
///     Dispatch::Help(_) => unreachable!(),
/// }
/// ```
pub struct CommandTree {
    tree: usize,
    nodes: Vec<CommandNode>,
    deferred_error: Option<SetupError>,
}

impl CommandTree {
    /// Create a command tree from its root command.
    ///
    /// The root command is the program itself; its name is shown in the usage line.
    pub fn new(root: Command) -> Self {
        let mut tree = Self {
            tree: NEXT_TREE.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::default(),
            deferred_error: None,
        };

        if let Err(error) = validate_name(&root.name) {
            tree.defer(error);
        } else if !root.aliases.is_empty() {
            tree.defer(SetupError::RootAliases(root.name.clone()));
        }

        match CommandNode::try_from((root, None)) {
            Ok(node) => tree.nodes.push(node),
            Err((error, node)) => {
                tree.defer(error);
                tree.nodes.push(node);
            }
        }

        tree
    }

    /// The id of the root command.
    pub fn root(&self) -> CommandId {
        CommandId::new(self.tree, 0)
    }

    /// Attach a child command to a parent command of this tree.
    ///
    /// The child is selected on the Cli by its name or any of its aliases, which must not collide with those of its siblings.
    ///
    /// ### Example
    /// ```
    /// # use arbor_builder as arbor;
    /// use arbor::{Command, CommandTree, SetupError};
    ///
    /// let mut tree = CommandTree::new(Command::new("git"));
    /// tree.attach(tree.root(), Command::new("status").alias("st"));
    /// tree.attach(tree.root(), Command::new("stash").alias("st"));
    ///
    /// assert_eq!(
    ///     tree.build_cli().unwrap_err(),
    ///     SetupError::DuplicateCommand {
    ///         parent: "git".to_string(),
    ///         name: "st".to_string(),
    ///     }
    /// );
    /// ```
    pub fn attach(&mut self, parent: CommandId, child: Command) -> CommandId {
        match self.try_attach(parent, child) {
            Ok(id) => id,
            Err(error) => {
                self.defer(error);
                CommandId::new(self.tree, DETACHED)
            }
        }
    }

    fn try_attach(&mut self, parent: CommandId, child: Command) -> Result<CommandId, SetupError> {
        if parent.tree != self.tree || parent.index >= self.nodes.len() {
            return Err(SetupError::UnknownParent { child: child.name });
        }

        let mut names = vec![child.name.clone()];
        names.extend(child.aliases.iter().cloned());

        for (i, name) in names.iter().enumerate() {
            validate_name(name)?;

            if self.nodes[parent.index].children.contains_key(name) || names[..i].contains(name) {
                return Err(SetupError::DuplicateCommand {
                    parent: self.nodes[parent.index].name.clone(),
                    name: name.clone(),
                });
            }
        }

        let node = CommandNode::try_from((child, Some(parent.index))).map_err(|(error, _)| error)?;
        let index = self.nodes.len();

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Attaching '{}' ({index}) under '{}' ({}), via {names:?}.",
                node.name, self.nodes[parent.index].name, parent.index
            );
        }

        let siblings = &mut self.nodes[parent.index].children;
        for name in names {
            siblings.insert(name, index);
        }

        self.nodes.push(node);
        Ok(CommandId::new(self.tree, index))
    }

    fn defer(&mut self, error: SetupError) {
        // Only the first error is reported.
        if self.deferred_error.is_none() {
            self.deferred_error.replace(error);
        }
    }

    pub(crate) fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<Cli, SetupError> {
        let CommandTree {
            tree,
            mut nodes,
            deferred_error,
        } = self;

        if let Some(error) = deferred_error {
            return Err(error);
        }

        // The tree is immutable from here on, so every help message is rendered once.
        let messages: Vec<String> = (0..nodes.len())
            .map(|index| Printer::new(&nodes, index).render())
            .collect();

        for (node, help) in nodes.iter_mut().zip(messages) {
            node.help = help;
        }

        Ok(Cli::new(tree, nodes, user_interface))
    }

    /// Build the Cli as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    pub fn build_cli(self) -> Result<Cli, SetupError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the Cli.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> Cli {
        match self.build_cli() {
            Ok(cli) => cli,
            Err(e) => {
                eprintln!("Setup error: {e}");
                std::process::exit(1);
            }
        }
    }
}

// A name must be selectable on the Cli, where any '-' prefixed token is a flag.
fn validate_name(name: &str) -> Result<(), SetupError> {
    if name.is_empty() {
        return Err(SetupError::EmptyCommandName);
    }

    if name.starts_with('-') || name.chars().any(char::is_whitespace) {
        return Err(SetupError::InvalidCommandName(name.to_string()));
    }

    Ok(())
}

impl TryFrom<(Command, Option<usize>)> for CommandNode {
    // The node is still produced on error, so the tree keeps its shape.
    type Error = (SetupError, CommandNode);

    fn try_from(value: (Command, Option<usize>)) -> Result<Self, Self::Error> {
        let (
            Command {
                name,
                aliases,
                summary,
                about,
                parameters,
                exact_arguments,
                behavior,
            },
            parent,
        ) = value;
        let (schema, error) = match Schema::new(&name, parameters, exact_arguments) {
            Ok(schema) => (schema, None),
            Err(error) => (Schema::empty(), Some(error)),
        };
        let node = CommandNode {
            name,
            aliases,
            summary,
            about,
            schema,
            behavior,
            parent,
            children: HashMap::default(),
            help: String::default(),
        };

        match error {
            Some(error) => Err((error, node)),
            None => Ok(node),
        }
    }
}
