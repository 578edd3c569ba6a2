use crate::parser::interface::ColumnRenderer;
use crate::parser::CommandNode;
use crate::schema::FieldSpec;

/// Renders the help message of one command of the (completed) tree.
pub(crate) struct Printer<'n> {
    nodes: &'n [CommandNode],
    index: usize,
}

impl<'n> Printer<'n> {
    pub(crate) fn new(nodes: &'n [CommandNode], index: usize) -> Self {
        Self { nodes, index }
    }

    /// The help message, with its sections in a fixed order.
    /// The output depends only on the tree, so rendering is reproducible.
    pub(crate) fn render(&self) -> String {
        let node = &self.nodes[self.index];
        let children = self.children();
        let mut lines = vec![self.usage(!children.is_empty())];

        if let Some(about) = &node.about {
            lines.push(String::default());
            lines.push(about.clone());
        }

        if !children.is_empty() {
            let rows: Vec<(String, String)> = children
                .iter()
                .map(|child| {
                    let label = if child.aliases.is_empty() {
                        child.name.clone()
                    } else {
                        format!("{} ({})", child.name, child.aliases.join(","))
                    };
                    (label, child.summary.clone().unwrap_or_default())
                })
                .collect();
            section(&mut lines, "Commands:", rows);
        }

        let mut options: Vec<_> = node.schema.options().iter().collect();
        options.sort_by(|a, b| a.field().name().cmp(b.field().name()));
        let rows: Vec<(String, String)> = options
            .iter()
            .map(|option| {
                let label = match option.short() {
                    Some(short) => format!("-{short}, {}", option.flag()),
                    None => option.flag(),
                };
                (label, annotation(option.field()))
            })
            .collect();
        section(&mut lines, "Options:", rows);

        let rows: Vec<(String, String)> = node
            .schema
            .arguments()
            .iter()
            .map(|argument| (argument.name().to_string(), annotation(argument)))
            .collect();
        section(&mut lines, "Arguments:", rows);

        lines.join("\n")
    }

    fn usage(&self, has_children: bool) -> String {
        let node = &self.nodes[self.index];
        let mut path = vec![node.name.as_str()];
        let mut parent = node.parent;

        while let Some(index) = parent {
            path.push(self.nodes[index].name.as_str());
            parent = self.nodes[index].parent;
        }

        path.reverse();
        let mut usage = format!("Usage: {}", path.join(" "));

        if has_children {
            usage.push_str(" [COMMAND]");
        }

        if !node.schema.options().is_empty() {
            usage.push_str(" [OPTIONS]");
        }

        for argument in node.schema.arguments() {
            usage.push(' ');
            usage.push_str(argument.name());
        }

        usage
    }

    fn children(&self) -> Vec<&'n CommandNode> {
        let mut children: Vec<&CommandNode> = self
            .nodes
            .iter()
            .filter(|node| node.parent == Some(self.index))
            .collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        children
    }
}

fn annotation(field: &FieldSpec) -> String {
    let requirement = if field.is_required() {
        "Required"
    } else {
        "Optional"
    };
    let annotation = format!("[{requirement}, Type: {}]", field.kind().label());

    match field.description() {
        Some(description) => format!("{annotation} {description}"),
        None => annotation,
    }
}

fn section(lines: &mut Vec<String>, title: &str, rows: Vec<(String, String)>) {
    if rows.is_empty() {
        return;
    }

    let renderer = ColumnRenderer::fitting(rows.iter().map(|(label, _)| label.as_str()));
    lines.push(String::default());
    lines.push(title.to_string());

    for (label, text) in rows.iter() {
        lines.push(renderer.render(label, text));
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{Command, CommandTree, Parameter};
    use crate::model::Kind;
    use crate::parser::util::InMemoryInterface;
    use crate::parser::Cli;

    fn cli(tree: CommandTree) -> Cli {
        tree.build_with_interface(Box::new(InMemoryInterface::default()))
            .unwrap()
    }

    #[test]
    fn render_empty() {
        let cli = cli(CommandTree::new(Command::new("program")));
        assert_eq!(
            cli.help(0),
            "Usage: program [OPTIONS]

Options:
  -h, --help     [Optional, Type: bool] Display the help text and exit."
        );
    }

    #[test]
    fn render_options_sorted() {
        let cli = cli(CommandTree::new(
            Command::new("program")
                .add(Parameter::option(Kind::Int32, "zeta", None).required())
                .add(Parameter::option(Kind::Bool, "alpha", Some('a')).help("The first."))
                .add(Parameter::option(Kind::Float64, "ratio", Some('r')))
                .add(Parameter::option(Kind::String, "name", None).help("The name.")),
        ));
        assert_eq!(
            cli.help(0),
            "Usage: program [OPTIONS]

Options:
  -a, --alpha     [Optional, Type: bool] The first.
  -h, --help      [Optional, Type: bool] Display the help text and exit.
  --name          [Optional, Type: string] The name.
  -r, --ratio     [Optional, Type: float]
  --zeta          [Required, Type: int]"
        );
    }

    #[test]
    fn render_arguments_declared_order() {
        let cli = cli(CommandTree::new(
            Command::new("program")
                .about("Copies things.")
                .add(
                    Parameter::argument(Kind::String, "source")
                        .required()
                        .help("From here."),
                )
                .add(Parameter::argument(Kind::Int8, "n")),
        ));
        assert_eq!(
            cli.help(0),
            "Usage: program [OPTIONS] source n

Copies things.

Options:
  -h, --help     [Optional, Type: bool] Display the help text and exit.

Arguments:
  source     [Required, Type: string] From here.
  n          [Optional, Type: int]"
        );
    }

    #[test]
    fn render_commands() {
        let mut tree = CommandTree::new(Command::new("git").about("The stupid content tracker."));
        let remote = tree.attach(
            tree.root(),
            Command::new("remote")
                .summary("Manage remotes.")
                .about("Manage the set of tracked repositories."),
        );
        tree.attach(
            tree.root(),
            Command::new("status")
                .alias("st")
                .alias("s")
                .summary("Show the working tree status."),
        );
        tree.attach(tree.root(), Command::new("add"));
        tree.attach(
            remote,
            Command::new("rename")
                .add(Parameter::argument(Kind::String, "old"))
                .add(Parameter::argument(Kind::String, "new")),
        );
        let cli = cli(tree);

        assert_eq!(
            cli.help(0),
            "Usage: git [COMMAND] [OPTIONS]

The stupid content tracker.

Commands:
  add
  remote            Manage remotes.
  status (st,s)     Show the working tree status.

Options:
  -h, --help     [Optional, Type: bool] Display the help text and exit."
        );
        assert_eq!(
            cli.help(1),
            "Usage: git remote [COMMAND] [OPTIONS]

Manage the set of tracked repositories.

Commands:
  rename

Options:
  -h, --help     [Optional, Type: bool] Display the help text and exit."
        );
        assert_eq!(
            cli.help(4),
            "Usage: git remote rename [OPTIONS] old new

Options:
  -h, --help     [Optional, Type: bool] Display the help text and exit.

Arguments:
  old     [Optional, Type: string]
  new     [Optional, Type: string]"
        );
    }

    #[test]
    fn render_reproducible() {
        let tree = || {
            let mut tree = CommandTree::new(
                Command::new("program")
                    .add(Parameter::option(Kind::Bool, "b", None))
                    .add(Parameter::option(Kind::Bool, "a", None))
                    .add(Parameter::option(Kind::Bool, "c", None)),
            );
            tree.attach(tree.root(), Command::new("y"));
            tree.attach(tree.root(), Command::new("x"));
            tree.attach(tree.root(), Command::new("z"));
            tree
        };

        let first = cli(tree()).help(0).to_string();
        for _ in 0..10 {
            assert_eq!(cli(tree()).help(0), first);
        }
    }
}
