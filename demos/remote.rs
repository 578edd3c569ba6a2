use arbor::{Command, CommandTree, Kind, Parameter};

fn main() {
    let mut tree = CommandTree::new(
        Command::new("remote")
            .about("Manage the set of tracked repositories.")
            .add(Parameter::option(Kind::Bool, "verbose", Some('v')).help("Show the remote urls.")),
    );
    tree.attach(
        tree.root(),
        Command::new("add")
            .alias("a")
            .summary("Add a remote.")
            .add(Parameter::option(Kind::String, "branch", Some('b')).help("The branch to track."))
            .add(Parameter::argument(Kind::String, "name").required())
            .add(Parameter::argument(Kind::String, "url").required())
            .exact_arguments()
            .behavior(|context| {
                let name: String = context.argument("name").unwrap();
                let url: String = context.argument("url").unwrap();
                println!("Added '{name}' at {url}.");

                if context.is_present("branch") {
                    let branch: String = context.option("branch").unwrap();
                    println!("Tracking '{branch}'.");
                }
            }),
    );
    tree.attach(
        tree.root(),
        Command::new("rename")
            .summary("Rename a remote.")
            .add(Parameter::argument(Kind::String, "old").required())
            .add(Parameter::argument(Kind::String, "new").required())
            .behavior(|context| {
                let old: String = context.argument("old").unwrap();
                let new: String = context.argument("new").unwrap();
                println!("Renamed '{old}' to '{new}'.");
            }),
    );
    tree.attach(
        tree.root(),
        Command::new("prune")
            .summary("Delete stale references.")
            .add(
                Parameter::option(Kind::Int32, "older-than", None)
                    .initial(30)
                    .help("Days since the last fetch."),
            )
            .add(Parameter::argument(Kind::String, "name").required())
            .behavior(|context| {
                let name: String = context.argument("name").unwrap();
                let days: i32 = context.option("older-than").unwrap();
                println!("Pruned '{name}' references older than {days} days.");
            }),
    );

    let cli = tree.build();
    cli.exec();
}
