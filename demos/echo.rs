use arbor::{Command, CommandTree, Kind, Parameter};

fn main() {
    let cli = CommandTree::new(
        Command::new("echo")
            .about("Print the message.")
            .add(
                Parameter::option(Kind::Int8, "repeat", Some('r'))
                    .initial(1i8)
                    .help("How many times to print."),
            )
            .add(Parameter::option(Kind::Bool, "upper", Some('u')).help("Print in uppercase."))
            .add(
                Parameter::argument(Kind::String, "message")
                    .required()
                    .help("The message to print."),
            )
            .behavior(|context| {
                let mut message: String = context.argument("message").unwrap();
                if context.option::<bool>("upper").unwrap() {
                    message = message.to_uppercase();
                }

                for _ in 0..context.option::<i8>("repeat").unwrap() {
                    println!("{message}");
                }
            }),
    )
    .build();

    cli.exec();
}
