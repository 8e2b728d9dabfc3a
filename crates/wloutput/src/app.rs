use clap::{Arg, ArgAction, Command};

fn monitors_arg() -> Arg {
    Arg::new("monitors")
        .long("monitors")
        .short('m')
        .value_name("FILE")
        .help("JSON file describing the connected monitors and their modes")
        .required(true)
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}

fn no_saved_arg() -> Arg {
    Arg::new("no-saved")
        .long("no-saved")
        .help("Ignore the saved setup and use the computed arrangement as is")
        .action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("wloutput")
        .about("Arrange mixed-DPI monitors and span one background across them")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("plan")
                .about("Compute scales and positions without touching any image")
                .arg(monitors_arg())
                .arg(json_arg())
                .arg(no_saved_arg()),
        )
        .subcommand(
            Command::new("apply")
                .about("Compute the arrangement, split the background and print output commands")
                .arg(monitors_arg())
                .arg(
                    Arg::new("background")
                        .long("background")
                        .short('b')
                        .value_name("IMAGE")
                        .help("Image to span across all outputs")
                        .required(true),
                )
                .arg(
                    Arg::new("output-dir")
                        .long("output-dir")
                        .short('o')
                        .value_name("DIR")
                        .help("Directory for the per-output segments (default from config)"),
                )
                .arg(
                    Arg::new("environment")
                        .long("environment")
                        .short('e')
                        .value_parser(["sway", "wlroots"])
                        .help("Compositor to render commands for (default: sway when SWAYSOCK is set)"),
                )
                .arg(json_arg())
                .arg(
                    Arg::new("save")
                        .long("save")
                        .help("Save the resulting arrangement as the new saved setup")
                        .action(ArgAction::SetTrue),
                )
                .arg(no_saved_arg()),
        )
}
