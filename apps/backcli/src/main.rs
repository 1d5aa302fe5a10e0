// apps/backcli/src/main.rs

mod commands;

use clap::{Arg, ArgAction, ArgMatches, Command};
use routes_lib::ROUTES_V1;
use std::process;
use tracing_subscriber::EnvFilter;

use crate::commands::CliError;

fn cli() -> Command {
    Command::new("backcli")
        .about("Route table CLI utility")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List every route template")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the route table as JSON"),
                ),
        )
        .subcommand(
            Command::new("resolve")
                .about("Build a concrete path from a route template")
                .arg(
                    Arg::new("name")
                        .required(true)
                        .help("Dotted route name, e.g. account.balance"),
                )
                .arg(
                    Arg::new("param")
                        .long("param")
                        .short('p')
                        .action(ArgAction::Append)
                        .value_name("NAME=VALUE")
                        .help("Value for a template placeholder, repeatable"),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .default_value("")
                        .help("Prefix prepended to the resolved path, e.g. /v1"),
                ),
        )
}

fn run(matches: &ArgMatches) -> Result<String, CliError> {
    match matches.subcommand() {
        Some(("list", sub)) if sub.get_flag("json") => commands::list_json(&ROUTES_V1),
        Some(("list", _)) => Ok(commands::list(&ROUTES_V1)),
        Some(("resolve", sub)) => {
            let name = sub
                .get_one::<String>("name")
                .map(String::as_str)
                .unwrap_or_default();
            let prefix = sub
                .get_one::<String>("prefix")
                .map(String::as_str)
                .unwrap_or_default();
            let params = commands::parse_params(
                sub.get_many::<String>("param")
                    .into_iter()
                    .flatten()
                    .map(String::as_str),
            )?;
            commands::resolve(&ROUTES_V1, name, &params, prefix)
        }
        _ => unreachable!("subcommand_required is set"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    match run(&matches) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
