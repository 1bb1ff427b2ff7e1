use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod analyze;
pub mod map;
pub mod train;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::process;
use std::str::FromStr;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> File {
    File::open(path).unwrap_or_else(|err| {
        eprintln!("cannot open {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn open_reader(matches: &ArgMatches, arg_name: &str, description: &str) -> Result<BufReader<File>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|path| BufReader::new(open_file(path, description)))
        .ok_or_else(|| format!("{description} file is not specified"))
}

fn create_out_result_arg(arg_name: &'static str) -> Arg {
    Arg::new(arg_name)
        .help("Specifies path to the file for result output")
        .short('o')
        .long(arg_name)
        .required(false)
        .action(ArgAction::Set)
}

/// Returns a top level command with all subcommands.
pub(crate) fn get_app() -> Command {
    Command::new("flowsom")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to FlowSOM self-organizing map")
        .subcommand(train::get_train_app())
        .subcommand(map::get_map_app())
        .subcommand(analyze::get_analyze_app())
}
