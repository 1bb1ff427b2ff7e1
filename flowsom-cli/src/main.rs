//! A command line interface to FlowSOM self-organizing map.
//!

mod commands;

use crate::commands::analyze::run_analyze;
use crate::commands::map::run_map;
use crate::commands::train::run_train;
use crate::commands::{create_write_buffer, get_app};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("train", train_matches)) => run_train(train_matches, create_write_buffer),
        Some(("map", map_matches)) => run_map(map_matches, create_write_buffer),
        Some(("analyze", analyze_matches)) => run_analyze(analyze_matches, create_write_buffer),
        Some((name, _)) => Err(format!("unknown subcommand: '{name}'")),
        None => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
