#[cfg(test)]
#[path = "../../tests/unit/commands/train_test.rs"]
mod train_test;

use super::*;
use flowsom::algorithms::som::{get_grid_state, train_with_config};
use flowsom::utils::{Environment, InfoLogger};
use flowsom_cli::extensions::config::{Config, GridConfig, TrainingConfig, create_config_builder, read_config};
use flowsom_cli::extensions::table::{read_table, write_table};
use std::sync::Arc;

const INPUT_ARG_NAME: &str = "INPUT";
const XDIM_ARG_NAME: &str = "xdim";
const YDIM_ARG_NAME: &str = "ydim";
const RLEN_ARG_NAME: &str = "rlen";
const DETERMINISTIC_ARG_NAME: &str = "deterministic";
const CONFIG_ARG_NAME: &str = "config";
const OUT_NODES_ARG_NAME: &str = "out-nodes";
const OUT_STATE_ARG_NAME: &str = "out-state";
const QUIET_ARG_NAME: &str = "quiet";

pub fn get_train_app() -> Command {
    Command::new("train")
        .about("Trains self-organizing map on csv data and writes node weights")
        .arg(Arg::new(INPUT_ARG_NAME).help("Sets the input csv file with a header of marker names").required(true).index(1))
        .arg(Arg::new(XDIM_ARG_NAME).help("Grid width").short('x').long(XDIM_ARG_NAME).required(false))
        .arg(Arg::new(YDIM_ARG_NAME).help("Grid height").short('y').long(YDIM_ARG_NAME).required(false))
        .arg(Arg::new(RLEN_ARG_NAME).help("Amount of training epochs").short('r').long(RLEN_ARG_NAME).required(false))
        .arg(
            Arg::new(DETERMINISTIC_ARG_NAME)
                .help("Uses repeatable random source, so the same input produces the same output")
                .short('d')
                .long(DETERMINISTIC_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to json file with training configuration")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_NODES_ARG_NAME)
                .help("Specifies path to the file for node weights output")
                .short('o')
                .long(OUT_NODES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_STATE_ARG_NAME)
                .help("Specifies path to the file for grid state output")
                .long(OUT_STATE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(QUIET_ARG_NAME)
                .help("Disables training progress logging")
                .short('q')
                .long(QUIET_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_train(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let config = get_config(matches)?;

    let is_deterministic = matches.get_flag(DETERMINISTIC_ARG_NAME) || config.is_deterministic();
    let is_logging_enabled = !matches.get_flag(QUIET_ARG_NAME) && config.is_logging_enabled();
    let logger: InfoLogger =
        if is_logging_enabled { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_: &str| ()) };
    let environment = Environment::new(config.create_random(is_deterministic), logger);

    let som_config = create_config_builder(&config).build().map_err(|err| format!("invalid configuration: '{err}'"))?;

    let table = read_table(open_reader(matches, INPUT_ARG_NAME, "input")?)
        .map_err(|err| format!("cannot read input: '{err}'"))?;

    let trained = train_with_config(&table.data, &som_config, &environment)
        .map_err(|err| format!("cannot train map: '{err}'"))?;

    let out_nodes = matches.get_one::<String>(OUT_NODES_ARG_NAME).map(|path| create_file(path, "out nodes"));
    write_table(out_writer_func(out_nodes), table.header.as_slice(), trained.node_output())
        .map_err(|err| format!("cannot write nodes: '{err}'"))?;

    if let Some(path) = matches.get_one::<String>(OUT_STATE_ARG_NAME) {
        let mapping = trained.map(&table.data).map_err(|err| format!("cannot map input: '{err}'"))?;
        let state = get_grid_state(&trained.grid, Some(&mapping));

        let mut state_writer = out_writer_func(Some(create_file(path, "out state")));
        state_writer
            .write_all(state.to_string().as_bytes())
            .and_then(|_| state_writer.flush())
            .map_err(|err| format!("cannot write state: '{err}'"))?;
    }

    Ok(())
}

/// Reads config file when specified and applies command line overrides on top of it.
fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    let mut config = if matches.get_one::<String>(CONFIG_ARG_NAME).is_some() {
        read_config(open_reader(matches, CONFIG_ARG_NAME, "config")?).map_err(|err| err.to_string())?
    } else {
        Config::default()
    };

    let xdim = parse_int_value::<usize>(matches, XDIM_ARG_NAME, "grid width")?;
    let ydim = parse_int_value::<usize>(matches, YDIM_ARG_NAME, "grid height")?;
    let rlen = parse_int_value::<usize>(matches, RLEN_ARG_NAME, "epochs")?;

    if xdim.is_some() || ydim.is_some() {
        let grid = config.grid.get_or_insert_with(GridConfig::default);
        grid.xdim = xdim.or(grid.xdim);
        grid.ydim = ydim.or(grid.ydim);
    }

    if rlen.is_some() {
        let training = config.training.get_or_insert_with(TrainingConfig::default);
        training.epochs = rlen;
    }

    Ok(config)
}
