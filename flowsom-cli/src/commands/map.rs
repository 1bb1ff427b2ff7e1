#[cfg(test)]
#[path = "../../tests/unit/commands/map_test.rs"]
mod map_test;

use super::*;
use flowsom::algorithms::som::map_to_nearest;
use flowsom_cli::extensions::table::{read_table, write_mapping};

const NODES_ARG_NAME: &str = "NODES";
const INPUT_ARG_NAME: &str = "INPUT";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_map_app() -> Command {
    Command::new("map")
        .about("Assigns each input row to its nearest trained node")
        .arg(Arg::new(NODES_ARG_NAME).help("Sets the csv file with trained node weights").required(true).index(1))
        .arg(Arg::new(INPUT_ARG_NAME).help("Sets the input csv file to map").required(true).index(2))
        .arg(create_out_result_arg(OUT_RESULT_ARG_NAME))
}

pub fn run_map(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let nodes = read_table(open_reader(matches, NODES_ARG_NAME, "nodes")?)
        .map_err(|err| format!("cannot read nodes: '{err}'"))?;
    let input = read_table(open_reader(matches, INPUT_ARG_NAME, "input")?)
        .map_err(|err| format!("cannot read input: '{err}'"))?;

    if nodes.header.len() == input.header.len() && nodes.header != input.header {
        return Err(format!("markers differ: nodes have {:?}, input has {:?}", nodes.header, input.header));
    }

    let mapping = map_to_nearest(&nodes.data, &input.data).map_err(|err| format!("cannot map input: '{err}'"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    write_mapping(out_writer_func(out_result), &mapping).map_err(|err| format!("cannot write result: '{err}'"))
}
