#[cfg(test)]
#[path = "../../tests/unit/commands/analyze_test.rs"]
mod analyze_test;

use super::*;
use flowsom_cli::extensions::analyze::analyze_clusters;

const INPUT_ARG_NAME: &str = "INPUT";
const CLUSTERS_ARG_NAME: &str = "CLUSTERS";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_analyze_app() -> Command {
    Command::new("analyze").about("Provides helper functionality to analyze mapping results").subcommand(
        Command::new("clusters")
            .about("Calculates mean marker values per cluster")
            .arg(Arg::new(INPUT_ARG_NAME).help("Sets the input csv file").required(true).index(1))
            .arg(
                Arg::new(CLUSTERS_ARG_NAME)
                    .help("Sets the csv file with cluster per input row")
                    .required(true)
                    .index(2),
            )
            .arg(create_out_result_arg(OUT_RESULT_ARG_NAME)),
    )
}

pub fn run_analyze(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    match matches.subcommand() {
        Some(("clusters", clusters_matches)) => {
            let input_reader = open_reader(clusters_matches, INPUT_ARG_NAME, "input")?;
            let clusters_reader = open_reader(clusters_matches, CLUSTERS_ARG_NAME, "clusters")?;

            let out_result =
                clusters_matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));

            analyze_clusters(input_reader, clusters_reader, out_writer_func(out_result))
                .map_err(|err| format!("cannot analyze clusters: '{err}'"))
        }
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    }
}
