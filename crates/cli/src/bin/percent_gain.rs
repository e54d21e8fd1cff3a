//! percent-gain entry point: parse arguments, set up logging, print the report.

use profitbook_cli::args::{self, GainArgs};
use profitbook_cli::{gain, logging};

fn main() {
    let args: GainArgs = args::parse_or_exit();
    logging::init_tracing();

    match gain::run(&args) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
