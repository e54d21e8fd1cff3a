//! mini-editor entry point: parse arguments, set up logging, run the menu.

use std::io;

use profitbook_cli::args::{self, EditorArgs};
use profitbook_cli::{editor, logging};
use profitbook_core::MiniEditor;

fn main() {
    let args: EditorArgs = args::parse_or_exit();
    logging::init_tracing();

    let mut editor = MiniEditor::new(&args.settings());
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    if let Err(e) = editor::run_menu(&mut editor, &mut input, &mut out) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
