use profitbook_core::errors::CoreError;
use profitbook_core::ProfitBook;
use tracing::info;

use crate::args::{GainArgs, OutputFormat};

/// Load the record file named in `args` and render the report.
pub fn run(args: &GainArgs) -> Result<String, CoreError> {
    let book = ProfitBook::load_from_file(&args.input_file, &args.settings())?;
    info!(records = book.portfolio().len(), "portfolio loaded");
    render(&book, args.format)
}

/// Render the report for an already loaded portfolio.
pub fn render(book: &ProfitBook, format: OutputFormat) -> Result<String, CoreError> {
    match format {
        OutputFormat::Text => Ok(format_percent(book.average_percent_gain()?)),
        OutputFormat::Json => book.summary_to_json(),
    }
}

/// Two decimals; a value that rounds to zero prints as `0.00`, never `-0.00`.
pub fn format_percent(value: f64) -> String {
    let s = format!("{value:.2}");
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}
