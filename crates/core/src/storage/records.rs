//! Line format of a stock record file.
//!
//! One record per non-blank line, whitespace-separated:
//!
//! ```text
//! <name> <id> <buy_price> <sell_price>
//! AAPL 1 150.25 171.80
//! ```

use crate::errors::CoreError;
use crate::models::investment::StockInvestment;

/// Number of whitespace-separated fields in a record line.
pub const FIELD_COUNT: usize = 4;

/// Whether a line carries a record (anything but whitespace).
pub fn is_record_line(line: &str) -> bool {
    !line.trim().is_empty()
}

/// Count the record lines in `contents`. Used to size the portfolio
/// before the parse pass.
pub fn count_records(contents: &str) -> usize {
    contents.lines().filter(|l| is_record_line(l)).count()
}

/// Parse one record line. `line_no` is 1-based and only used for errors
/// and to tag the resulting record.
pub fn parse_line(line_no: usize, line: &str) -> Result<StockInvestment, CoreError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELD_COUNT {
        return Err(parse_error(
            line_no,
            format!(
                "expected {FIELD_COUNT} fields (name id buy_price sell_price), found {}",
                fields.len()
            ),
        ));
    }

    let name = fields[0];
    let id: i64 = fields[1]
        .parse()
        .map_err(|_| parse_error(line_no, format!("id '{}' is not an integer", fields[1])))?;
    let buy_price = parse_price(line_no, "buy_price", fields[2])?;
    let sell_price = parse_price(line_no, "sell_price", fields[3])?;

    Ok(StockInvestment::new(name, id, buy_price, sell_price).at_line(line_no))
}

fn parse_price(line_no: usize, field: &str, raw: &str) -> Result<f64, CoreError> {
    let value: f64 = raw
        .parse()
        .map_err(|_| parse_error(line_no, format!("{field} '{raw}' is not a number")))?;
    // f64::from_str accepts "inf" and "NaN"
    if !value.is_finite() {
        return Err(parse_error(line_no, format!("{field} '{raw}' is not finite")));
    }
    if value < 0.0 {
        return Err(parse_error(line_no, format!("{field} {value} is negative")));
    }
    Ok(value)
}

fn parse_error(line: usize, message: String) -> CoreError {
    CoreError::Parse { line, message }
}
