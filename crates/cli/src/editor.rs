//! Interactive menu loop of the mini editor.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use profitbook_core::MiniEditor;
use tracing::debug;

pub const BANNER: &str = "=== Mini Text Editor (Insert + Undo) ===";

/// One numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Insert,
    Undo,
    Show,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i32>() {
            Ok(1) => Ok(MenuChoice::Insert),
            Ok(2) => Ok(MenuChoice::Undo),
            Ok(3) => Ok(MenuChoice::Show),
            Ok(4) => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

/// Run the menu until the user picks exit or input ends.
///
/// Capacity errors are reported and the loop continues; only I/O errors
/// on `input`/`out` end it early.
pub fn run_menu<R: BufRead, W: Write>(
    editor: &mut MiniEditor,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "1. Insert Text")?;
    writeln!(out, "2. Undo")?;
    writeln!(out, "3. Show Current Text")?;
    writeln!(out, "4. Exit")?;

    loop {
        write!(out, "\nEnter choice: ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            break;
        };

        let choice = match line.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(()) => {
                writeln!(out, "Invalid choice, try again.")?;
                continue;
            }
        };
        debug!(?choice, snapshots = editor.snapshot_count(), "menu command");

        match choice {
            MenuChoice::Insert => {
                write!(out, "Enter text to insert: ")?;
                out.flush()?;
                let Some(text) = read_line(input)? else {
                    writeln!(out)?;
                    break;
                };
                match editor.insert_text(&text) {
                    Ok(_) => writeln!(out, "Inserted text: '{text}'")?,
                    Err(e) => writeln!(out, "Error: {e}")?,
                }
            }
            MenuChoice::Undo => match editor.undo() {
                Some(text) => writeln!(out, "Undo performed. Reverted to: \"{text}\"")?,
                None => writeln!(out, "Nothing to undo!")?,
            },
            MenuChoice::Show => {
                writeln!(out, "Current Text: \"{}\"", editor.current_text())?;
            }
            MenuChoice::Exit => break,
        }
    }

    writeln!(out, "Exiting editor.")?;
    out.flush()
}

/// Read one line without its trailing `\n` / `\r\n`. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(Some(buf))
}
