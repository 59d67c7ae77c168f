use std::io::{self, Write};

pub const SEPARATOR_WIDTH: usize = 20;

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Converts a value into the lines printed on stdout.
pub trait IntoConsoleMessage {
    fn into_console_message(self) -> Vec<String>;
}

pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
