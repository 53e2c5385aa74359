//! Line-based input shared by the interactive games

use std::io::{self, BufRead, Write};

/// Print `prompt` and read one trimmed line; `None` at end of input
pub fn read_command<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
