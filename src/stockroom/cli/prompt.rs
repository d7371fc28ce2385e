use std::io::{BufRead, Write};
use stockroom::error::Result;

/// Line-oriented terminal I/O for the shell.
///
/// Generic over reader and writer so tests can drive it with a `Cursor` and
/// collect output in a `Vec<u8>`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints `prompt` and reads one line without its line ending.
    /// Returns `None` once input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.write(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
