use crate::domain::ports::LineSource;
use crate::utils::error::Result;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Line source backed by a buffered reader, echoing the prompt to `prompt_out`.
pub struct ReaderSource<R: BufRead, W: Write> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> ReaderSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl ReaderSource<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.prompt_out, "{} ", prompt)?;
        self.prompt_out.flush()?;

        // Undecodable bytes become U+FFFD and fail operand validation downstream.
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }
}
