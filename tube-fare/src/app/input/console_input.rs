use super::{InputError, InputSource};
use std::io::{BufRead, Write};

/// an [`InputSource`] reading answers line by line from a reader and writing
/// prompts to a writer. wraps stdin/stdout for interactive use, or in-memory
/// buffers for scripted runs.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> ConsoleInput<R, W> {
        ConsoleInput { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn prompt(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        let mut line = String::new();
        let n_bytes = self.reader.read_line(&mut line)?;
        if n_bytes == 0 {
            return Err(InputError::EndOfInput(prompt.trim().to_string()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn message(&mut self, message: &str) -> Result<(), InputError> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }
}
