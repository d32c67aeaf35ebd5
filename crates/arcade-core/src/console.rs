//! `Console` implementation over any reader/writer pair.

use std::io::{BufRead, Cursor, Stdin, StdinLock, Stdout, Write};

use crate::traits::Console;

/// A console backed by a buffered reader and a writer.
///
/// The interactive binary uses stdin/stdout; tests use a `Cursor` over a
/// script and capture output in a `Vec<u8>`.
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
    closed: bool,
}

/// Console on the process's stdin and stdout.
pub type StdConsole = IoConsole<StdinLock<'static>, Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        IoConsole::new(stdin.lock(), std::io::stdout())
    }
}

impl IoConsole<Cursor<Vec<u8>>, Vec<u8>> {
    /// A console that replays `script` as input and records all output.
    pub fn scripted(script: &str) -> Self {
        IoConsole::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    /// Everything written so far.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            closed: false,
        }
    }

    /// Whether input has been observed closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self) -> Option<String> {
        if self.closed {
            return None;
        }

        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                tracing::debug!("console input reached EOF");
                self.closed = true;
                None
            }
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                Some(line.trim_end_matches(['\n', '\r']).to_string())
            }
            Err(e) => {
                tracing::warn!("console read failed, treating input as closed: {e}");
                self.closed = true;
                None
            }
        }
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{text}") {
            tracing::debug!("console write failed: {e}");
        }
    }

    fn prompt(&mut self, text: &str) {
        if let Err(e) = write!(self.writer, "{text}").and_then(|()| self.writer.flush()) {
            tracing::debug!("console write failed: {e}");
        }
    }
}
