//! Where the URL to download comes from

use std::io::{self, BufRead, Write};

pub trait UrlSource {
    fn read_url(&mut self) -> io::Result<String>;
}

/// A URL already known, e.g. from the command line
#[derive(Debug, Clone)]
pub struct FixedUrl(pub String);

impl UrlSource for FixedUrl {
    fn read_url(&mut self) -> io::Result<String> {
        Ok(self.0.clone())
    }
}

/// Ask for the URL on a terminal-like stream and read one line back
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
    message: String,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W, message: impl Into<String>) -> Self {
        Self {
            reader,
            writer,
            message: message.into(),
        }
    }
}

impl Prompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin(message: impl Into<String>) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), message)
    }
}

impl<R: BufRead, W: Write> UrlSource for Prompt<R, W> {
    fn read_url(&mut self) -> io::Result<String> {
        write!(self.writer, "{}", self.message)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no URL entered",
            ));
        }

        Ok(line.trim().to_string())
    }
}
