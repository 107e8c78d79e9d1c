//! Input and output selection for the command line tool

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};

use tracing::{debug, info};

use crate::consts::{STDIN_TOKEN, STDOUT_TOKEN};
use crate::emit::emit_declarations;
use crate::encode::EncodingConfig;
use crate::error::{Error, Result};

/// Byte source: the process standard input or an owned file
#[derive(Debug)]
pub enum Input {
    Stdin(io::Stdin),
    File(BufReader<File>),
}

impl Input {
    /// Open `token`, where the literal `stdin` selects standard input
    pub fn open(token: &str) -> Result<Self> {
        if token == STDIN_TOKEN {
            return Ok(Input::Stdin(io::stdin()));
        }

        let file = OpenOptions::new()
            .read(true)
            .open(token)
            .map_err(|source| Error::OpenInput {
                path: token.to_string(),
                source,
            })?;
        Ok(Input::File(BufReader::new(file)))
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Input::Stdin(stdin) => stdin.read(buf),
            Input::File(file) => file.read(buf),
        }
    }
}

/// Text sink: the process standard output or an owned file
#[derive(Debug)]
pub enum Output {
    Stdout(io::Stdout),
    File(BufWriter<File>),
}

impl Output {
    /// Create `token`, where the literal `stdout` selects standard output
    ///
    /// An existing file is truncated.
    pub fn create(token: &str) -> Result<Self> {
        if token == STDOUT_TOKEN {
            return Ok(Output::Stdout(io::stdout()));
        }

        let file = File::create(token).map_err(|source| Error::OpenOutput {
            path: token.to_string(),
            source,
        })?;
        Ok(Output::File(BufWriter::new(file)))
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(stdout) => stdout.write(buf),
            Output::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(stdout) => stdout.flush(),
            Output::File(file) => file.flush(),
        }
    }
}

/// Convert `input` into declarations written to `output`
///
/// Both arguments are paths or the `stdin`/`stdout` tokens. The input is
/// opened before the output, so a missing input never creates or truncates
/// the output file.
///
/// # Returns
/// Number of bytes read from input
pub fn convert(input: &str, output: &str, config: &EncodingConfig) -> Result<u64> {
    config.validate()?;

    let reader = Input::open(input)?;
    let mut writer = Output::create(output)?;
    debug!(input, output, "streams opened");

    let size = emit_declarations(config, reader, &mut writer)?;
    writer.flush()?;

    info!(size, ident = config.identifier(), "converted {} -> {}", input, output);
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_input() {
        let result = Input::open("/definitely/not/here.bin");

        match result {
            Err(Error::OpenInput { path, .. }) => assert_eq!(path, "/definitely/not/here.bin"),
            other => panic!("Expected OpenInput, got {:?}", other),
        }
    }

    #[test]
    fn test_stdin_token() {
        assert!(matches!(Input::open("stdin"), Ok(Input::Stdin(_))));
        assert!(matches!(Output::create("stdout"), Ok(Output::Stdout(_))));
    }

    #[test]
    fn test_create_output_in_missing_dir() {
        let result = Output::create("/definitely/not/here/out.h");

        assert!(matches!(result, Err(Error::OpenOutput { .. })));
    }
}
