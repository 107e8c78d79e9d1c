//! Byte stream to escaped literal fragments

use std::io::{self, ErrorKind, Read};

use tracing::trace;

use crate::consts::{DEFAULT_LINE_LENGTH, FORCED_OCTAL};
use crate::error::{Error, Result};
use crate::ident::is_valid_identifier;

/// Size of the chunks pulled from the reader
const READ_CHUNK: usize = 8 * 1024;

/// Encoding configuration, resolved once before any byte is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingConfig {
    identifier: String,
    emit_const: bool,
    always_escape: bool,
    max_line_length: usize,
}

impl EncodingConfig {
    /// Create a configuration with default settings
    ///
    /// Default settings:
    /// - `const` qualified declarations
    /// - Escaping only where needed
    /// - Line length: 100 characters
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            emit_const: true,
            always_escape: false,
            max_line_length: DEFAULT_LINE_LENGTH,
        }
    }

    /// Emit mutable declarations instead of `const` ones
    pub fn no_const(mut self) -> Self {
        self.emit_const = false;
        self
    }

    /// Write every byte as an octal escape
    pub fn always_escape(mut self) -> Self {
        self.always_escape = true;
        self
    }

    /// Set the soft limit on escaped characters per fragment
    ///
    /// The limit is checked after a whole escape is appended, so a
    /// fragment can run up to 3 characters past it.
    pub fn line_length(mut self, length: usize) -> Self {
        self.max_line_length = length;
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn emit_const(&self) -> bool {
        self.emit_const
    }

    pub fn escapes_always(&self) -> bool {
        self.always_escape
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Check that the configuration can produce valid source
    pub fn validate(&self) -> Result<()> {
        if self.identifier.is_empty() {
            return Err(Error::EmptyIdentifier);
        }
        if !is_valid_identifier(&self.identifier) {
            return Err(Error::InvalidIdentifier(self.identifier.clone()));
        }
        if self.max_line_length == 0 {
            return Err(Error::InvalidLineLength);
        }
        Ok(())
    }
}

/// Textual form chosen for a single input byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// The byte itself
    Literal(u8),
    /// Backslash followed by this character
    Short(u8),
    /// Backslash followed by three octal digits of this byte
    Octal(u8),
}

impl Escape {
    /// Pick the representation for `byte`
    #[inline]
    pub fn classify(byte: u8, always_escape: bool) -> Self {
        if always_escape {
            return Escape::Octal(byte);
        }
        match byte {
            b'"' | b'\\' => Escape::Short(byte),
            0x20..=0x7e if !FORCED_OCTAL.contains(&byte) => Escape::Literal(byte),
            b'\r' => Escape::Short(b'r'),
            b'\n' => Escape::Short(b'n'),
            b'\t' => Escape::Short(b't'),
            _ => Escape::Octal(byte),
        }
    }

    /// Number of characters this escape occupies in the literal
    #[inline]
    pub fn width(self) -> usize {
        match self {
            Escape::Literal(_) => 1,
            Escape::Short(_) => 2,
            Escape::Octal(_) => 4,
        }
    }

    #[inline]
    pub fn push_to(self, buf: &mut String) {
        match self {
            Escape::Literal(b) => buf.push(b as char),
            Escape::Short(c) => {
                buf.push('\\');
                buf.push(c as char);
            }
            Escape::Octal(b) => {
                buf.push('\\');
                buf.push((b'0' + (b >> 6)) as char);
                buf.push((b'0' + ((b >> 3) & 0o7)) as char);
                buf.push((b'0' + (b & 0o7)) as char);
            }
        }
    }
}

/// Streaming encoder state: the pending line fragment and the byte count
///
/// Fragments are handed to a sink as soon as they are complete, so memory
/// stays bounded by one fragment regardless of input size.
#[derive(Debug)]
pub struct Encoder<'a> {
    config: &'a EncodingConfig,
    line: String,
    byte_count: u64,
}

impl<'a> Encoder<'a> {
    pub fn new(config: &'a EncodingConfig) -> Self {
        Self {
            config,
            line: String::with_capacity(config.max_line_length + 4),
            byte_count: 0,
        }
    }

    /// Encode `bytes`, handing every completed fragment to `sink`
    pub fn push<F>(&mut self, bytes: &[u8], sink: &mut F) -> io::Result<()>
    where
        F: FnMut(&str) -> io::Result<()>,
    {
        for &byte in bytes {
            Escape::classify(byte, self.config.always_escape).push_to(&mut self.line);
            self.byte_count += 1;

            if self.line.len() >= self.config.max_line_length {
                sink(&self.line)?;
                self.line.clear();
            }
        }
        Ok(())
    }

    /// Flush the pending fragment, if any, and return the input byte count
    pub fn finish<F>(self, sink: &mut F) -> io::Result<u64>
    where
        F: FnMut(&str) -> io::Result<()>,
    {
        if !self.line.is_empty() {
            sink(&self.line)?;
        }
        Ok(self.byte_count)
    }

    /// Bytes consumed so far
    pub fn byte_count(&self) -> u64 {
        self.byte_count
    }
}

/// Encode everything `reader` yields, handing each fragment to `sink`
///
/// # Returns
/// Number of bytes read from input
pub fn encode_lines<R, F>(config: &EncodingConfig, mut reader: R, mut sink: F) -> Result<u64>
where
    R: Read,
    F: FnMut(&str) -> io::Result<()>,
{
    let mut encoder = Encoder::new(config);
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        encoder.push(&chunk[..n], &mut sink)?;
        trace!(read = n, total = encoder.byte_count(), "encoded chunk");
    }

    Ok(encoder.finish(&mut sink)?)
}

/// Encoded fragments and byte count held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedOutput {
    pub lines: Vec<String>,
    pub byte_count: u64,
}

/// Encode an in-memory buffer into its fragments
pub fn encode_to_fragments(config: &EncodingConfig, data: &[u8]) -> Result<EncodedOutput> {
    let mut lines = Vec::new();
    let byte_count = encode_lines(config, data, |line| {
        lines.push(line.to_string());
        Ok(())
    })?;

    Ok(EncodedOutput { lines, byte_count })
}
