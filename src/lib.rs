//! Embed binary files into C/C++ sources
//!
//! The input bytes become a `unsigned char` array initialized from a
//! sequence of escaped string literal fragments, plus an `unsigned int`
//! holding the byte count. A second, body-less copy of both declarations is
//! placed under an `#ifdef __INTELLISENSE__` guard for editor tooling.
//!
//! # Example
//! ```
//! let mut output = Vec::new();
//! let size = bin2cpp::encode(&b"hi\n"[..], &mut output, "greeting.txt").unwrap();
//!
//! assert_eq!(size, 3);
//! let source = String::from_utf8(output).unwrap();
//! assert!(source.contains("const unsigned char greeting_txt[] =\n\t\"hi\\n\";\n"));
//! ```

use std::io::{Read, Write};

mod consts;
mod decode;
mod emit;
mod encode;
mod error;
mod ident;
mod stream;

pub use consts::{DEFAULT_LINE_LENGTH, STDIN_TOKEN, STDOUT_TOKEN};
pub use decode::{DecodedLiteral, decode_source, unescape_fragment};
pub use emit::emit_declarations;
pub use encode::{EncodedOutput, Encoder, EncodingConfig, Escape, encode_lines, encode_to_fragments};
pub use error::{Error, Result};
pub use ident::{is_valid_identifier, make_identifier};
pub use stream::{Input, Output, convert};

/// Encode with default settings, deriving the identifier from `name`
///
/// This is a convenience function equivalent to
/// `emit_declarations(&EncodingConfig::new(make_identifier(name)), reader, writer)`
pub fn encode<R: Read, W: Write>(reader: R, writer: W, name: &str) -> Result<u64> {
    emit_declarations(&EncodingConfig::new(make_identifier(name)), reader, writer)
}
