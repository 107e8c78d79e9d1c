//! Declaration emission around the encoded literal

use std::io::{Read, Write};

use tracing::debug;

use crate::consts::{LEN_SUFFIX, TOOLING_GUARD};
use crate::encode::{EncodingConfig, encode_lines};
use crate::error::Result;

/// Write the guarded array and length declarations for `reader`
///
/// The output has two branches: body-less declarations under the tooling
/// guard, and the real definitions under `#else`. Fragments are written as
/// soon as the encoder completes them.
///
/// # Returns
/// Number of bytes read from input
///
/// # Example
/// ```
/// use bin2cpp::{EncodingConfig, emit_declarations};
///
/// let mut output = Vec::new();
/// let size = emit_declarations(&EncodingConfig::new("abc"), &b"ABC"[..], &mut output).unwrap();
///
/// assert_eq!(size, 3);
/// assert!(String::from_utf8(output).unwrap().contains("\t\"ABC\";\n"));
/// ```
pub fn emit_declarations<R: Read, W: Write>(
    config: &EncodingConfig,
    reader: R,
    mut writer: W,
) -> Result<u64> {
    config.validate()?;

    let qualifier = if config.emit_const() { "const " } else { "" };
    let ident = config.identifier();

    writeln!(writer, "#ifdef {}", TOOLING_GUARD)?;
    writeln!(writer, "{}unsigned char {}[];", qualifier, ident)?;
    writeln!(writer, "{}unsigned int {}{};", qualifier, ident, LEN_SUFFIX)?;
    writeln!(writer, "#else")?;
    writeln!(writer, "{}unsigned char {}[] =", qualifier, ident)?;

    let mut fragments = 0usize;
    let size = encode_lines(config, reader, |line| {
        if fragments > 0 {
            writer.write_all(b"\"\n")?;
        }
        fragments += 1;
        writer.write_all(b"\t\"")?;
        writer.write_all(line.as_bytes())
    })?;

    // Empty input still needs a literal for the array initializer
    if fragments == 0 {
        writer.write_all(b"\t\"")?;
    }
    writeln!(writer, "\";")?;

    writeln!(
        writer,
        "{}unsigned int {}{} = {};",
        qualifier, ident, LEN_SUFFIX, size
    )?;
    writeln!(writer, "#endif")?;

    debug!(ident, size, fragments, "emitted declarations");

    Ok(size)
}
