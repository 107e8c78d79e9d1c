//! Reading generated literals back into bytes

use tracing::debug;

use crate::consts::LEN_SUFFIX;
use crate::error::{Error, Result};

/// Literal recovered from generated source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLiteral {
    pub identifier: String,
    pub data: Vec<u8>,
    /// Value of the `<ident>_len` declaration
    pub declared_len: u64,
    /// Number of quoted fragments the array initializer was made of
    pub fragments: usize,
}

/// Undo the escaping of one fragment (the text between the quotes)
///
/// Accepts the short escapes the encoder writes plus octal escapes of one
/// to three digits.
pub fn unescape_fragment(fragment: &str) -> Result<Vec<u8>> {
    let bytes = fragment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b != b'\\' {
            if b == b'"' {
                return Err(Error::InvalidEscape(format!(
                    "unescaped quote at offset {}",
                    i
                )));
            }
            out.push(b);
            i += 1;
            continue;
        }

        let Some(&next) = bytes.get(i + 1) else {
            return Err(Error::InvalidEscape("trailing backslash".to_string()));
        };
        i += 2;
        match next {
            b'r' => out.push(b'\r'),
            b'n' => out.push(b'\n'),
            b't' => out.push(b'\t'),
            b'"' => out.push(b'"'),
            b'\\' => out.push(b'\\'),
            b'0'..=b'7' => {
                let mut value = u32::from(next - b'0');
                let mut digits = 1;
                while digits < 3 {
                    match bytes.get(i) {
                        Some(&d @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(d - b'0');
                            i += 1;
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                let byte = u8::try_from(value).map_err(|_| {
                    Error::InvalidEscape(format!("octal escape \\{:o} out of range", value))
                })?;
                out.push(byte);
            }
            other => {
                return Err(Error::InvalidEscape(format!(
                    "\\{}",
                    char::from(other).escape_default()
                )));
            }
        }
    }

    Ok(out)
}

/// Pull the quoted text out of a `\t"..."` line
fn fragment_body(line: &str) -> Result<(&str, bool)> {
    let line = line.trim_start();
    let inner = line
        .strip_prefix('"')
        .ok_or_else(|| Error::InvalidSource(format!("expected a quoted fragment: {}", line)))?;

    if let Some(body) = inner.strip_suffix("\";") {
        Ok((body, true))
    } else if let Some(body) = inner.strip_suffix('"') {
        Ok((body, false))
    } else {
        Err(Error::InvalidSource(format!(
            "unterminated fragment: {}",
            line
        )))
    }
}

/// Parse the definition branch of generated source
///
/// Only the `#else` branch is read; the body-less declarations above it
/// carry no data.
pub fn decode_source(source: &str) -> Result<DecodedLiteral> {
    let mut lines = source.lines().skip_while(|l| l.trim() != "#else").skip(1);

    let decl = lines
        .next()
        .ok_or_else(|| Error::InvalidSource("missing array definition".to_string()))?;
    let identifier = decl
        .trim()
        .trim_start_matches("const ")
        .strip_prefix("unsigned char ")
        .and_then(|rest| rest.strip_suffix("[] ="))
        .ok_or_else(|| Error::InvalidSource(format!("bad array definition: {}", decl)))?
        .to_string();

    let mut data = Vec::new();
    let mut fragments = 0;
    loop {
        let line = lines
            .next()
            .ok_or_else(|| Error::InvalidSource("array initializer never ends".to_string()))?;
        let (body, last) = fragment_body(line)?;
        data.extend(unescape_fragment(body)?);
        fragments += 1;
        if last {
            break;
        }
    }

    let len_line = lines
        .next()
        .ok_or_else(|| Error::InvalidSource("missing length definition".to_string()))?;
    let prefix = format!("unsigned int {}{} = ", identifier, LEN_SUFFIX);
    let declared_len = len_line
        .trim()
        .trim_start_matches("const ")
        .strip_prefix(prefix.as_str())
        .and_then(|rest| rest.strip_suffix(';'))
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| Error::InvalidSource(format!("bad length definition: {}", len_line)))?;

    debug!(identifier = %identifier, fragments, declared_len, "decoded literal");

    Ok(DecodedLiteral {
        identifier,
        data,
        declared_len,
        fragments,
    })
}
