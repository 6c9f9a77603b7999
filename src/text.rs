//! Reading text streams into strings or lines.
//!
//! Both helpers wrap the reader in a [`BufReader`], so any [`Read`]
//! implementation can be passed directly.
//!
//! # Examples
//!
//! ```rust
//! use combinix::text::{read_lines, read_to_string};
//!
//! let content = "first\nsecond\n";
//! assert_eq!(read_to_string(content.as_bytes()).unwrap(), content);
//! assert_eq!(read_lines(content.as_bytes()).unwrap(), vec!["first", "second"]);
//! ```

use std::io::{BufReader, Read};

use crate::error::Result;

/// Reads the whole stream into one string, keeping line terminators.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if reading fails or the stream is
/// not valid UTF-8.
pub fn read_to_string<R: Read>(reader: R) -> Result<String> {
    let mut content = String::new();
    BufReader::new(reader).read_to_string(&mut content)?;
    Ok(content)
}

/// Reads the stream as lines with their terminators removed.
///
/// `\n`, `\r` and `\r\n` each end a line. An empty stream yields no lines,
/// a stream holding a single terminator yields one empty line, and a final
/// terminator does not start an extra empty line.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if reading fails or the stream is
/// not valid UTF-8.
pub fn read_lines<R: Read>(reader: R) -> Result<Vec<String>> {
    let content = read_to_string(reader)?;
    let mut lines = Vec::new();
    let mut rest = content.as_str();

    while !rest.is_empty() {
        let Some(end) = rest.find(['\n', '\r']) else {
            lines.push(rest.to_owned());
            break;
        };
        lines.push(rest[..end].to_owned());
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
    }

    Ok(lines)
}
