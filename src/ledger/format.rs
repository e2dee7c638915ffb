//! The serialized ledger line format.
//!
//! One entry per line: `<perms(10 chars)><TAB><owner>/<group><TAB><path>`,
//! after the CRUX `.footprint` file layout. The leading character of the
//! permission field is a file-type slot: it is accepted on parse regardless
//! of its value and never interpreted, and rendering always emits `-` there.

use std::path::PathBuf;

use crate::constants::{FIELD_SEPARATOR, OWNER_SEPARATOR, PERM_STRING_LEN};
use crate::types::entry::Entry;
use crate::types::errors::{Error, ErrorKind, Result};

/// Render nine permission bits as the canonical 10-character symbolic
/// string, e.g. `0o754` -> `-rwxr-xr--`.
pub(crate) fn render_perms(mode: u32) -> String {
    let mut s = String::with_capacity(PERM_STRING_LEN);
    s.push('-');
    for shift in [6u32, 3, 0] {
        let bits = (mode >> shift) & 7;
        s.push(if bits & 4 != 0 { 'r' } else { '-' });
        s.push(if bits & 2 != 0 { 'w' } else { '-' });
        s.push(if bits & 1 != 0 { 'x' } else { '-' });
    }
    s
}

/// Parse a 10-character symbolic permission string back into mode bits.
///
/// Exact inverse of [`render_perms`] over the nine permission bits; the
/// leading byte is skipped unconditionally.
///
/// # Errors
///
/// `ErrorKind::Format` if the input is not exactly 10 bytes or contains a
/// byte outside `{r,w,x,-}` in positions 1-9.
pub(crate) fn parse_perms(s: &str) -> Result<u32> {
    let bytes = s.as_bytes();
    if bytes.len() != PERM_STRING_LEN {
        return Err(Error::new(
            ErrorKind::Format,
            format!("invalid permission string length {} in {s:?}", bytes.len()),
        ));
    }

    let mut mode = 0u32;
    for group in 0..3usize {
        let mut value = 0u32;
        for j in 0..3usize {
            let offset = 1 + group * 3 + j;
            value += match bytes[offset] {
                b'r' => 4,
                b'w' => 2,
                b'x' => 1,
                b'-' => 0,
                other => {
                    return Err(Error::new(
                        ErrorKind::Format,
                        format!(
                            "invalid permission character {:?} (byte {other}) at offset {offset}",
                            other as char
                        ),
                    ))
                }
            };
        }
        mode |= value << (6 - 3 * group);
    }
    Ok(mode)
}

/// Parse one serialized line into an [`Entry`].
///
/// # Errors
///
/// `ErrorKind::Format` unless the line splits into exactly three
/// tab-separated fields and the ownership field into exactly two
/// slash-separated names.
pub(crate) fn parse_line(line: &str) -> Result<Entry> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != 3 {
        return Err(Error::new(
            ErrorKind::Format,
            format!(
                "expected 3 tab-separated fields, found {}: {line:?}",
                fields.len()
            ),
        ));
    }

    let perms = parse_perms(fields[0])?;

    let names: Vec<&str> = fields[1].split(OWNER_SEPARATOR).collect();
    if names.len() != 2 {
        return Err(Error::new(
            ErrorKind::Format,
            format!("malformed ownership field {:?} in line {line:?}", fields[1]),
        ));
    }

    Ok(Entry::from_parts(
        perms,
        PathBuf::from(fields[2]),
        names[0].to_string(),
        names[1].to_string(),
    ))
}
