/// Shared string helpers for node rendering and the debug printer
use std::fmt::Write;

use crate::utils::config::render;
use crate::utils::errors::{AstError, AstResult};

/// Append one indented line to `buf`.
pub fn write_line(buf: &mut String, indent: usize, args: std::fmt::Arguments) -> AstResult<()> {
    buf.extend(std::iter::repeat(' ').take(indent));
    buf.write_fmt(args).map_err(|_| AstError::render("fmt error"))?;
    buf.push('\n');
    Ok(())
}

/// Join already-rendered parts with the token separator, skipping empty ones.
pub fn join_tokens<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.as_ref();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(render::TOKEN_SEPARATOR);
        }
        out.push_str(part);
    }
    out
}
