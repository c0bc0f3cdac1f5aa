use std::io::Write;

use anyhow::Result;
use serde::Serialize;

/// Writes `data` as two-space indented JSON followed by a newline.
pub fn write_json<T: Serialize, W: Write>(out: &mut W, data: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, data)?;
    writeln!(out)?;
    Ok(())
}

pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_json(&mut lock, data)
}
