//! Render color-matching data as Rust constant arrays.

use std::io::Write;

use crate::record::{Channel, Channels, CmfRecord};

/// Name of the generated length constant every table refers to.
pub const SAMPLES_CONST: &str = "CIE_SAMPLES";

/// Write one `const CIE_?: [f32; CIE_SAMPLES] = [...];` table. Field text is
/// copied verbatim, one value per line.
pub fn write_table<W: Write>(
    out: &mut W,
    channel: Channel,
    records: &[CmfRecord],
) -> std::io::Result<()> {
    writeln!(
        out,
        "const {}: [f32; {}] = [",
        channel.table_name(),
        SAMPLES_CONST
    )?;
    for record in records {
        writeln!(out, "\t{},", record.text(channel))?;
    }
    writeln!(out, "];")
}

/// Write the length constant followed by a table for each selected channel,
/// separated by blank lines.
pub fn write_tables<W: Write>(
    out: &mut W,
    channels: Channels,
    records: &[CmfRecord],
) -> std::io::Result<()> {
    writeln!(out, "const {}: usize = {};", SAMPLES_CONST, records.len())?;
    for channel in channels.channels() {
        writeln!(out)?;
        write_table(out, channel, records)?;
    }
    Ok(())
}
