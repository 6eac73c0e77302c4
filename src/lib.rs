//! cmf turns CIE color-matching function samples into constant tables for a
//! spectral renderer, and checks the data by integrating one channel three
//! different ways.
//!
//! ```rust
//! let samples = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let result = cmf::integrate(&samples).unwrap();
//! assert_eq!(result.simpson, 8.0);
//! ```

#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
mod test;

mod error;
mod integrate;
mod record;
mod table;

use std::io::{Read, Write};

pub use error::{Error, InvalidInput, Result};
pub use integrate::{
    integrate, simpsons_rule, trapezoid_manual, trapezoid_rule, Integration, Samples,
};
pub use record::{channel, read_records, Channel, Channels, CmfRecord, REQUIRED_FIELDS};
pub use table::{write_table, write_tables, SAMPLES_CONST};

/// What [`run`] should produce.
#[derive(Clone, Debug)]
pub struct Options {
    /// The channel to integrate.
    pub channel: Channel,
    /// Channels to emit constant tables for. Empty emits none.
    pub tables: Channels,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            channel: Channel::Y,
            tables: Channels::empty(),
        }
    }
}

/// Read CSV rows from `input` and write the requested tables followed by the
/// three integral estimates (manual sum, Simpson's rule, trapezoid rule), one
/// per line, to `output`. Progress notes go to `notes`.
///
/// Only the integrated channel and the channels selected for tables are
/// parsed as numbers. Nothing is written to `output` if the input is
/// rejected.
pub fn run<R: Read, W: Write, N: Write>(
    input: R,
    output: &mut W,
    notes: &mut N,
    options: &Options,
) -> Result<Integration<f64>> {
    let records = read_records(input)?;

    writeln!(notes, "Read {} records", records.len())?;
    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        writeln!(notes, "  Wavelengths: {} to {}", first.wavelength, last.wavelength)?;
    }

    let values = channel(&records, options.channel)?;
    let samples = Samples::new(&values)?;
    writeln!(
        notes,
        "Integrating {} samples of channel {:?}",
        samples.len(),
        options.channel
    )?;
    let integration = samples.integrate()?;

    if !options.tables.is_empty() {
        for table in options.tables.channels() {
            channel(&records, table)?;
        }
        let names: Vec<&str> = options.tables.channels().map(Channel::table_name).collect();
        writeln!(notes, "Writing tables: {}", names.join(", "))?;
        write_tables(output, options.tables, &records)?;
        writeln!(output)?;
    }

    writeln!(output, "{integration}")?;

    Ok(integration)
}
