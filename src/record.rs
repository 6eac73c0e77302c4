//! Reading color-matching function samples from CSV.
//!
//! The input is headerless, one row per wavelength:
//! `wavelength, x̄, ȳ, z̄`. Extra trailing fields are ignored.

use std::io::Read;

use bitflags::bitflags;

use crate::error::{Error, InvalidInput, Result};

/// Fields a row must carry: the wavelength followed by three channels.
pub const REQUIRED_FIELDS: usize = 4;

/// One of the three color-matching functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// x̄, the first numeric column.
    X,
    /// ȳ, the second numeric column. Also the luminous efficiency function.
    Y,
    /// z̄, the third numeric column.
    Z,
}

impl Channel {
    /// All channels in column order.
    pub const ALL: [Channel; 3] = [Channel::X, Channel::Y, Channel::Z];

    /// Index of the channel's field within a row.
    pub fn field(self) -> usize {
        match self {
            Channel::X => 1,
            Channel::Y => 2,
            Channel::Z => 3,
        }
    }

    /// Name of the generated constant table.
    pub fn table_name(self) -> &'static str {
        match self {
            Channel::X => "CIE_X",
            Channel::Y => "CIE_Y",
            Channel::Z => "CIE_Z",
        }
    }

    fn flag(self) -> Channels {
        match self {
            Channel::X => Channels::X,
            Channel::Y => Channels::Y,
            Channel::Z => Channels::Z,
        }
    }
}

bitflags! {
    /// A set of [`Channel`]s.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Channels : u8 {
        /// x̄
        const X = 1 << 0;
        /// ȳ
        const Y = 1 << 1;
        /// z̄
        const Z = 1 << 2;
    }
}

impl Channels {
    /// Whether `channel` is part of the set.
    pub fn has(self, channel: Channel) -> bool {
        self.contains(channel.flag())
    }

    /// The channels in the set, in column order.
    pub fn channels(self) -> impl Iterator<Item = Channel> {
        Channel::ALL
            .into_iter()
            .filter(move |channel| self.has(*channel))
    }
}

impl FromIterator<Channel> for Channels {
    fn from_iter<I: IntoIterator<Item = Channel>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Channels::empty(), |set, channel| set | channel.flag())
    }
}

/// One row of color-matching data.
///
/// Channel fields are kept as written so they can be copied into generated
/// source untouched. They are only parsed when a channel is asked for.
#[derive(Clone, Debug, PartialEq)]
pub struct CmfRecord {
    /// 1-based line number the row was read from.
    pub line: u64,
    /// The identifier field, usually the wavelength in nanometers.
    pub wavelength: String,
    /// x̄, ȳ and z̄ in column order, with surrounding whitespace removed.
    pub channels: [String; 3],
}

impl CmfRecord {
    /// The field text for `channel`.
    pub fn text(&self, channel: Channel) -> &str {
        &self.channels[channel.field() - 1]
    }

    /// The value of `channel`, which must be a finite number.
    pub fn value(&self, channel: Channel) -> Result<f64> {
        let text = self.text(channel);

        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(InvalidInput::NotANumber {
                line: self.line,
                field: channel.field(),
                text: text.to_string(),
            }
            .into()),
        }
    }
}

/// Read every row from `reader`.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CmfRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |position| position.line());

        if record.len() < REQUIRED_FIELDS {
            return Err(Error::MalformedRecord {
                line,
                expected: REQUIRED_FIELDS,
                found: record.len(),
            });
        }

        records.push(CmfRecord {
            line,
            wavelength: record[0].to_string(),
            channels: Channel::ALL.map(|channel| record[channel.field()].to_string()),
        });
    }

    Ok(records)
}

/// The values of `channel` across `records`, in input order.
pub fn channel(records: &[CmfRecord], channel: Channel) -> Result<Vec<f64>> {
    records
        .iter()
        .map(|record| record.value(channel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
360,0.000129900000,0.000003917000,0.000606100000
361,0.000145847000,0.000004393581,0.000680879200
362,0.000163802100,0.000004929604,0.000765145600
";

    #[test]
    fn reads_rows() {
        let records = read_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);

        let first = &records[0];
        assert_eq!(first.line, 1);
        assert_eq!(first.wavelength, "360");
        assert_eq!(first.text(Channel::X), "0.000129900000");
        assert_eq!(first.value(Channel::Y).unwrap(), 0.000003917);
        assert_eq!(first.value(Channel::Z).unwrap(), 0.0006061);
        assert_eq!(records[2].line, 3);
    }

    #[test]
    fn extracts_channel() {
        let records = read_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            channel(&records, Channel::Y).unwrap(),
            vec![0.000003917, 0.000004393581, 0.000004929604]
        );
    }

    #[test]
    fn trims_whitespace_and_ignores_extra_fields() {
        let records = read_records(" 400 , 1.5 ,2,  3 ,extra\n".as_bytes()).unwrap();
        assert_eq!(records[0].wavelength, "400");
        assert_eq!(records[0].text(Channel::X), "1.5");
        assert_eq!(records[0].value(Channel::Z).unwrap(), 3.0);
    }

    #[test]
    fn short_row_is_malformed() {
        let input = "360,1,2,3\n361,1,2\n";
        match read_records(input.as_bytes()) {
            Err(Error::MalformedRecord {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn unused_channels_are_not_parsed() {
        let records = read_records("360,,1,n/a\n361,junk,2,\n".as_bytes()).unwrap();
        assert_eq!(records[0].text(Channel::X), "");
        assert_eq!(records[1].text(Channel::X), "junk");
        assert_eq!(channel(&records, Channel::Y).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn non_numeric_field() {
        let records = read_records("360,1,2,3\n361,1,abc,3\n".as_bytes()).unwrap();
        match channel(&records, Channel::Y) {
            Err(Error::InvalidInput(InvalidInput::NotANumber { line, field, text })) => {
                assert_eq!(line, 2);
                assert_eq!(field, 2);
                assert_eq!(text, "abc");
            }
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_field() {
        let records = read_records("360,1,2,inf\n".as_bytes()).unwrap();
        assert!(matches!(
            records[0].value(Channel::Z),
            Err(Error::InvalidInput(InvalidInput::NotANumber { field: 3, .. }))
        ));
        assert!(matches!(
            channel(&records, Channel::X),
            Ok(values) if values == vec![1.0]
        ));
    }

    #[test]
    fn empty_input() {
        assert!(read_records("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn channel_sets() {
        let set: Channels = [Channel::Z, Channel::X].into_iter().collect();
        assert!(set.has(Channel::X));
        assert!(!set.has(Channel::Y));
        assert_eq!(
            set.channels().collect::<Vec<_>>(),
            vec![Channel::X, Channel::Z]
        );
        assert_eq!(
            [Channel::Y].into_iter().collect::<Channels>(),
            Channels::Y
        );
    }
}
