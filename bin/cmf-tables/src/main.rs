//! Reads CIE color-matching function samples as CSV (from
//! <http://cvrl.ucl.ac.uk/cmfs.htm>), prints three integrals of one channel
//! for comparison, and optionally emits the samples as constant tables.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChannelArg {
    /// x̄, the first numeric column
    X,
    /// ȳ, the second numeric column
    Y,
    /// z̄, the third numeric column
    Z,
}

impl ChannelArg {
    fn to_channel(self) -> cmf::Channel {
        match self {
            ChannelArg::X => cmf::Channel::X,
            ChannelArg::Y => cmf::Channel::Y,
            ChannelArg::Z => cmf::Channel::Z,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cmf-tables")]
#[command(about = "Integrate CIE color-matching functions and emit them as constant tables")]
struct Args {
    /// CSV file to read; standard input when omitted
    input: Option<PathBuf>,

    /// Channel to integrate
    #[arg(short, long, value_enum, default_value_t = ChannelArg::Y)]
    channel: ChannelArg,

    /// Emit constant tables for these channels before the integrals
    #[arg(short, long, value_enum, value_delimiter = ',')]
    tables: Vec<ChannelArg>,

    /// Print progress to standard error
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), cmf::Error> {
    let args = Args::parse();

    let options = cmf::Options {
        channel: args.channel.to_channel(),
        tables: args.tables.iter().map(|arg| arg.to_channel()).collect(),
    };

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    let mut notes: Box<dyn Write> = if args.verbose {
        Box::new(io::stderr())
    } else {
        Box::new(io::sink())
    };

    match &args.input {
        Some(path) => {
            writeln!(notes, "Loading: {}", path.display())?;
            let file = File::open(path)?;
            cmf::run(BufReader::new(file), &mut output, &mut notes, &options)?;
        }
        None => {
            cmf::run(io::stdin().lock(), &mut output, &mut notes, &options)?;
        }
    }

    output.flush()?;

    Ok(())
}
