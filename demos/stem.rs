use std::fs::File;

use clap::Parser;
use porter_stemmer::{stem, stem_tokens};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    /// Path to target CSV file
    #[arg(long)]
    path: Option<String>,

    /// Index of the CSV column to stem
    #[arg(long, default_value_t = 0)]
    select: usize,

    /// Tokenize inputs as free text before stemming
    #[arg(long)]
    text: bool,

    /// Words to stem
    word: Vec<String>,
}

fn stem_input(input: &str, text: bool) -> String {
    if text {
        stem_tokens(input).join(" ")
    } else {
        stem(input)
    }
}

fn decode_cell<'a>(
    cell: Option<&'a [u8]>,
    select: usize,
    path: &str,
) -> anyhow::Result<&'a str> {
    let cell =
        cell.ok_or_else(|| anyhow::anyhow!("column {} is out of range in {}", select, path))?;

    Ok(std::str::from_utf8(cell)?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(path) = &args.path {
        let file = File::open(path)?;
        let mut reader = simd_csv::Reader::from_reader(file);
        let mut writer = simd_csv::Writer::from_writer(std::io::stdout());

        let mut record = reader.byte_headers()?.clone();
        record.push_field(b"porter_stem");

        writer.write_byte_record(&record)?;

        let mut rows: usize = 0;

        while reader.read_byte_record(&mut record)? {
            let input = decode_cell(record.get(args.select), args.select, path)?;
            let stemmed = stem_input(input, args.text);
            debug!(input, stemmed = stemmed.as_str(), "stemmed cell");

            record.push_field(stemmed.as_bytes());

            writer.write_byte_record(&record)?;
            rows += 1;
        }

        writer.flush()?;
        info!(rows, path = path.as_str(), "stemmed csv file");
    } else {
        for word in args.word {
            let stemmed = stem_input(&word, args.text);
            debug!(input = word.as_str(), stemmed = stemmed.as_str(), "stemmed word");

            println!("{} => {}", &word, stemmed);
        }
    }

    Ok(())
}
