use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use roman_numeral::try_generate;

#[derive(Parser)]
#[command(name = "romantool", about = "Roman numeral conversion diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert integers given as arguments
    Convert {
        /// Integers to convert
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
        /// Emit lowercase numerals
        #[arg(long)]
        lower: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Convert integers from a file (one per line) and record results to JSONL
    Batch {
        /// Path to the input file (one integer per line, blank lines skipped)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
        /// Emit lowercase numerals
        #[arg(long)]
        lower: bool,
    },
}

/// A single conversion result (one per input number).
#[derive(Debug, Serialize)]
struct NumeralEntry {
    number: i64,
    numeral: String,
}

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn convert_cmd(numbers: &[i64], lower: bool, json: bool) {
    let entries: Vec<NumeralEntry> = numbers
        .iter()
        .map(|&number| {
            let numeral = die!(try_generate(number, lower), "Error: {}");
            NumeralEntry { number, numeral }
        })
        .collect();

    if json {
        let out = die!(
            serde_json::to_string_pretty(&entries),
            "Error serializing output: {}"
        );
        println!("{out}");
    } else {
        for entry in &entries {
            println!("{}\t{}", entry.number, entry.numeral);
        }
    }
}

fn batch_cmd(input_file: &str, output_file: &str, lower: bool) {
    let input = die!(fs::File::open(input_file), "Error opening input file: {}");
    let output = die!(fs::File::create(output_file), "Error creating output file: {}");
    let reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);

    let mut count = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = die!(line, "Error reading input: {}");
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let number: i64 = match text.parse() {
            Ok(n) => n,
            Err(e) => {
                eprintln!("Error parsing line {}: {:?} ({})", idx + 1, text, e);
                process::exit(1);
            }
        };
        let numeral = match try_generate(number, lower) {
            Ok(n) => n,
            Err(e) => {
                eprintln!("Error on line {}: {}", idx + 1, e);
                process::exit(1);
            }
        };

        let entry = NumeralEntry { number, numeral };
        let json = die!(serde_json::to_string(&entry), "Error serializing entry: {}");
        die!(writeln!(writer, "{json}"), "Error writing output: {}");
        count += 1;
    }
    die!(writer.flush(), "Error writing output: {}");

    eprintln!("Wrote {count} entries to {output_file}");
}

fn main() {
    roman_numeral::trace_init::init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Convert {
            numbers,
            lower,
            json,
        } => convert_cmd(&numbers, lower, json),
        Command::Batch {
            input_file,
            output_file,
            lower,
        } => batch_cmd(&input_file, &output_file, lower),
    }
}
