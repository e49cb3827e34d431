// snowstem-batch: Stem JSON arrays of words.
//
// Reads one JSON array of strings per line from stdin and writes the
// array of stems for each line to stdout. A line that is not an array of
// strings is reported on stderr and produces no output; the remaining
// lines are still processed and the tool exits with code 1. Bytes that are
// not valid UTF-8 are dropped before the line is parsed.
//
// Usage:
//   snowstem-batch [-l LANG] [-v]
//
// Example:
//   echo '["running", "flies"]' | snowstem-batch -l english
//   ["run","fli"]

use std::io::{self, BufRead, Write};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (verbose, args) = snowstem_cli::parse_verbose(&args);
    let (language, args) =
        snowstem_cli::parse_language(&args).unwrap_or_else(|e| snowstem_cli::fatal(&e));

    if snowstem_cli::wants_help(&args) {
        println!("snowstem-batch: Stem JSON arrays of words.");
        println!();
        println!("Usage: snowstem-batch [-l LANG] [-v]");
        println!();
        println!("Reads one JSON array of strings per line from stdin and prints");
        println!("the array of stems for each line. Empty lines are skipped.");
        println!();
        println!("Options:");
        println!("  -l, --language LANG   Stemming language (default: $SNOWSTEM_LANGUAGE or english)");
        println!("  -v, --verbose         Log stemmer lifecycle to stderr");
        println!("  -h, --help            Print this help");
        return;
    }

    snowstem_cli::init_logging(verbose);

    let mut stemmer =
        snowstem_cli::load_stemmer(language.as_deref()).unwrap_or_else(|e| snowstem_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failed = false;

    for (number, line) in stdin.lock().split(b'\n').enumerate() {
        let line = match line {
            Ok(l) => snowstem_cli::decode_line(&l),
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                failed = true;
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match snowstem_cli::stem_json_line(&mut stemmer, &line) {
            Ok(json) => {
                if let Err(e) = writeln!(out, "{json}") {
                    snowstem_cli::fatal(&format!("error writing stdout: {e}"));
                }
            }
            Err(e) => {
                eprintln!("error: line {}: {e}", number + 1);
                failed = true;
            }
        }
    }

    if let Err(e) = out.flush() {
        snowstem_cli::fatal(&format!("error writing stdout: {e}"));
    }
    stemmer.release();

    if failed {
        process::exit(1);
    }
}
