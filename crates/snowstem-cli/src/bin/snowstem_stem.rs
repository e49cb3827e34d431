// snowstem-stem: Stem a word list.
//
// Reads one word per line from stdin and writes one stem per line to
// stdout, in the same order. Words are stemmed in batches; empty lines
// produce empty stems so line numbers stay aligned. Bytes that are not
// valid UTF-8 are dropped from the word instead of stopping the run.
//
// Usage:
//   snowstem-stem [-l LANG] [-v]
//
// Options:
//   -l, --language LANG   Stemming language (default: $SNOWSTEM_LANGUAGE or english)
//   -v, --verbose         Log stemmer lifecycle to stderr
//   -h, --help            Print help

use std::io::{self, BufRead, Write};

use snowstem_cli::ByteLine;

/// Lines stemmed per batch call.
const BATCH_SIZE: usize = 1024;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (verbose, args) = snowstem_cli::parse_verbose(&args);
    let (language, args) =
        snowstem_cli::parse_language(&args).unwrap_or_else(|e| snowstem_cli::fatal(&e));

    if snowstem_cli::wants_help(&args) {
        println!("snowstem-stem: Stem a word list.");
        println!();
        println!("Usage: snowstem-stem [-l LANG] [-v]");
        println!();
        println!("Reads one word per line from stdin and prints one stem per line.");
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
    let mut batch: Vec<ByteLine> = Vec::with_capacity(BATCH_SIZE);
    let mut lines = stdin.lock().split(b'\n');

    loop {
        batch.clear();
        for line in lines.by_ref().take(BATCH_SIZE) {
            match line {
                Ok(l) => batch.push(ByteLine(l)),
                Err(e) => snowstem_cli::fatal_flush(&mut out, &format!("error reading stdin: {e}")),
            }
        }
        if batch.is_empty() {
            break;
        }

        let stems = stemmer
            .stem(&batch)
            .unwrap_or_else(|e| snowstem_cli::fatal_flush(&mut out, &e.to_string()));
        for stem in &stems {
            if let Err(e) = writeln!(out, "{stem}") {
                snowstem_cli::fatal(&format!("error writing stdout: {e}"));
            }
        }
    }

    if let Err(e) = out.flush() {
        snowstem_cli::fatal(&format!("error writing stdout: {e}"));
    }
    stemmer.release();
}
