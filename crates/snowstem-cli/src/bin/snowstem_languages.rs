// snowstem-languages: List the languages snowstem can stem.
//
// Usage:
//   snowstem-languages
//
// Prints one canonical language identifier per line, sorted. ISO codes
// such as "en" or "deu" are accepted by the other tools but not listed.

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if snowstem_cli::wants_help(&args) {
        println!("snowstem-languages: List supported stemming languages.");
        println!();
        println!("Usage: snowstem-languages");
        return;
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for language in snowstem::list_languages() {
        if let Err(e) = writeln!(out, "{language}") {
            snowstem_cli::fatal(&format!("error writing stdout: {e}"));
        }
    }
    if let Err(e) = out.flush() {
        snowstem_cli::fatal(&format!("error writing stdout: {e}"));
    }
}
