// snowstem-cli: shared utilities for CLI tools.

use std::io::Write;
use std::process;

use serde_json::Value;
use snowstem::{BatchItem, SnowballStemmer, Text, TextCodec};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Language used when neither `-l` nor `SNOWSTEM_LANGUAGE` is given.
pub const DEFAULT_LANGUAGE: &str = "english";

/// Environment variable naming the default language.
pub const LANGUAGE_ENV: &str = "SNOWSTEM_LANGUAGE";

/// Pick the language to stem with.
///
/// Resolution order:
/// 1. `language` argument (if provided)
/// 2. `SNOWSTEM_LANGUAGE` environment variable (if non-empty)
/// 3. `english`
pub fn resolve_language(language: Option<&str>) -> String {
    resolve_language_from(language, std::env::var(LANGUAGE_ENV).ok())
}

fn resolve_language_from(language: Option<&str>, env: Option<String>) -> String {
    language
        .map(str::to_string)
        .or_else(|| env.filter(|v| !v.is_empty()))
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Resolve the language and create a stemmer for it.
pub fn load_stemmer(language: Option<&str>) -> Result<SnowballStemmer, String> {
    let language = resolve_language(language);
    snowstem::create_stemmer(&language).map_err(|e| {
        format!("{e}\navailable languages: {}", snowstem::list_languages().join(", "))
    })
}

/// Parse a `--language=LANG`, `--language LANG` or `-l LANG` argument.
///
/// Returns `(language, remaining_args)`.
pub fn parse_language(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut language = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--language=") {
            language = Some(val.to_string());
        } else if arg == "--language" || arg == "-l" {
            match iter.next() {
                Some(val) => language = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((language, remaining))
}

/// Strip `-v`/`--verbose` from the args.
///
/// Returns `(verbose, remaining_args)`.
pub fn parse_verbose(args: &[String]) -> (bool, Vec<String>) {
    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    let remaining = args.iter().filter(|a| *a != "-v" && *a != "--verbose").cloned().collect();
    (verbose, remaining)
}

/// Install a stderr log subscriber: WARN by default, DEBUG when verbose.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: could not install logger: {e}");
    }
}

/// A JSON array element. Only JSON strings count as text.
pub struct JsonItem<'a>(pub &'a Value);

impl BatchItem for JsonItem<'_> {
    fn as_text(&self) -> Option<Text<'_>> {
        self.0.as_str().map(Text::Str)
    }

    fn describe(&self) -> String {
        self.0.to_string()
    }
}

/// One raw stdin line, without its trailing newline.
///
/// Surrounding ASCII whitespace is ignored. Bytes that are not valid UTF-8
/// are dropped by the codec rather than failing the batch.
pub struct ByteLine(pub Vec<u8>);

impl BatchItem for ByteLine {
    fn as_text(&self) -> Option<Text<'_>> {
        Some(Text::Bytes(self.0.trim_ascii()))
    }

    fn describe(&self) -> String {
        format!("{:?}", String::from_utf8_lossy(&self.0))
    }
}

/// Decode a raw stdin line, dropping invalid UTF-8.
pub fn decode_line(line: &[u8]) -> String {
    TextCodec::new().decode(line)
}

/// Stem one line holding a JSON array of strings; returns the stems as a
/// JSON array.
pub fn stem_json_line(stemmer: &mut SnowballStemmer, line: &str) -> Result<String, String> {
    let value: Value = serde_json::from_str(line).map_err(|e| format!("invalid JSON: {e}"))?;
    let Value::Array(items) = &value else {
        return Err(format!("expected a JSON array, got {value}"));
    };
    let stems = stemmer.stem(items.iter().map(JsonItem)).map_err(|e| e.to_string())?;
    serde_json::to_string(&stems).map_err(|e| e.to_string())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Flush what was already written to `out`, then exit like [`fatal`].
pub fn fatal_flush<W: Write>(out: &mut W, msg: &str) -> ! {
    let _ = out.flush();
    fatal(msg);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_language_forms() {
        let (lang, rest) = parse_language(&args(&["-l", "german", "x"])).unwrap();
        assert_eq!(lang.as_deref(), Some("german"));
        assert_eq!(rest, ["x"]);

        let (lang, _) = parse_language(&args(&["--language", "french"])).unwrap();
        assert_eq!(lang.as_deref(), Some("french"));

        let (lang, _) = parse_language(&args(&["--language=dutch"])).unwrap();
        assert_eq!(lang.as_deref(), Some("dutch"));

        let (lang, rest) = parse_language(&args(&["x"])).unwrap();
        assert_eq!(lang, None);
        assert_eq!(rest, ["x"]);
    }

    #[test]
    fn parse_language_missing_value() {
        assert_eq!(parse_language(&args(&["-l"])).unwrap_err(), "-l requires a value");
    }

    #[test]
    fn parse_verbose_strips_flag() {
        let (verbose, rest) = parse_verbose(&args(&["-v", "-l", "en"]));
        assert!(verbose);
        assert_eq!(rest, ["-l", "en"]);
        assert!(!parse_verbose(&args(&["-l", "en"])).0);
    }

    #[test]
    fn language_resolution_order() {
        assert_eq!(resolve_language_from(Some("german"), Some("french".into())), "german");
        assert_eq!(resolve_language_from(None, Some("french".into())), "french");
        assert_eq!(resolve_language_from(None, Some(String::new())), DEFAULT_LANGUAGE);
        assert_eq!(resolve_language_from(None, None), DEFAULT_LANGUAGE);
    }

    #[test]
    fn load_stemmer_lists_languages_on_error() {
        let err = load_stemmer(Some("klingon")).unwrap_err();
        assert!(err.starts_with("no stemmer available for language 'klingon'"));
        assert!(err.contains("english"));
    }

    #[test]
    fn json_line_is_stemmed() {
        let mut stemmer = load_stemmer(Some("english")).unwrap();
        let out = stem_json_line(&mut stemmer, r#"["running", "flies", "happiness"]"#).unwrap();
        assert_eq!(out, r#"["run","fli","happi"]"#);
        assert_eq!(stem_json_line(&mut stemmer, "[]").unwrap(), "[]");
    }

    #[test]
    fn json_line_with_number_is_rejected() {
        let mut stemmer = load_stemmer(Some("english")).unwrap();
        let err = stem_json_line(&mut stemmer, r#"["ok", 42]"#).unwrap_err();
        assert_eq!(err, "unsupported datatype at index 1: 42 (only text allowed)");
        assert_eq!(stem_json_line(&mut stemmer, r#"["ok"]"#).unwrap(), r#"["ok"]"#);
    }

    #[test]
    fn byte_line_drops_invalid_utf8() {
        let mut stemmer = load_stemmer(Some("english")).unwrap();
        let lines = [
            ByteLine(b"running\r".to_vec()),
            ByteLine(b"caf\xe9s".to_vec()),
            ByteLine(Vec::new()),
        ];
        let stems = stemmer.stem(&lines).unwrap();
        assert_eq!(stems, ["run".to_string(), stemmer.stem_word("cafs"), String::new()]);
    }

    #[test]
    fn decode_line_is_lossy() {
        assert_eq!(decode_line(b"[\"caf\xe9s\"]"), r#"["cafs"]"#);
        assert_eq!(decode_line(b"\xff\xfe"), "");
    }

    #[test]
    fn json_line_must_be_array() {
        let mut stemmer = load_stemmer(Some("english")).unwrap();
        let err = stem_json_line(&mut stemmer, r#""running""#).unwrap_err();
        assert_eq!(err, r#"expected a JSON array, got "running""#);
        assert!(stem_json_line(&mut stemmer, "[").unwrap_err().starts_with("invalid JSON"));
    }
}
