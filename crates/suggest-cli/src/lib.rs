// suggest-cli: shared utilities for the command-line driver.

use std::path::{Path, PathBuf};
use std::process;

use suggest_core::SuggestionList;
use suggest_engine::{ConfigError, DictionaryId, Lexicon, MemorySource, SuggestConfig};

/// Lexicon file looked up when no `--lexicon` is given.
const LEXICON_FILE: &str = "lexicon.json";

/// Options collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub lexicon_path: Option<String>,
    pub config_path: Option<String>,
    pub max_suggestions: Option<usize>,
    pub incognito: bool,
    pub words: Vec<String>,
}

/// Parse the driver's arguments (program name excluded).
pub fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--lexicon=") {
            options.lexicon_path = Some(val.to_string());
        } else if let Some(val) = arg.strip_prefix("--config=") {
            options.config_path = Some(val.to_string());
        } else if arg == "-l" || arg == "--lexicon" {
            options.lexicon_path = Some(value_for(arg, iter.next())?);
        } else if arg == "-c" || arg == "--config" {
            options.config_path = Some(value_for(arg, iter.next())?);
        } else if arg == "-n" || arg == "--max-suggestions" {
            let value = value_for(arg, iter.next())?;
            let max = value
                .parse()
                .map_err(|_| format!("invalid number for --max-suggestions: {value}"))?;
            options.max_suggestions = Some(max);
        } else if arg == "--incognito" {
            options.incognito = true;
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(format!("unknown option: {arg}"));
        } else {
            options.words.push(arg.clone());
        }
    }

    Ok(options)
}

fn value_for(flag: &str, value: Option<&String>) -> Result<String, String> {
    value
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value"))
}

/// Load the lexicon and wrap it in a [`MemorySource`].
///
/// Search order:
/// 1. `lexicon_path` argument (if provided)
/// 2. `SUGGEST_LEXICON` environment variable
/// 3. `lexicon.json` in the current working directory
///
/// When nothing is found an empty lexicon is used, so only the typed word
/// is ever offered.
pub fn load_source(lexicon_path: Option<&str>) -> Result<MemorySource, String> {
    let lexicon = match find_lexicon(lexicon_path) {
        Some(path) => {
            log::info!("loading lexicon from {}", path.display());
            read_json(&path, Lexicon::from_json)?
        }
        None => {
            if let Some(p) = lexicon_path {
                return Err(format!("lexicon file not found: {p}"));
            }
            log::warn!("no lexicon found; only the typed word will be suggested");
            Lexicon::default()
        }
    };
    let source = MemorySource::new(lexicon, DictionaryId(0));
    log::debug!("lexicon holds {} words", source.word_count());
    Ok(source)
}

fn find_lexicon(lexicon_path: Option<&str>) -> Option<PathBuf> {
    if let Some(p) = lexicon_path {
        let path = PathBuf::from(p);
        return path.is_file().then_some(path);
    }
    if let Ok(env_path) = std::env::var("SUGGEST_LEXICON") {
        let path = PathBuf::from(env_path);
        if path.is_file() {
            return Some(path);
        }
    }
    std::env::current_dir()
        .ok()
        .map(|cwd| cwd.join(LEXICON_FILE))
        .filter(|path| path.is_file())
}

/// Load the engine configuration, or the default when no path is given.
pub fn load_config(config_path: Option<&str>) -> Result<SuggestConfig, String> {
    match config_path {
        Some(p) => read_json(Path::new(p), SuggestConfig::from_json),
        None => Ok(SuggestConfig::default()),
    }
}

fn read_json<T>(
    path: &Path,
    parse: impl FnOnce(&str) -> Result<T, ConfigError>,
) -> Result<T, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    parse(&text).map_err(|e| format!("{}: {e}", path.display()))
}

/// Render a suggestion strip on one line.
///
/// The authoritative slot is marked with `*`, slots no source validated
/// (other than the typed word) with `?`.
pub fn format_strip(list: &SuggestionList) -> String {
    list.slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let mark = if list.authoritative_index() == Some(i) {
                "*"
            } else if i > 0 && !slot.validated {
                "?"
            } else {
                ""
            };
            format!("[{}{}]", slot.text, mark)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
