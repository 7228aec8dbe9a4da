// suggest-type: Replay words key by key through the suggestion engine.
//
// For every word, prints the suggestion strip after each keystroke. The
// authoritative correction is marked with `*` and weak (unvalidated)
// suggestions with `?`.
//
// Usage:
//   suggest-type [-l LEXICON] [-c CONFIG] [OPTIONS] [WORD...]
//
// Options:
//   -l, --lexicon PATH        JSON lexicon (abbreviations, auto_text, words)
//   -c, --config PATH         JSON engine configuration
//   -n, --max-suggestions N   Maximum strip length, typed word included
//       --incognito           Do not record lookups
//   -h, --help                Print help

use std::io::{self, BufRead, Write};

use suggest_core::TypedWord;
use suggest_engine::{MemorySource, SuggestEngine};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if suggest_cli::wants_help(&args) {
        println!("suggest-type: Show suggestions as a word is typed.");
        println!();
        println!("Usage: suggest-type [-l LEXICON] [-c CONFIG] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, types each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!(
            "  -l, --lexicon PATH       JSON lexicon (default: $SUGGEST_LEXICON or ./lexicon.json)"
        );
        println!("  -c, --config PATH        JSON engine configuration");
        println!("  -n, --max-suggestions N  Maximum strip length, typed word included");
        println!("      --incognito          Do not record lookups");
        println!("  -h, --help               Print this help");
        return;
    }

    let options = suggest_cli::parse_args(&args).unwrap_or_else(|e| suggest_cli::fatal(&e));
    let source = suggest_cli::load_source(options.lexicon_path.as_deref())
        .unwrap_or_else(|e| suggest_cli::fatal(&e));
    let config = suggest_cli::load_config(options.config_path.as_deref())
        .unwrap_or_else(|e| suggest_cli::fatal(&e));

    let mut engine = SuggestEngine::with_config(source, config);
    if let Some(max) = options.max_suggestions {
        engine.set_max_suggestions(max);
    }
    engine.set_incognito_mode(options.incognito);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let type_word = |text: &str,
                     engine: &mut SuggestEngine<MemorySource>,
                     out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let mut word = TypedWord::new();
        for ch in text.chars() {
            word.push(ch, &[]);
            let list = engine.suggestions(&word);
            let strip = suggest_cli::format_strip(&list);
            let _ = writeln!(out, "{:<16} {strip}", word.typed_text());
        }
        match engine.last_valid_suggestion_index() {
            Some(i) => {
                let list = engine.suggestions(&word);
                let _ = writeln!(out, "=> {}", list.get(i).unwrap_or_default());
            }
            None => {
                let _ = writeln!(out, "=> {text}");
            }
        }
        let _ = writeln!(out);
    };

    if options.words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            type_word(word, &mut engine, &mut out);
        }
    } else {
        for word in &options.words {
            type_word(word, &mut engine, &mut out);
        }
    }
}
