//! Command-line interface for hilite
//! This binary turns source files into per-line token JSON and prints normalized themes.
//!
//! Usage:
//!   hilite tokenize `<path>` [--lexer `<name>`] [--stdout]  - Write `<path>.tokens.json` (or print it)
//!   hilite theme `<name>`                                 - Print a normalized theme as JSON
//!   hilite list-themes                                  - List available themes
//!   hilite list-lexers                                  - List available lexers
//!
//! Global options: `--config <file>` layers a TOML file over the defaults (and over
//! `./hilite.toml` when present); `-v` / `-vv` raise the log level.

use clap::{Arg, ArgAction, ArgMatches, Command};
use hilite::highlight::config::{HighlightConfig, Loader};
use hilite::highlight::error::HighlightError;
use hilite::highlight::pipeline::Highlighter;
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "hilite.toml";

fn main() {
    let matches = Command::new("hilite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Line-oriented syntax tokenizer and theme extractor")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("tokenize")
                .about("Split a source file into lines of tokens")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("lexer")
                        .long("lexer")
                        .short('l')
                        .help("Lexer name or alias (default: detect from filename and content)"),
                )
                .arg(
                    Arg::new("stdout")
                        .long("stdout")
                        .help("Print the tokens instead of writing <path>.tokens.json")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("theme")
                .about("Print a normalized theme as JSON")
                .arg(
                    Arg::new("name")
                        .help("Theme name (e.g., 'monokai')")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-themes").about("List available themes"))
        .subcommand(Command::new("list-lexers").about("List available lexers"))
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let highlighter = build_highlighter(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match matches.subcommand() {
        Some(("tokenize", tokenize_matches)) => {
            let path = tokenize_matches.get_one::<String>("path").unwrap();
            let lexer = tokenize_matches.get_one::<String>("lexer");
            let to_stdout = tokenize_matches.get_flag("stdout");
            handle_tokenize_command(&highlighter, path, lexer.map(String::as_str), to_stdout);
        }
        Some(("theme", theme_matches)) => {
            let name = theme_matches.get_one::<String>("name").unwrap();
            handle_theme_command(&highlighter, name);
        }
        Some(("list-themes", _)) => {
            handle_list_themes_command(&highlighter);
        }
        Some(("list-lexers", _)) => {
            handle_list_lexers_command(&highlighter);
        }
        _ => unreachable!(),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<HighlightConfig, HighlightError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    Ok(loader.build()?)
}

fn build_highlighter(matches: &ArgMatches) -> Result<Highlighter, HighlightError> {
    Highlighter::new(load_config(matches)?)
}

/// Handle the tokenize command
fn handle_tokenize_command(
    highlighter: &Highlighter,
    path: &str,
    lexer: Option<&str>,
    to_stdout: bool,
) {
    if to_stdout {
        let json = highlighter
            .load_and_tokenize(path, lexer)
            .and_then(|lines| highlighter.to_json(&lines))
            .unwrap_or_else(|e| exit_with(e, highlighter));
        println!("{}", json);
        return;
    }

    let output = highlighter
        .tokenize_to_file(path, lexer)
        .unwrap_or_else(|e| exit_with(e, highlighter));
    println!("{}", output.display());
}

/// Handle the theme command
fn handle_theme_command(highlighter: &Highlighter, name: &str) {
    let json = highlighter
        .theme(name)
        .and_then(|theme| highlighter.to_json(&theme))
        .unwrap_or_else(|e| exit_with(e, highlighter));
    println!("{}", json);
}

/// Handle the list-themes command
fn handle_list_themes_command(highlighter: &Highlighter) {
    println!("Available themes:\n");
    for name in highlighter.themes().list_themes() {
        println!("  {}", name);
    }
}

/// Handle the list-lexers command
fn handle_list_lexers_command(highlighter: &Highlighter) {
    println!("Available lexers:\n");
    for name in highlighter.lexers().list_lexers() {
        if let Ok(lexer) = highlighter.lexers().get(&name) {
            println!("  {}", name);
            if !lexer.aliases().is_empty() {
                println!("    aliases: {}", lexer.aliases().join(", "));
            }
            if !lexer.filenames().is_empty() {
                println!("    files:   {}", lexer.filenames().join(", "));
            }
            println!();
        }
    }
}

fn exit_with(error: HighlightError, highlighter: &Highlighter) -> ! {
    eprintln!("Error: {}", error);
    if let HighlightError::NoMatchingLexer { .. } = error {
        eprintln!("\nAvailable lexers:");
        for name in highlighter.lexers().list_lexers() {
            eprintln!("  {}", name);
        }
    }
    std::process::exit(1);
}
