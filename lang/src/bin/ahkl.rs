use ahkl_lexer::toolchain;
use bstr::ByteSlice;
use toolchain::diagnostics::{
    diagnostic_emitter::console_diagnostic_consumer, CollectingDiagnosticConsumer,
    DiagnosticConsumer, DiagnosticLevel,
};
use toolchain::lexer::{Category, Lexer, LexerAhkl, StyledDocument};
use toolchain::source::SourceBuffer;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
    ahkl - style an AutoHotkey-L script

    USAGE:
        ahkl [--words CATEGORY=PATH]... [--quiet] [--styles] FILENAME

    OPTIONS:
        --words CATEGORY=PATH   Load a whitespace-separated word list from PATH. CATEGORY is an
                                index 0-8 or one of 'directives', 'commands', 'parameters',
                                'flow', 'functions', 'variables', 'keys', 'user1' or 'user2'.
                                May be repeated.
        --quiet                 If present, only diagnostics are printed.
        --styles                Print the style id of every character instead of the spans.

    ARGS:
        FILENAME                The path to the script to style, or supply '-' to take input
                                from stdin.

    Set RUST_LOG (for example RUST_LOG=ahkl_lexer=trace) to see the lexer's log.
";

#[derive(Debug, Eq, PartialEq)]
struct AhklArgs {
    words: Vec<(Category, std::path::PathBuf)>,
    quiet: bool,
    styles: bool,
    source_file: std::path::PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    let mut lexer = LexerAhkl::new();
    for (category, path) in &args.words {
        match SourceBuffer::new_from_file(path) {
            Ok(source) => {
                lexer.set_word_list(*category, &source.bytes().to_str_lossy());
            }
            Err(e) => {
                eprintln!("Error opening word list {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    let source = if args.source_file.as_os_str() == "-" {
        SourceBuffer::new_from_stdin().map_err(|e| e.to_string())
    } else {
        SourceBuffer::new_from_file(&args.source_file).map_err(|e| e.to_string())
    };
    let source = match source {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error opening source file {}: {}", args.source_file.display(), e);
            std::process::exit(1);
        }
    };

    let mut doc = StyledDocument::from_source(&source);
    let mut collected = CollectingDiagnosticConsumer::new();
    lexer.lex_document(&mut doc, &mut collected);

    if !args.quiet {
        if args.styles {
            let ids: Vec<String> = doc.styles().iter().map(|s| s.as_u8().to_string()).collect();
            println!("{}", ids.join(" "));
        } else {
            for span in doc.spans() {
                println!("{}:{} {:?} {:?}", span.line, span.column, span.style, span.string);
            }
        }
    }

    let errors = collected.diagnostics.iter().filter(|d| d.level == DiagnosticLevel::Error).count();
    let mut diags = console_diagnostic_consumer();
    for diag in collected.diagnostics {
        diags.handle_diagnostic(diag);
    }
    diags.flush();

    if errors > 0 {
        std::process::exit(1);
    }
}

fn parse_args() -> Result<AhklArgs, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let args = AhklArgs {
        words: pargs.values_from_fn("--words", parse_words)?,
        quiet: pargs.contains("--quiet"),
        styles: pargs.contains("--styles"),
        source_file: pargs.free_from_str()?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        eprintln!("Error: unused arguments left: {:?}.", remaining);
        std::process::exit(1);
    }
    Ok(args)
}

fn parse_words(s: &str) -> Result<(Category, std::path::PathBuf), String> {
    let (category, path) =
        s.split_once('=').ok_or_else(|| format!("expected CATEGORY=PATH, got '{}'", s))?;
    Ok((category.parse()?, path.into()))
}
