use std::{
    fs::File,
    io::{self, BufReader},
};

use clap::Parser;
use sammallus::session::{SessionOptions, run_line, run_lines};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Prompt shown before each line in interactive mode.
const PROMPT: &str = "lispy> ";

/// sammallus is a small interpreter for S-expressions and quoted Q-expression
/// lists.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sammallus to read inputs from a file, one per line, instead of
    /// evaluating the contents argument directly.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the syntax tree of every input before its result.
    #[arg(short, long)]
    tree: bool,

    /// An expression to evaluate, or a file path with `--file`. Without it an
    /// interactive prompt is started.
    contents: Option<String>,
}

/// Installs a stderr log subscriber when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                         .with_target(true)
                                                         .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn script(path: &str, show_tree: bool) -> io::Result<()> {
    let file = File::open(path).unwrap_or_else(|_| {
                                   eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                   std::process::exit(1);
                               });

    run_lines(BufReader::new(file),
              &mut io::stdout(),
              &mut io::stderr(),
              SessionOptions { prompt: None,
                               show_tree,
                               skip_blank: true })
}

fn repl(show_tree: bool) -> io::Result<()> {
    println!("Sammallus Version {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+c to Exit\n");

    run_lines(io::stdin().lock(),
              &mut io::stdout(),
              &mut io::stderr(),
              SessionOptions { prompt: Some(PROMPT),
                               show_tree,
                               skip_blank: false })
}

fn main() {
    init_tracing();

    let args = Args::parse();

    let result = match args.contents {
        Some(path) if args.file => script(&path, args.tree),
        Some(source) => run_line(&source, args.tree, &mut io::stdout(), &mut io::stderr()),
        None => repl(args.tree),
    };

    if let Err(e) = result {
        eprintln!("Failed to read input: {e}");
        std::process::exit(1);
    }
}
