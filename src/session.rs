use std::{
    borrow::Cow,
    io::{self, BufRead, Write},
};

use tracing::debug;

use crate::interpreter::{evaluator::core::evaluate, lower::lower, parser::core::parse};

/// How a stream of input lines is presented and filtered.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions<'a> {
    /// Written to the output before every line is read. Script input has none.
    pub prompt:     Option<&'a str>,
    /// Prints the syntax tree of each input before its result.
    pub show_tree:  bool,
    /// Skips lines that contain only whitespace instead of evaluating them.
    pub skip_blank: bool,
}

/// Parses, lowers, evaluates and prints one input.
///
/// The result goes to `out`. A parse error goes to `err` and is not returned:
/// only a failure to write ends the caller.
///
/// # Example
/// ```
/// use sammallus::session::run_line;
///
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// run_line("(+ 1 2)", false, &mut out, &mut err).unwrap();
/// run_line("(+ 1", false, &mut out, &mut err).unwrap();
///
/// assert_eq!(out, b"3\n");
/// assert!(!err.is_empty());
/// ```
pub fn run_line<W, E>(source: &str, show_tree: bool, out: &mut W, err: &mut E) -> io::Result<()>
    where W: Write,
          E: Write
{
    debug!(source, "input received");

    match parse(source) {
        Ok(tree) => {
            if show_tree {
                write!(out, "{tree}")?;
            }
            writeln!(out, "{}", evaluate(lower(&tree)))
        },
        Err(e) => writeln!(err, "{e}"),
    }
}

/// Runs every line of `input` through [`run_line`] until end of input.
///
/// Lines are read as raw bytes. Bytes that are not valid UTF-8 are replaced
/// with U+FFFD, which the lexer rejects, so such a line is reported as a parse
/// error and the session carries on.
///
/// # Errors
/// Returns the underlying error if reading `input` or writing either output
/// fails.
///
/// # Example
/// ```
/// use sammallus::session::{SessionOptions, run_lines};
///
/// let input: &[u8] = b"(+ 1 2)\n\xff\n(* 3 4)\n";
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// run_lines(input, &mut out, &mut err, SessionOptions::default()).unwrap();
///
/// assert_eq!(out, b"3\n12\n");
/// ```
pub fn run_lines<R, W, E>(mut input: R,
                          out: &mut W,
                          err: &mut E,
                          options: SessionOptions<'_>)
                          -> io::Result<()>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut buf = Vec::new();

    loop {
        if let Some(prompt) = options.prompt {
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            if options.prompt.is_some() {
                writeln!(out)?;
            }
            return Ok(());
        }

        let text = String::from_utf8_lossy(&buf);
        if matches!(text, Cow::Owned(_)) {
            debug!("input line is not valid UTF-8");
        }

        let line = text.trim_end_matches(['\n', '\r']);
        if options.skip_blank && line.trim().is_empty() {
            continue;
        }

        run_line(line, options.show_tree, out, err)?;
    }
}
