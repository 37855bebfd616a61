//! Interactive prompts.
//!
//! The importer talks to the operator through the [`Prompter`] trait so the
//! whole session can be scripted in tests. Two implementations:
//!
//! | Prompter | Used when |
//! |---|---|
//! | [`InquirePrompter`] | stdin is a terminal: `inquire` text and number prompts |
//! | [`LinePrompter`] | piped stdin, and in-memory `Cursor` scripts in tests |
//!
//! Both show menus as numbered lists and take a 1-based answer, reprompting
//! until it is in range.

use inquire::validator::{ErrorMessage, Validation};
use inquire::{CustomType, CustomUserError, InquireError, Text};
use std::io::{self, BufRead, Write};

/// One question, one answer.
pub trait Prompter {
    /// Print `question` and read one line of input, trimmed.
    ///
    /// Closed input is reported as [`io::ErrorKind::UnexpectedEof`].
    fn ask(&mut self, question: &str) -> io::Result<String>;

    /// Print an informational line.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Show a numbered menu and block until a valid 1-based choice is entered.
    ///
    /// Returns the 0-based index of the chosen option.
    fn choose<S: AsRef<str>>(&mut self, title: &str, options: &[S]) -> io::Result<usize> {
        choose_by_line(self, title, options)
    }
}

// =========================================================================
// Line prompter
// =========================================================================

/// [`Prompter`] over a reader and a writer.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter, returning the writer (used by tests to inspect the transcript).
    pub fn into_output(self) -> W {
        self.output
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter over the process stdin/stdout, for non-terminal input.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }
}

/// Print the numbered option list shared by both prompters.
fn list_options<P, S>(prompter: &mut P, title: &str, options: &[S]) -> io::Result<()>
where
    P: Prompter + ?Sized,
    S: AsRef<str>,
{
    prompter.say(title)?;
    for (i, option) in options.iter().enumerate() {
        prompter.say(&format!("  {}. {}", i + 1, option.as_ref()))?;
    }
    Ok(())
}

/// Parse a 1-based menu answer into a 0-based index.
fn parse_choice(answer: &str, len: usize) -> Option<usize> {
    match answer.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}

fn out_of_range_message(len: usize) -> String {
    format!("enter a number between 1 and {len}.")
}

/// Numbered menu over plain `ask`/`say`.
///
/// Invalid input (non-numeric, zero, out of range) reprompts indefinitely.
fn choose_by_line<P, S>(prompter: &mut P, title: &str, options: &[S]) -> io::Result<usize>
where
    P: Prompter + ?Sized,
    S: AsRef<str>,
{
    list_options(prompter, title, options)?;

    let question = format!("Choose [1-{}]: ", options.len());
    loop {
        let answer = prompter.ask(&question)?;
        match parse_choice(&answer, options.len()) {
            Some(index) => return Ok(index),
            None => prompter.say(&format!(
                "Invalid choice {answer:?}, {}",
                out_of_range_message(options.len())
            ))?,
        }
    }
}

// =========================================================================
// Terminal prompter
// =========================================================================

/// [`Prompter`] for an interactive terminal, built on `inquire`.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl InquirePrompter {
    pub fn new() -> Self {
        Self
    }
}

/// Validate a 1-based menu answer against the number of options.
fn menu_validation(answer: usize, len: usize) -> Validation {
    if (1..=len).contains(&answer) {
        Validation::Valid
    } else {
        Validation::Invalid(ErrorMessage::Custom(out_of_range_message(len)))
    }
}

/// Map prompt failures onto `io` errors. Esc and Ctrl-C end the session like closed input.
fn inquire_error(err: InquireError) -> io::Error {
    match err {
        InquireError::IO(e) => e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            io::Error::new(io::ErrorKind::UnexpectedEof, "prompt cancelled")
        }
        other => io::Error::other(other.to_string()),
    }
}

impl Prompter for InquirePrompter {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        Text::new(question.trim_end())
            .prompt()
            .map(|answer| answer.trim().to_string())
            .map_err(inquire_error)
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout(), "{line}")
    }

    fn choose<S: AsRef<str>>(&mut self, title: &str, options: &[S]) -> io::Result<usize> {
        list_options(self, title, options)?;

        let len = options.len();
        let question = format!("Choose [1-{len}]:");
        let answer = CustomType::<usize>::new(&question)
            .with_error_message("Please type a number.")
            .with_validator(move |n: &usize| -> Result<Validation, CustomUserError> {
                Ok(menu_validation(*n, len))
            })
            .prompt()
            .map_err(inquire_error)?;
        Ok(answer - 1)
    }
}
