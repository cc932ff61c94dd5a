use std::io::{self, BufRead, Write};

use inquire::{InquireError, Text};

use crate::error::PromptError;

/// Line-based interaction used by the setup/edit flows.
pub trait Console {
    /// Ask one question and return the raw answer.
    fn ask(&mut self, message: &str) -> Result<String, PromptError>;
    fn show(&mut self, line: &str);
}

/// Terminal console backed by `inquire`.
///
/// When stdin is not a terminal (piped answers), questions are printed and
/// answers read line by line instead.
#[derive(Debug, Default)]
pub struct InquireConsole;

impl Console for InquireConsole {
    fn ask(&mut self, message: &str) -> Result<String, PromptError> {
        match Text::new(message).prompt() {
            Ok(answer) => Ok(answer),
            Err(InquireError::NotTTY) => read_answer(message, &mut io::stdin().lock(), &mut io::stdout()),
            Err(e) => Err(e.into()),
        }
    }

    fn show(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Print `message`, read one line. End of input counts as cancellation.
fn read_answer(
    message: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<String, PromptError> {
    write!(output, "{message} ").and_then(|_| output.flush())
        .map_err(|e| PromptError::Io(e.to_string()))?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Err(PromptError::Cancelled),
        Ok(_) => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(e) => Err(PromptError::Io(e.to_string())),
    }
}
