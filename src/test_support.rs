//! Fakes shared by the unit tests.
use std::cell::RefCell;
use std::collections::VecDeque;

use tracing::Level;

use crate::error::{PromptError, RunError};
use crate::prompt::Console;
use crate::report::Reporter;
use crate::ssh::runner::{CommandOutput, CommandRunner, Invocation};

/// Keeps every reported line in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: RefCell<Vec<(Level, String)>>,
}

impl MemoryReporter {
    fn at(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn infos(&self) -> Vec<String> { self.at(Level::INFO) }
    pub fn warnings(&self) -> Vec<String> { self.at(Level::WARN) }
    pub fn errors(&self) -> Vec<String> { self.at(Level::ERROR) }

    fn push(&self, level: Level, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}

impl Reporter for MemoryReporter {
    fn debug(&self, message: &str) { self.push(Level::DEBUG, message) }
    fn info(&self, message: &str) { self.push(Level::INFO, message) }
    fn warn(&self, message: &str) { self.push(Level::WARN, message) }
    fn error(&self, message: &str) { self.push(Level::ERROR, message) }
}

/// Zero exit status with the given stdout.
pub fn ok(stdout: &str) -> Result<CommandOutput, RunError> {
    Ok(CommandOutput { code: Some(0), stdout: stdout.to_string(), stderr: String::new() })
}

/// Non-zero exit status with the given stderr.
pub fn failed(stderr: &str) -> Result<CommandOutput, RunError> {
    Ok(CommandOutput { code: Some(1), stdout: String::new(), stderr: stderr.to_string() })
}

/// Answers invocations from a queue and records them.
/// Panics if more commands run than were scripted.
pub struct ScriptedRunner {
    responses: RefCell<VecDeque<Result<CommandOutput, RunError>>>,
    calls: RefCell<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new(responses: Vec<Result<CommandOutput, RunError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput, RunError> {
        self.calls.borrow_mut().push(invocation.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected command: {}", invocation.command_line()))
    }
}

/// Replays canned answers; cancels once they run out.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
    pub shown: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }
}

impl Console for ScriptedConsole {
    fn ask(&mut self, message: &str) -> Result<String, PromptError> {
        self.asked.push(message.to_string());
        self.answers.pop_front().ok_or(PromptError::Cancelled)
    }

    fn show(&mut self, line: &str) {
        self.shown.push(line.to_string());
    }
}
