//! Line-driven command loop.
//!
//! # Invariants
//! - The loop starts in `AwaitingCommand` and ends in `Terminated`.
//! - Unknown input never changes which controller is active.
//! - End of input terminates the loop like `stop`, minus the farewell line.

use super::controller::Controller;
use super::{read_line, ConsoleResult};
use log::{debug, info};
use std::io::{BufRead, Write};

const MENU_PROMPT: &str = "Choose an option: 'add', 'print', or 'stop'.";
const EXIT_MESSAGE: &str = "Exiting the program.";
const INVALID_OPTION_MESSAGE: &str = "Invalid option. Please try again.";

/// Parsed user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Print,
    Stop,
    Invalid,
}

impl Command {
    /// Parses a raw input line; surrounding whitespace and case are ignored.
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "add" => Self::Add,
            "print" => Self::Print,
            "stop" => Self::Stop,
            _ => Self::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    AwaitingCommand,
    Dispatching(Command),
    Terminated,
}

/// Interactive loop bound to one active controller.
pub struct CommandLoop<'a> {
    active: &'a dyn Controller,
    state: LoopState,
}

impl<'a> CommandLoop<'a> {
    pub fn new(active: &'a dyn Controller) -> Self {
        Self {
            active,
            state: LoopState::AwaitingCommand,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Runs until `stop`, end of input, or the first error.
    ///
    /// Errors terminate the loop and are returned unchanged.
    pub fn run(&mut self, input: &mut dyn BufRead, output: &mut dyn Write) -> ConsoleResult<()> {
        info!("event=command_loop module=console status=start");
        while self.state != LoopState::Terminated {
            self.step(input, output)?;
        }
        info!("event=command_loop module=console status=ok");
        Ok(())
    }

    /// Advances the state machine by one transition.
    ///
    /// An error moves the loop to `Terminated` before it is returned.
    pub fn step(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> ConsoleResult<LoopState> {
        match self.transition(input, output) {
            Ok(next) => {
                self.state = next;
                Ok(next)
            }
            Err(err) => {
                self.state = LoopState::Terminated;
                Err(err)
            }
        }
    }

    fn transition(
        &self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> ConsoleResult<LoopState> {
        match self.state {
            LoopState::AwaitingCommand => {
                writeln!(output, "{MENU_PROMPT}")?;
                output.flush()?;
                match read_line(input)? {
                    Some(line) => Ok(LoopState::Dispatching(Command::parse(&line))),
                    None => {
                        debug!("event=command_loop module=console status=eof");
                        Ok(LoopState::Terminated)
                    }
                }
            }
            LoopState::Dispatching(command) => self.dispatch(command, input, output),
            LoopState::Terminated => Ok(LoopState::Terminated),
        }
    }

    fn dispatch(
        &self,
        command: Command,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> ConsoleResult<LoopState> {
        debug!("event=command_dispatch module=console command={command:?}");
        match command {
            Command::Add => self.active.add_item(input, output)?,
            Command::Print => self.active.print_items(output)?,
            Command::Stop => {
                writeln!(output, "{EXIT_MESSAGE}")?;
                return Ok(LoopState::Terminated);
            }
            Command::Invalid => writeln!(output, "{INVALID_OPTION_MESSAGE}")?,
        }
        Ok(LoopState::AwaitingCommand)
    }
}
