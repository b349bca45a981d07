//! Shell session
//!
//! Reads command lines, executes them through the dispatcher, and writes
//! one response line per command. Rejected commands, registry failures and
//! undecodable lines are reported and skipped; only `exit`, end of input, or
//! a failing reader or writer ends the session.

use crate::config::ShellConfig;
use crate::error::{CommandError, ShellError};
use crate::registry::RbacRegistry;
use crate::shell::command::COMMANDS;
use crate::shell::dispatcher::{Dispatcher, Response};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Whether the session keeps reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub commands: u64,
    pub rejected: u64,
    pub failed: u64,
}

/// An RBAC shell session owning its registry
pub struct Shell {
    dispatcher: Dispatcher,
    config: ShellConfig,
    stats: SessionStats,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            config,
            stats: SessionStats::default(),
        }
    }

    pub fn registry(&self) -> &RbacRegistry {
        self.dispatcher.registry()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Write the title and the list of available commands
    pub fn write_banner<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "RBAC CLI Application")?;
        writeln!(out, "Type 'exit' to quit")?;
        writeln!(out, "Available commands:")?;
        for command in COMMANDS {
            writeln!(out, "  {}", command.usage)?;
        }
        Ok(())
    }

    /// Execute one line and write its response
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> std::io::Result<Flow> {
        match self.dispatcher.execute(line) {
            Ok(Response::Empty) => {}
            Ok(Response::Exit) => return Ok(Flow::Exit),
            Ok(response) => {
                self.stats.commands += 1;
                writeln!(out, "{response}")?;
            }
            Err(CommandError::Invalid) => {
                self.stats.rejected += 1;
                writeln!(out, "{}", CommandError::Invalid)?;
            }
            Err(CommandError::Registry(e)) => {
                self.stats.commands += 1;
                if !e.is_benign() {
                    self.stats.failed += 1;
                }
                writeln!(out, "{e}")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Run over a line source such as a script file or piped stdin
    ///
    /// A line that is not valid UTF-8 is reported and skipped.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut out: W,
    ) -> Result<(), ShellError> {
        info!("Starting RBAC shell session");
        if self.config.banner {
            self.write_banner(&mut out)?;
        }

        let mut buf = Vec::new();
        let mut line_no: u64 = 0;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let flow = match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_line(line, &mut out)?,
                Err(e) => {
                    warn!(line = line_no, error = %e, "Skipped undecodable line");
                    self.stats.failed += 1;
                    writeln!(out, "Error: line {line_no} is not valid UTF-8")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }

        out.flush()?;
        self.finish();
        Ok(())
    }

    /// Run against the terminal with line editing and history
    pub fn run_interactive(&mut self) -> Result<(), ShellError> {
        info!("Starting interactive RBAC shell session");
        let editor_config = rustyline::Config::builder()
            .max_history_size(self.config.history_size)?
            .auto_add_history(true)
            .build();
        let mut editor = DefaultEditor::with_config(editor_config)?;
        let mut out = std::io::stdout().lock();

        if self.config.banner {
            self.write_banner(&mut out)?;
        }

        loop {
            match editor.readline(&self.config.prompt) {
                Ok(line) => {
                    if self.handle_line(&line, &mut out)? == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    writeln!(out, "\nExiting...")?;
                    break;
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        out.flush()?;
        self.finish();
        Ok(())
    }

    fn finish(&self) {
        debug!(
            resources = self.registry().resources().count(),
            roles = self.registry().roles().count(),
            users = self.registry().users().count(),
            "Final registry size"
        );
        info!(
            commands = self.stats.commands,
            rejected = self.stats.rejected,
            failed = self.stats.failed,
            "RBAC shell session ended"
        );
    }
}
