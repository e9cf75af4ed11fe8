use crate::core::controller::RowController;
use crate::domain::model::RowId;
use crate::domain::ports::ResultSink;
use crate::utils::error::{GwaError, Result};
use crate::utils::validation::{parse_grade, parse_units, RowConstraints};
use std::io::{BufRead, Write};

pub const HELP: &str = "\
commands:
  add                          append a row with default values
  remove <id>                  remove a row (the first row stays)
  clear                        remove every row but the first
  set <id> grade|units|code <value>
  list                         show the rows
  calc                         compute and write the results
  help                         show this text
  quit                         leave the shell";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Add,
    Remove(RowId),
    Clear,
    Set {
        id: RowId,
        field: RowField,
        value: String,
    },
    List,
    Calc,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Grade,
    Units,
    Code,
}

impl ShellCommand {
    /// Parses one input line. Blank lines and `#` comments give `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let unknown = || GwaError::UnknownCommand {
            input: line.to_string(),
        };

        let mut parts = line.splitn(4, char::is_whitespace).filter(|p| !p.is_empty());
        let command = match parts.next().unwrap_or_default() {
            "add" => ShellCommand::Add,
            "remove" | "rm" => ShellCommand::Remove(parse_id(parts.next().ok_or_else(unknown)?)?),
            "clear" => ShellCommand::Clear,
            "list" | "ls" => ShellCommand::List,
            "calc" | "calculate" => ShellCommand::Calc,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            "set" => {
                let id = parse_id(parts.next().ok_or_else(unknown)?)?;
                let field = match parts.next() {
                    Some("grade") => RowField::Grade,
                    Some("units") => RowField::Units,
                    Some("code") | Some("sub-code") => RowField::Code,
                    _ => return Err(unknown()),
                };
                let value = parts.next().unwrap_or_default().trim().to_string();
                ShellCommand::Set { id, field, value }
            }
            _ => return Err(unknown()),
        };
        Ok(Some(command))
    }
}

fn parse_id(text: &str) -> Result<RowId> {
    text.parse::<u64>()
        .map(RowId)
        .map_err(|_| GwaError::InvalidNumber {
            field: "row id".to_string(),
            input: text.to_string(),
        })
}

/// Line-oriented front-end over a [`RowController`].
pub struct Session<S: ResultSink> {
    controller: RowController<S>,
    constraints: RowConstraints,
}

impl<S: ResultSink> Session<S> {
    pub fn new(controller: RowController<S>, constraints: RowConstraints) -> Self {
        Self {
            controller,
            constraints,
        }
    }

    pub fn controller(&self) -> &RowController<S> {
        &self.controller
    }

    /// Runs commands until `quit` or end of input. Command errors are
    /// reported on `out` and do not stop the session.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            let command = match ShellCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(out, "error: {}", e)?;
                    continue;
                }
            };
            if command == ShellCommand::Quit {
                break;
            }
            if let Err(e) = self.execute(command, &mut out) {
                tracing::debug!(error = %e, "shell command failed");
                if matches!(e, GwaError::IoError(_)) {
                    return Err(e);
                }
                writeln!(out, "error: {}", e)?;
            }
        }
        Ok(())
    }

    pub fn execute<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> Result<()> {
        match command {
            ShellCommand::Add => {
                let id = self.controller.add_row();
                writeln!(out, "added row {}", id)?;
            }
            ShellCommand::Remove(id) => {
                self.controller.remove_row(id)?;
                writeln!(out, "removed row {}", id)?;
            }
            ShellCommand::Clear => {
                self.controller.clear();
                writeln!(out, "cleared, 1 row left")?;
            }
            ShellCommand::Set { id, field, value } => self.set(id, field, &value)?,
            ShellCommand::List => self.list(out)?,
            ShellCommand::Calc => {
                self.controller.calculate()?;
            }
            ShellCommand::Help => writeln!(out, "{}", HELP)?,
            ShellCommand::Quit => {}
        }
        Ok(())
    }

    fn set(&mut self, id: RowId, field: RowField, value: &str) -> Result<()> {
        let index = self.controller.index_of(id)?;
        let mut row = self.controller.entries()[index].row.clone();
        match field {
            RowField::Grade => row.grade = parse_grade(value)?,
            RowField::Units => row.units = parse_units(value)?,
            RowField::Code => row.subject_code = value.to_string(),
        }
        self.constraints.check_row(index, &row)?;

        self.controller.set_subject_code(id, row.subject_code)?;
        self.controller.set_grade(id, row.grade)?;
        self.controller.set_units(id, row.units)
    }

    fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{:>4}  {:<12}{:>6}{:>7}", "id", "sub-code", "grade", "units")?;
        for entry in self.controller.entries() {
            writeln!(
                out,
                "{:>4}  {:<12}{:>6}{:>7}",
                entry.id.to_string(),
                entry.row.subject_code,
                format!("{:.2}", entry.row.grade),
                entry.row.units
            )?;
        }
        Ok(())
    }
}
