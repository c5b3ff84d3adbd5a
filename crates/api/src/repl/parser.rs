//! Line grammar of the interactive front-end
//!
//! Each input line is split on whitespace and parsed by a multicall `clap`
//! command, so the first word names the subcommand. Trailing words of a
//! value are joined back with single spaces.

use clap::{Parser, Subcommand};
use roster_domain::{AddUserField, EducationField, ExperienceField, ProfileField, Tab};

/// One parsed input line
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCommand,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum ReplCommand {
    /// Show the user directory
    Ls,
    /// Navigate to a path (`/` or `/user/<id>`)
    Open { route: String },
    /// Open the add-user panel
    Add,
    /// Set an add-user field (firstName, lastName, email, phone)
    Set {
        field: AddUserField,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Save the add-user panel
    Submit,
    /// Close the add-user panel
    Close,
    /// Delete a user after confirmation
    Rm { id: String },
    /// Switch profile tab (basic, education, experience)
    Tab { tab: Tab },
    /// Toggle edit mode (Edit / Cancel)
    Edit,
    /// Change a profile field while editing
    Field {
        field: ProfileField,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Education entries
    Edu {
        #[command(subcommand)]
        action: EducationAction,
    },
    /// Experience entries
    Exp {
        #[command(subcommand)]
        action: ExperienceAction,
    },
    /// Save profile changes
    Save,
    /// Return to the directory
    Back,
    /// Leave the program
    #[command(alias = "exit")]
    Quit,
}

impl ReplCommand {
    /// Stable name for logging; never carries user values.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ls => "ls",
            Self::Open { .. } => "open",
            Self::Add => "add",
            Self::Set { .. } => "set",
            Self::Submit => "submit",
            Self::Close => "close",
            Self::Rm { .. } => "rm",
            Self::Tab { .. } => "tab",
            Self::Edit => "edit",
            Self::Field { .. } => "field",
            Self::Edu { .. } => "edu",
            Self::Exp { .. } => "exp",
            Self::Save => "save",
            Self::Back => "back",
            Self::Quit => "quit",
        }
    }
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum EducationAction {
    /// Append a blank entry (enters edit mode)
    Add,
    /// Change one column of entry N (1-based)
    Set {
        index: usize,
        field: EducationField,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Remove entry N (1-based)
    Rm { index: usize },
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum ExperienceAction {
    /// Append a blank entry (enters edit mode)
    Add,
    /// Change one column of entry N (1-based)
    Set {
        index: usize,
        field: ExperienceField,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Remove entry N (1-based)
    Rm { index: usize },
}

/// Parse one line. `Ok(None)` for a blank line.
///
/// # Errors
/// The `clap` error (including requested help) for anything unparseable.
pub fn parse_line(line: &str) -> Result<Option<ReplCommand>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    ReplLine::try_parse_from(words).map(|parsed| Some(parsed.command))
}

/// Joined value words.
pub fn join_value(words: &[String]) -> String {
    words.join(" ")
}
