//! Interactive line front-end
//!
//! [`Shell`] holds the current page and turns one input line into plain-text
//! output. [`run`] drives it from the terminal.

pub mod confirm;
pub mod parser;
pub mod render;

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Instant;

use roster_core::{
    AddUserFlow, Confirmation, DeleteOutcome, ListViewController, Notice, ProfileEditController,
    ProfileSession,
};
use roster_domain::{Result, RosterError};
use tracing::debug;

pub use confirm::StdinConfirmation;
use parser::{join_value, parse_line, EducationAction, ExperienceAction, ReplCommand};

use crate::context::AppContext;
use crate::routing::Route;
use crate::utils::logging::{error_label, log_command_execution};

/// The page currently on screen
pub enum Screen {
    Directory(ListViewController),
    Profile(ProfileEditController),
}

/// Result of handling one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub output: String,
    pub quit: bool,
}

impl Reply {
    fn show(output: String) -> Self {
        Self { output, quit: false }
    }
}

pub struct Shell {
    ctx: Arc<AppContext>,
    route: Route,
    screen: Screen,
}

impl Shell {
    /// Start on the directory page, loaded.
    pub async fn open(ctx: Arc<AppContext>) -> Self {
        let mut list = ctx.list_view();
        list.load().await;
        Self { ctx, route: Route::Directory, screen: Screen::Directory(list) }
    }

    pub const fn route(&self) -> &Route {
        &self.route
    }

    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn prompt(&self) -> String {
        format!("{}> ", self.route.path())
    }

    pub fn render(&self) -> String {
        match &self.screen {
            Screen::Directory(list) => render::directory(list),
            Screen::Profile(profile) => render::profile(profile),
        }
    }

    /// Handle one input line.
    pub async fn handle(&mut self, line: &str, confirm: &dyn Confirmation) -> Reply {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Reply::show(String::new()),
            Err(err) => return Reply::show(err.render().to_string()),
        };
        if command == ReplCommand::Quit {
            return Reply { output: String::new(), quit: true };
        }

        debug!(route = %self.route, ?command, "repl command");
        let name = command.name();
        let started = Instant::now();
        let result = self.dispatch(command, confirm).await;
        log_command_execution(name, started.elapsed(), result.as_ref().err().map(error_label));

        let mut output = match result {
            Ok(output) => output,
            Err(err) => format!("error: {err}\n"),
        };
        if let Some(notice) = self.take_notice() {
            let marker = if notice.is_warning() { "! " } else { "" };
            output = format!("{marker}{notice}\n{output}");
        }
        Reply::show(output)
    }

    async fn dispatch(
        &mut self,
        command: ReplCommand,
        confirm: &dyn Confirmation,
    ) -> Result<String> {
        match command {
            ReplCommand::Ls | ReplCommand::Back => return self.navigate(Route::Directory).await,
            ReplCommand::Open { route } => return self.navigate(Route::parse(&route)?).await,
            ReplCommand::Quit => return Ok(String::new()),
            ReplCommand::Add => self.list_mut("add")?.open_add_panel(),
            ReplCommand::Set { field, value } => {
                self.panel_mut("set")?.change_field(field, join_value(&value));
            }
            ReplCommand::Submit => {
                let list = self.list_mut("submit")?;
                if list.add_panel().is_none() {
                    return Err(panel_closed("submit"));
                }
                match list.submit_add_user().await {
                    Ok(record) => {
                        return Ok(format!("Added {}\n{}", record.display_name(), self.render()));
                    }
                    // The panel shows the inline error.
                    Err(RosterError::Validation(_)) => {}
                    Err(err) => return Err(err),
                }
            }
            ReplCommand::Close => self.list_mut("close")?.close_add_panel(),
            ReplCommand::Rm { id } => {
                let message = match self.list_mut("rm")?.delete(&id, confirm)? {
                    DeleteOutcome::Deleted => "Deleted".to_string(),
                    DeleteOutcome::Declined => "Not deleted".to_string(),
                    DeleteOutcome::NotFound => format!("No user with id {id}"),
                };
                return Ok(format!("{message}\n{}", self.render()));
            }
            ReplCommand::Tab { tab } => self.session_mut("tab")?.select_tab(tab),
            ReplCommand::Edit => {
                self.session_mut("edit")?.toggle_edit();
            }
            ReplCommand::Field { field, value } => {
                self.session_mut("field")?.change_field(field, join_value(&value))?;
            }
            ReplCommand::Edu { action } => {
                let session = self.session_mut("edu")?;
                match action {
                    EducationAction::Add => {
                        session.add_education();
                    }
                    EducationAction::Set { index, field, value } => {
                        session.update_education(zero_based(index)?, field, join_value(&value))?;
                    }
                    EducationAction::Rm { index } => {
                        session.remove_education(zero_based(index)?)?;
                    }
                }
            }
            ReplCommand::Exp { action } => {
                let session = self.session_mut("exp")?;
                match action {
                    ExperienceAction::Add => {
                        session.add_experience();
                    }
                    ExperienceAction::Set { index, field, value } => {
                        session.update_experience(zero_based(index)?, field, join_value(&value))?;
                    }
                    ExperienceAction::Rm { index } => {
                        session.remove_experience(zero_based(index)?)?;
                    }
                }
            }
            ReplCommand::Save => {
                self.profile_mut("save")?.save()?;
            }
        }
        Ok(self.render())
    }

    async fn navigate(&mut self, route: Route) -> Result<String> {
        self.screen = match &route {
            Route::Directory => {
                let mut list = self.ctx.list_view();
                list.load().await;
                Screen::Directory(list)
            }
            Route::Profile(id) => {
                let mut profile = self.ctx.profile_view();
                profile.load(id).await;
                Screen::Profile(profile)
            }
        };
        self.route = route;
        Ok(self.render())
    }

    fn take_notice(&mut self) -> Option<Notice> {
        match &mut self.screen {
            Screen::Directory(list) => list.take_notice(),
            Screen::Profile(profile) => profile.take_notice(),
        }
    }

    fn list_mut(&mut self, command: &str) -> Result<&mut ListViewController> {
        match &mut self.screen {
            Screen::Directory(list) => Ok(list),
            Screen::Profile(_) => Err(RosterError::InvalidInput(format!(
                "`{command}` is only available on the directory page"
            ))),
        }
    }

    fn panel_mut(&mut self, command: &str) -> Result<&mut AddUserFlow> {
        self.list_mut(command)?.add_panel_mut().ok_or_else(|| panel_closed(command))
    }

    fn profile_mut(&mut self, command: &str) -> Result<&mut ProfileEditController> {
        match &mut self.screen {
            Screen::Profile(profile) => Ok(profile),
            Screen::Directory(_) => Err(RosterError::InvalidInput(format!(
                "`{command}` is only available on a profile page"
            ))),
        }
    }

    fn session_mut(&mut self, command: &str) -> Result<&mut ProfileSession> {
        self.profile_mut(command)?.session_mut()
    }
}

fn panel_closed(command: &str) -> RosterError {
    RosterError::InvalidInput(format!("`{command}` needs the add-user panel; type `add` first"))
}

/// Entries are numbered from 1 on screen.
fn zero_based(index: usize) -> Result<usize> {
    index
        .checked_sub(1)
        .ok_or_else(|| RosterError::InvalidInput("entries are numbered from 1".into()))
}

/// One line from `input`; `None` at end of input.
fn read_line(mut input: impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    Ok((read > 0).then_some(line))
}

/// Read commands from stdin until `quit` or end of input.
///
/// Needs the multi-threaded runtime; delete confirmations block in place.
///
/// # Errors
/// Returns an error if the terminal cannot be read or written.
pub async fn run(ctx: Arc<AppContext>) -> anyhow::Result<()> {
    let confirm = StdinConfirmation;
    let mut shell = Shell::open(ctx).await;
    let mut stdout = io::stdout();

    write!(stdout, "{}", shell.render())?;
    loop {
        write!(stdout, "{}", shell.prompt())?;
        stdout.flush()?;

        let next = tokio::task::spawn_blocking(|| read_line(io::stdin().lock()));
        let Some(line) = next.await?? else {
            writeln!(stdout)?;
            break;
        };

        let reply = shell.handle(&line, &confirm).await;
        write!(stdout, "{}", reply.output)?;
        if reply.quit {
            break;
        }
    }
    Ok(())
}
