use std::{
    fmt::Write as _,
    io::{Write as _, stdout},
};

use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader, stdin};

use crate::{BrowserSession, LoadStatus, StdResult};

const NO_DESCRIPTION_PLACEHOLDER: &str = "No description provided";
const HELP_LINE: &str = "[p] previous  [n] next  [/term] search  [q] quit";

/// A terminal adapter over a [BrowserSession]: renders the current
/// page as text and drives the session from line-based user input.
///
/// Rendering is a pure function of the session so it can be tested
/// without any I/O; the input loop is the only side-effecting part.
pub struct TerminalView {
    /// The account name shown in the header.
    username: String,
}

impl TerminalView {
    /// Creates a new `TerminalView` instance.
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
        }
    }

    /// Renders the session state as a text screen.
    pub fn render(&self, session: &BrowserSession) -> String {
        match session.status() {
            LoadStatus::Loading => "Loading repositories...\n".to_string(),
            LoadStatus::Error => format!(
                "{}\n",
                session.error_message().unwrap_or("Unknown error")
            ),
            LoadStatus::Ready => self.render_page(session),
        }
    }

    fn render_page(&self, session: &BrowserSession) -> String {
        let mut screen = String::new();
        let _ = writeln!(screen, "Repositories of {}", self.username);
        if !session.search_term().is_empty() {
            let _ = writeln!(screen, "Search: {:?}", session.search_term());
        }
        let _ = writeln!(screen);

        let items = session.current_page_items();
        if items.is_empty() {
            let _ = writeln!(screen, "No repositories to show");
        }
        for repository in items {
            let _ = writeln!(screen, "* {}", repository.name());
            let _ = writeln!(
                screen,
                "  {}",
                repository.description().unwrap_or(NO_DESCRIPTION_PLACEHOLDER)
            );
            let _ = writeln!(screen, "  {}", repository.html_url());
        }

        let _ = writeln!(screen);
        let _ = writeln!(
            screen,
            "Page {}/{}  {HELP_LINE}",
            session.current_page(),
            session.total_pages()
        );

        screen
    }

    /// Runs the interactive loop until the user quits or the input closes.
    ///
    /// Commands: `n` next page, `p` previous page, `/term` set the
    /// search term (`/` alone clears it), `q` quit. Unknown input
    /// re-renders with the help line.
    pub async fn run(&self, session: &mut BrowserSession) -> StdResult<()> {
        self.print_screen(session)?;
        if session.status() != LoadStatus::Ready {
            return Ok(());
        }

        let mut lines = BufReader::new(stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            match line {
                "q" => break,
                "n" => session.next_page(),
                "p" => session.previous_page(),
                _ if line.starts_with('/') => {
                    session.set_search_term(line.trim_start_matches('/'));
                }
                "" => {}
                _ => {
                    debug!("Unknown command: {line}");
                    println!("{HELP_LINE}");
                }
            }
            self.print_screen(session)?;
        }

        Ok(())
    }

    fn print_screen(&self, session: &BrowserSession) -> StdResult<()> {
        print!("{}", self.render(session));
        stdout().flush()?;

        Ok(())
    }
}
