use std::io::{self, BufRead, Write};

use bookgrid_core::books::{build_page_output, BookDoc, PAGE_SIZE};
use bookgrid_core::pagination::Pager;
use colored::Colorize;

use crate::api::{fetch_search_docs, get_api_base, SEARCH_QUERY};
use crate::prelude::{println, *};
use crate::render::{book_table, pagination_bar};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct BrowseOptions {
    /// Starting page (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,
}

/// A command entered at the browse prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Goto(usize),
    Help,
    Close,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();

    if let Ok(page) = trimmed.parse::<usize>() {
        return Command::Goto(page);
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "n" | "next" | ">" => Command::Next,
        "p" | "prev" | "previous" | "<" => Command::Prev,
        "h" | "help" | "?" => Command::Help,
        "c" | "close" => Command::Close,
        "q" | "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// What the loop should do after a command has been applied.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// One interactive browse session.
///
/// Owns the fetched records for the lifetime of the session and the page
/// state, which is mutated only through the page-change handlers below. The
/// grid and pagination bar are rebuilt from scratch on every render.
pub struct Session {
    docs: Vec<BookDoc>,
    pager: Pager,
    help_visible: bool,
    notice: Option<String>,
}

impl Session {
    pub fn new(docs: Vec<BookDoc>) -> Self {
        let pager = Pager::new(docs.len(), PAGE_SIZE);
        Self {
            docs,
            pager,
            help_visible: false,
            notice: None,
        }
    }

    pub fn current_page(&self) -> usize {
        self.pager.current()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total()
    }

    /// Jump to a specific page, clamped into range.
    pub fn goto(&mut self, page: usize) {
        self.pager.goto(page);
    }

    pub fn apply(&mut self, command: Command) -> Step {
        self.notice = None;

        match command {
            Command::Next => {
                self.pager.next();
            }
            Command::Prev => {
                self.pager.prev();
            }
            Command::Goto(page) => self.goto(page),
            Command::Help => self.help_visible = true,
            Command::Close => self.help_visible = false,
            Command::Quit => return Step::Quit,
            Command::Unknown(input) => {
                self.notice = Some(format!("Unknown command: {input:?} (try \"help\")"));
            }
        }

        Step::Continue
    }

    /// Rebuild the full display: header, grid, pagination bar, and the help
    /// panel when it is open.
    pub fn render(&self) -> String {
        let output = build_page_output(&self.docs, SEARCH_QUERY.to_string(), self.current_page());
        let info = &output.pagination;

        let mut result = String::new();

        result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
        result.push_str(&format!(
            "{}\n",
            format!("BOOKGRID \"{}\"", output.query.to_uppercase())
                .bright_cyan()
                .bold()
        ));
        result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

        if output.items.is_empty() {
            result.push_str(&format!("\n{}\n", "No books to show.".yellow()));
        } else {
            result.push('\n');
            result.push_str(&book_table(&output.items).to_string());
        }

        let bar = pagination_bar(info.current_page, info.total_pages);
        if !bar.is_empty() {
            result.push_str(&format!("\n{bar}\n"));
            result.push_str(&format!(
                "{} {} {} {} ({} {})\n",
                "Page".bright_white(),
                info.current_page.to_string().bright_cyan().bold(),
                "of".bright_white(),
                info.total_pages.to_string().bright_cyan().bold(),
                info.total_items.to_string().bright_cyan().bold(),
                "results".bright_white()
            ));
        }

        if self.help_visible {
            result.push_str(&render_help());
        }

        if let Some(notice) = &self.notice {
            result.push_str(&format!("\n{}\n", notice.yellow()));
        }

        result
    }
}

fn render_help() -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "-".repeat(40).bright_yellow()));
    result.push_str(&format!("{}\n", "COMMANDS".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "-".repeat(40).bright_yellow()));
    result.push_str(&format!("  {}: next page\n", "n".cyan()));
    result.push_str(&format!("  {}: previous page\n", "p".cyan()));
    result.push_str(&format!("  {}: jump to that page\n", "<number>".cyan()));
    result.push_str(&format!("  {}: close this panel\n", "close".cyan()));
    result.push_str(&format!("  {}: leave the session\n", "q".cyan()));

    result
}

fn prompt() -> Result<()> {
    print!("{} ", "page>".bold());
    io::stdout().flush()?;
    Ok(())
}

pub async fn run(options: BrowseOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Open Library API Base: {}", get_api_base());
        println!();
    }

    let client = reqwest::Client::new();
    let docs = fetch_search_docs(&client).await;

    let mut session = Session::new(docs);
    session.goto(options.page);

    print!("{}", session.render());
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match session.apply(parse_command(&line)) {
            Step::Quit => break,
            Step::Continue => {
                print!("{}", session.render());
                prompt()?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_doc(n: usize) -> BookDoc {
        BookDoc {
            key: format!("/works/OL{n}W"),
            title: Some(format!("Book {n}")),
            author_name: Some(vec![format!("Author {n}")]),
            cover_edition_key: Some(format!("OL{n}M")),
            first_publish_year: Some(1954),
        }
    }

    fn create_test_session(count: usize) -> Session {
        Session::new((1..=count).map(create_test_doc).collect())
    }

    #[test]
    fn test_parse_command_pages() {
        assert_eq!(parse_command("n"), Command::Next);
        assert_eq!(parse_command("next"), Command::Next);
        assert_eq!(parse_command("p"), Command::Prev);
        assert_eq!(parse_command(" prev "), Command::Prev);
        assert_eq!(parse_command("3"), Command::Goto(3));
    }

    #[test]
    fn test_parse_command_panel_and_quit() {
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("HELP"), Command::Help);
        assert_eq!(parse_command("close"), Command::Close);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("quit"), Command::Quit);
    }

    #[test]
    fn test_parse_command_unknown() {
        assert_eq!(
            parse_command("frodo"),
            Command::Unknown("frodo".to_string())
        );
    }

    #[test]
    fn test_session_ten_records_three_pages() {
        let session = create_test_session(10);
        assert_eq!(session.total_pages(), 3);
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn test_session_next_moves_window() {
        colored::control::set_override(false);
        let mut session = create_test_session(10);

        assert!(session.render().contains("Book 1"));
        assert!(session.render().contains("Book 4"));

        session.apply(Command::Next);

        let rendered = session.render();
        assert_eq!(session.current_page(), 2);
        assert!(rendered.contains("Book 5"));
        assert!(rendered.contains("Book 8"));
        assert!(!rendered.contains("Book 4"));
    }

    #[test]
    fn test_session_last_page_partial_window() {
        colored::control::set_override(false);
        let mut session = create_test_session(10);
        session.apply(Command::Goto(3));

        let rendered = session.render();
        assert!(rendered.contains("Book 9"));
        assert!(rendered.contains("Book 10"));
        assert!(!rendered.contains("Book 8"));
    }

    #[test]
    fn test_session_next_noop_on_last_page() {
        let mut session = create_test_session(10);
        session.apply(Command::Goto(3));
        session.apply(Command::Next);
        assert_eq!(session.current_page(), 3);
    }

    #[test]
    fn test_session_prev_noop_on_first_page() {
        let mut session = create_test_session(10);
        session.apply(Command::Prev);
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn test_session_goto_clamps() {
        let mut session = create_test_session(10);
        session.apply(Command::Goto(42));
        assert_eq!(session.current_page(), 3);
        session.apply(Command::Goto(0));
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn test_session_render_active_marker() {
        colored::control::set_override(false);
        let mut session = create_test_session(10);
        session.apply(Command::Next);

        let rendered = session.render();
        assert!(rendered.contains("<< 1 [2] 3 >>"));
        assert_eq!(rendered.matches('[').count(), 1);
    }

    #[test]
    fn test_session_empty_no_grid_no_links() {
        colored::control::set_override(false);
        let session = create_test_session(0);

        let rendered = session.render();
        assert!(rendered.contains("No books to show."));
        assert!(!rendered.contains("<<"));
        assert!(!rendered.contains(">>"));
        assert_eq!(session.total_pages(), 0);
    }

    #[test]
    fn test_session_help_panel_toggles() {
        colored::control::set_override(false);
        let mut session = create_test_session(10);

        assert!(!session.render().contains("COMMANDS"));

        session.apply(Command::Help);
        assert!(session.render().contains("COMMANDS"));

        session.apply(Command::Close);
        assert!(!session.render().contains("COMMANDS"));
    }

    #[test]
    fn test_session_unknown_command_notice() {
        colored::control::set_override(false);
        let mut session = create_test_session(10);

        session.apply(Command::Unknown("frodo".to_string()));
        assert!(session.render().contains("Unknown command"));

        session.apply(Command::Next);
        assert!(!session.render().contains("Unknown command"));
    }

    #[test]
    fn test_session_quit() {
        let mut session = create_test_session(10);
        assert_eq!(session.apply(Command::Quit), Step::Quit);
        assert_eq!(session.apply(Command::Next), Step::Continue);
    }
}
