//! Line-oriented terminal frontend.
//!
//! Each line read from stdin replaces the search input, exactly as if the
//! whole line had been typed into a search field. The screen is redrawn on
//! every snapshot change.
//!
//! # Commands
//!
//! - any text: set the input to that text (an empty line clears the search)
//! - `:more`: scroll one viewport down; reaching the end loads the next page
//! - `:top`: scroll back to the first result
//! - `:quit` or `:q`: exit
//!
//! # Usage
//!
//! ```text
//! tunesearch [--config <path>]
//! ```
//!
//! Without `--config`, `<config dir>/tunesearch/config.toml` is used when it
//! exists.

#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};

use tunesearch::app::{SearchSnapshot, SessionId};
use tunesearch::ui::{render, ResultsViewModel, Theme};
use tunesearch::{initialize, observability, Config, Result, SearchHandle};

/// Terminal width assumed for layout.
const COLUMNS: usize = 80;

const CLEAR_SCREEN: &str = "\u{001b}[2J\u{001b}[H";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search(String),
    More,
    Top,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim() {
            ":quit" | ":q" => Self::Quit,
            ":more" => Self::More,
            ":top" => Self::Top,
            _ => Self::Search(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

/// Which slice of the results is on screen.
#[derive(Debug)]
struct Viewport {
    session: SessionId,
    first: usize,
    rows: usize,
}

impl Viewport {
    const fn new(rows: usize) -> Self {
        Self {
            session: SessionId::new(0),
            first: 0,
            rows,
        }
    }

    /// Returns to the top whenever a new session replaces the results.
    fn follow(&mut self, snapshot: &SearchSnapshot) {
        if snapshot.session != self.session {
            self.session = snapshot.session;
            self.first = 0;
        }
    }

    /// Advances one page, stopping when the last result is on screen.
    fn scroll(&mut self, len: usize) {
        self.first = (self.first + self.rows).min(len.saturating_sub(self.rows));
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tunesearch: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = load_config()?;
    if let Err(e) = observability::init_tracing(&config) {
        eprintln!("tunesearch: tracing disabled: {e}");
    }

    let theme = Theme::from_config(&config);
    let handle = initialize(&config)?;
    let mut updates = handle.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut viewport = Viewport::new(config.viewport_rows.max(1));

    let mut snapshot = updates.borrow_and_update().clone();
    draw(&handle, &theme, &viewport, &snapshot)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Command::Quit => break,
                    Command::Search(text) => handle.set_input_text(text)?,
                    Command::More => {
                        viewport.scroll(snapshot.len());
                        draw(&handle, &theme, &viewport, &snapshot)?;
                    }
                    Command::Top => {
                        viewport.first = 0;
                        draw(&handle, &theme, &viewport, &snapshot)?;
                    }
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                snapshot = updates.borrow_and_update().clone();
                viewport.follow(&snapshot);
                draw(&handle, &theme, &viewport, &snapshot)?;
            }
        }
    }

    handle.shutdown().await
}

fn load_config() -> Result<Config> {
    let mut args = std::env::args().skip(1);
    match (args.next().as_deref(), args.next()) {
        (Some("--config"), Some(path)) => Config::load(path),
        (None, _) => Config::load_default(),
        _ => Err(tunesearch::TunesearchError::Config(
            "usage: tunesearch [--config <path>]".to_string(),
        )),
    }
}

/// Redraws the screen and reports the last visible row.
fn draw(handle: &SearchHandle, theme: &Theme, viewport: &Viewport, snapshot: &SearchSnapshot) -> Result<()> {
    let vm = ResultsViewModel::from_snapshot(snapshot, viewport.first, viewport.rows);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write!(out, "{CLEAR_SCREEN}")?;
    let last = render(&mut out, &vm, theme, COLUMNS)?;
    drop(out);

    if let Some(index) = reportable_index(last, snapshot.session, handle.snapshot().session) {
        handle.notify_rendered_index(index)?;
    }
    Ok(())
}

/// Indices are untagged, so a frame drawn from a superseded session must
/// not report; the redraw for the newer snapshot reports instead.
fn reportable_index(last: Option<usize>, drawn: SessionId, current: SessionId) -> Option<usize> {
    last.filter(|_| drawn == current)
}
