//! The interactive loop.
//!
//! Reads lines with reedline (line editing, file-backed history), dispatches
//! them through [`commands::execute`], and styles the results for the
//! terminal.

use std::borrow::Cow;
use std::io;
use std::path::PathBuf;

use nu_ansi_term::{Color, Style};
use reedline::{
    DefaultHinter, FileBackedHistory, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, Signal,
};

use stash_store::Store;

use crate::commands::{self, CommandResult};

/// Run the REPL against `store` until `exit` or end of input.
pub fn run(store: &Store) -> io::Result<()> {
    println!("{}", Color::Cyan.paint(BANNER));
    println!(
        "{}",
        Color::DarkGray.paint(format!("Persisting to {}", store.file().display()))
    );

    let mut line_editor = build_line_editor();
    let prompt = StashPrompt;

    loop {
        match line_editor.read_line(&prompt)? {
            Signal::Success(line) => match commands::execute(&line, store) {
                CommandResult::Ok { display: None } => {}
                CommandResult::Ok {
                    display: Some(text),
                } => {
                    println!("{}", text);
                }
                CommandResult::Error(message) => {
                    println!("{} {}", Color::Red.bold().paint("Error:"), message);
                }
                CommandResult::Help => {
                    println!("{}", commands::format_help());
                }
                CommandResult::Exit => {
                    println!("{}", Color::Cyan.paint("Goodbye!"));
                    return Ok(());
                }
            },
            Signal::CtrlC => {
                println!("{}", Color::Cyan.paint("^C (use 'exit' to quit)"));
            }
            Signal::CtrlD => {
                println!("{}", Color::Cyan.paint("Goodbye!"));
                return Ok(());
            }
        }
    }
}

fn build_line_editor() -> Reedline {
    let hinter =
        Box::new(DefaultHinter::default().with_style(Style::new().fg(Color::LightGray).dimmed()));

    let mut line_editor = Reedline::create().with_hinter(hinter);

    if let Some(history_path) = get_history_path() {
        if let Some(parent) = history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(history) = FileBackedHistory::with_file(1000, history_path) {
            line_editor = line_editor.with_history(Box::new(history));
        }
    }

    line_editor
}

fn get_history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("stash").join("history.txt"))
}

struct StashPrompt;

impl Prompt for StashPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Owned(Color::Blue.bold().paint("stash").to_string())
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Owned(format!("{} ", Color::Green.bold().paint(">")))
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(": ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}

const BANNER: &str = r#"
     _            _
 ___| |_ __ _ ___| |__
/ __| __/ _` / __| '_ \
\__ \ || (_| \__ \ | | |
|___/\__\__,_|___/_| |_|

Type 'help' for available commands, 'exit' to quit.
"#;
