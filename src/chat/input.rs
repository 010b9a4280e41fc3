//! Line input for the chat REPL.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

use crate::config::Config;
use crate::format;

/// Source of user input lines. `Ok(None)` means input is exhausted.
pub(crate) trait LineSource {
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Reads lines with [`rustyline`], keeping readline history on disk.
///
/// # Readline behavior
///
/// - **Ctrl+C**: cancels current input, stays at the prompt
/// - **Ctrl+D**: ends input, like `exit`
/// - History is persisted to `~/.cache/gemini-cli/chat_history.txt` when the
///   editor is dropped, on every exit path
pub(crate) struct ReadlineSource {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl ReadlineSource {
    pub(crate) fn open() -> Result<Self> {
        let mut editor = DefaultEditor::new()?;
        let history_path = Config::cache_dir()
            .ok()
            .map(|dir| dir.join(crate::constants::HISTORY_FILENAME));
        if let Some(path) = history_path.as_ref().filter(|p| p.exists()) {
            let _ = editor.load_history(path);
        }
        Ok(Self {
            editor,
            history_path,
        })
    }
}

impl LineSource for ReadlineSource {
    fn read_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.editor.readline(&format::user_prompt()) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.as_str());
                    }
                    return Ok(Some(line));
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl Drop for ReadlineSource {
    fn drop(&mut self) {
        let Some(path) = &self.history_path else {
            return;
        };
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        if let Err(err) = self.editor.save_history(path) {
            tracing::debug!(%err, "failed to save readline history");
        }
    }
}
