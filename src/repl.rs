use colored::Colorize;
use once_cell::sync::Lazy;
use rustyline::history::FileHistory;
use rustyline::{CompletionType, Config as RustylineConfig, EditMode, Editor, Result};

static HISTORY_PATH: Lazy<String> = Lazy::new(|| {
    let home_dir = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.analyst.history", home_dir)
});

pub fn prompt() -> String {
    format!("{}", "analyst> ".green().bold())
}

pub fn create_editor() -> Result<EditorWithHistory> {
    log::debug!("Creating rustyline editor configuration");
    let rustyline_config = RustylineConfig::builder()
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl = Editor::<(), FileHistory>::with_config(rustyline_config)?;

    if rl.load_history(&**HISTORY_PATH).is_err() {
        log::debug!("No previous history file found");
    } else {
        log::debug!("History loaded successfully");
    }

    Ok(EditorWithHistory::new(rl))
}

/// Editor wrapper that records every non-empty line in the history.
pub struct EditorWithHistory {
    inner: Editor<(), FileHistory>,
}

impl EditorWithHistory {
    fn new(editor: Editor<(), FileHistory>) -> Self {
        EditorWithHistory { inner: editor }
    }

    pub fn readline(&mut self, prompt: &str) -> Result<String> {
        let line = self.inner.readline(prompt)?;
        if !line.trim().is_empty() {
            let _ = self.inner.add_history_entry(line.as_str());
        }
        Ok(line)
    }
}

impl std::ops::Deref for EditorWithHistory {
    type Target = Editor<(), FileHistory>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl std::ops::DerefMut for EditorWithHistory {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

pub fn save_history(rl: &mut EditorWithHistory) -> Result<()> {
    rl.inner.save_history(&**HISTORY_PATH)
}
