use std::sync::Arc;

use thiserror::Error;

use super::entry::{ColorToken, Glyph, LogEntry};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Log script must contain at least one entry")]
    Empty,
}

/// Fixed, ordered sequence of log lines to replay.
///
/// Never empty. Cloning shares the underlying entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogScript {
    entries: Arc<[LogEntry]>,
}

impl LogScript {
    pub fn new(entries: Vec<LogEntry>) -> Result<Self, ScriptError> {
        if entries.is_empty() {
            return Err(ScriptError::Empty);
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    /// The worker log shown on the landing page
    pub fn worker_demo() -> Self {
        let entries: [LogEntry; 6] = [
            LogEntry::info("Scanning repository...", Glyph::Search, ColorToken::Blue),
            LogEntry::success(
                "Found target: Complexity > 15 (auth.py)",
                Glyph::Zap,
                ColorToken::Orange,
            ),
            LogEntry::info(
                "Refactoring with Claude Sonnet...",
                Glyph::Terminal,
                ColorToken::Purple,
            ),
            LogEntry::info(
                "Verifying changes with pytest...",
                Glyph::Terminal,
                ColorToken::Zinc,
            ),
            LogEntry::success("Tests passed (142/142)!", Glyph::Check, ColorToken::Emerald),
            LogEntry::success(
                "PR Created: mohtion/bounty-8f2a",
                Glyph::PullRequest,
                ColorToken::Emerald,
            ),
        ];
        Self {
            entries: Arc::new(entries),
        }
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }
}

impl Default for LogScript {
    fn default() -> Self {
        Self::worker_demo()
    }
}
