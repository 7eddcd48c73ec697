use serde::Deserialize;

/// Display emphasis of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Success,
}

/// Key into the fixed glyph registry.
///
/// Entries never own their icon; renderers resolve the key through
/// [`Glyph::symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Search,
    Zap,
    Terminal,
    Check,
    Cross,
    PullRequest,
    Code,
    ShieldCheck,
    GitMerge,
    Cpu,
}

impl Glyph {
    /// Single-cell terminal symbol for this glyph
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Search => "⌕",
            Glyph::Zap => "ϟ",
            Glyph::Terminal => "❯",
            Glyph::Check => "✔",
            Glyph::Cross => "✘",
            Glyph::PullRequest => "⇡",
            Glyph::Code => "λ",
            Glyph::ShieldCheck => "◈",
            Glyph::GitMerge => "⑂",
            Glyph::Cpu => "◉",
        }
    }
}

/// Semantic color token. Resolved to a concrete color by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Blue,
    Orange,
    Purple,
    Zinc,
    Emerald,
    Green,
    Red,
    Amber,
}

/// One line of simulated agent output
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogEntry {
    pub kind: LogKind,
    pub text: String,
    pub glyph: Glyph,
    pub color: ColorToken,
}

impl LogEntry {
    pub fn info(text: impl Into<String>, glyph: Glyph, color: ColorToken) -> Self {
        Self {
            kind: LogKind::Info,
            text: text.into(),
            glyph,
            color,
        }
    }

    pub fn success(text: impl Into<String>, glyph: Glyph, color: ColorToken) -> Self {
        Self {
            kind: LogKind::Success,
            text: text.into(),
            glyph,
            color,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == LogKind::Success
    }
}
