//! Syntax coloring for code blocks using syntect (WASM-compatible via fancy-regex).
//!
//! Coloring is cosmetic: the spans of a highlighted block always concatenate
//! back to the exact source text.

use std::sync::OnceLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Light theme; code blocks sit on a light gray panel.
const THEME: &str = "InspiredGitHub";

/// A run of source text with one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSpan {
    pub text: String,
    /// CSS hex color, `None` for the panel's default text color.
    pub color: Option<String>,
}

impl CodeSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }
}

/// One source line including its trailing newline, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightedLine {
    pub spans: Vec<CodeSpan>,
}

impl HighlightedLine {
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme: Option<Theme>,
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let mut themes = ThemeSet::load_defaults().themes;
        let theme = themes.remove(THEME);
        if theme.is_none() {
            log::warn!("theme {THEME} missing, code blocks will be uncolored");
        }
        Self { syntax_set, theme }
    }

    /// Process-wide instance; loading syntax definitions is not cheap.
    pub fn shared() -> &'static SyntaxHighlighter {
        static SHARED: OnceLock<SyntaxHighlighter> = OnceLock::new();
        SHARED.get_or_init(SyntaxHighlighter::new)
    }

    fn syntax(&self, language: &str) -> Option<&SyntaxReference> {
        let lang = language.trim().to_lowercase();
        let lang = match lang.as_str() {
            "js" | "jsx" | "mjs" | "es6" => "javascript",
            "ts" | "tsx" => "typescript",
            "sh" | "bash" | "zsh" | "shell" => "Bourne Again Shell (bash)",
            "yml" => "yaml",
            "md" => "markdown",
            "rs" => "rust",
            other => other,
        };
        self.syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_name(lang))
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
    }

    /// Split `code` into colored lines. Unknown languages come back uncolored.
    pub fn highlight(&self, code: &str, language: Option<&str>) -> Vec<HighlightedLine> {
        let syntax = language.and_then(|lang| self.syntax(lang));
        let (Some(syntax), Some(theme)) = (syntax, self.theme.as_ref()) else {
            return plain_lines(code);
        };

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(code) {
            match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => lines.push(HighlightedLine {
                    spans: ranges
                        .into_iter()
                        .filter(|(_, text)| !text.is_empty())
                        .map(|(style, text)| CodeSpan {
                            text: text.to_string(),
                            color: Some(css_color(style.foreground)),
                        })
                        .collect(),
                }),
                Err(err) => {
                    log::debug!("highlighting failed, falling back to plain text: {err}");
                    return plain_lines(code);
                }
            }
        }
        lines
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Uncolored lines, split the same way highlighted ones are.
pub fn plain_lines(code: &str) -> Vec<HighlightedLine> {
    LinesWithEndings::from(code)
        .map(|line| HighlightedLine {
            spans: vec![CodeSpan::plain(line)],
        })
        .collect()
}

fn css_color(color: Color) -> String {
    if color.a == 0xff {
        format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", color.r, color.g, color.b, color.a)
    }
}
