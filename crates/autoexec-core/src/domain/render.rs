//! Renders an [`AnswerSet`] into the text of `autoexec.cfg`.
//!
//! The layout is fixed:
//!
//! ```text
//! // Generated by dota2-autoexec-generator
//! // https://github.com/rossi2nico/dota2-autoexec-generator
//!
//! // Settings
//! con_enable "1"
//! ...
//!
//! // Keybinds
//! bind "f7" disconnect
//! ```
//!
//! Lines are joined with `\n` and the document has no trailing newline.
//! Values are wrapped in double quotes as-is; nothing is escaped.

use super::answers::AnswerSet;

/// Name written on the first header line.
pub const TOOL_NAME: &str = "dota2-autoexec-generator";

/// Project URL written on the second header line.
pub const PROJECT_URL: &str = "https://github.com/rossi2nico/dota2-autoexec-generator";

/// The rendered document as an ordered list of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedConfig {
    lines: Vec<String>,
}

impl RenderedConfig {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The file contents: lines joined with `\n`, no trailing newline.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Builds the document for `answers` followed by `binds`.
///
/// Synthetic answers (gate flags) are skipped.  The output depends only on
/// the order of `answers` and `binds`, so identical inputs render
/// byte-identical text.
pub fn render_config(answers: &AnswerSet, binds: &[String]) -> RenderedConfig {
    let mut lines = vec![
        format!("// Generated by {TOOL_NAME}"),
        format!("// {PROJECT_URL}"),
        String::new(),
        "// Settings".to_string(),
    ];

    lines.extend(
        answers
            .rendered()
            .map(|answer| format!("{} \"{}\"", answer.key, answer.value)),
    );

    lines.push(String::new());
    lines.push("// Keybinds".to_string());
    lines.extend(binds.iter().cloned());

    RenderedConfig { lines }
}
