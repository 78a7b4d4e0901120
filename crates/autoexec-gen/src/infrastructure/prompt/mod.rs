//! Line-based terminal prompts.
//!
//! [`TerminalPrompt`] prints a question, reads one line, and hands it back
//! untouched (minus the line ending).  [`DefaultsPrompt`] prints the same
//! question but answers it with an empty line, so every question resolves
//! to its default.  Both are generic over their reader/writer so tests can
//! drive them with in-memory buffers.
//!
//! With colour enabled, question labels are green, and status lines are
//! green, yellow or red by [`Tone`].  The `stdio`/`stdout` constructors
//! enable colour only when stdout is a terminal.

pub mod mock;

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::style::{style, Stylize};

use crate::application::collect_answers::{Prompt, PromptError, Question, Tone};

/// Applies the colour for `tone` when `color` is set.
pub fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Success => style(text).green().to_string(),
        Tone::Warning => style(text).yellow().to_string(),
        Tone::Error => style(text).red().to_string(),
    }
}

fn write_question<W: Write>(out: &mut W, question: &Question, color: bool) -> io::Result<()> {
    let message = match &question.label {
        Some(label) => format!("{}: {}", paint(label, Tone::Success, color), question.text),
        None => question.text.clone(),
    };
    match &question.default {
        Some(default) => write!(out, "? {message} ({default}) ")?,
        None => write!(out, "? {message} ")?,
    }
    out.flush()
}

/// Prompt backed by a reader and a writer, usually stdin and stdout.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    /// Plain-text prompt.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's stdin and stdout.
    pub fn stdio() -> Self {
        let color = io::stdout().is_terminal();
        Self::new(io::stdin().lock(), io::stdout()).with_color(color)
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn ask(&mut self, question: &Question) -> Result<String, PromptError> {
        write_question(&mut self.output, question, self.color)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn message(&mut self, tone: Tone, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", paint(text, tone, self.color))?;
        Ok(())
    }
}

/// Prompt that accepts every default without reading input.
pub struct DefaultsPrompt<W> {
    output: W,
    color: bool,
}

impl<W: Write> DefaultsPrompt<W> {
    /// Plain-text prompt.
    pub fn new(output: W) -> Self {
        Self {
            output,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl DefaultsPrompt<io::Stdout> {
    pub fn stdout() -> Self {
        let color = io::stdout().is_terminal();
        Self::new(io::stdout()).with_color(color)
    }
}

impl<W: Write> Prompt for DefaultsPrompt<W> {
    fn ask(&mut self, question: &Question) -> Result<String, PromptError> {
        write_question(&mut self.output, question, self.color)?;
        writeln!(self.output)?;
        Ok(String::new())
    }

    fn message(&mut self, tone: Tone, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", paint(text, tone, self.color))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::labelled("Enable Console", " (0-1)", Some("1".to_string()))
    }

    #[test]
    fn test_terminal_prompt_returns_line_without_newline() {
        // Arrange
        let mut output = Vec::new();
        let mut prompt = TerminalPrompt::new("0\r\n".as_bytes(), &mut output);

        // Act
        let answer = prompt.ask(&question()).unwrap();

        // Assert
        assert_eq!(answer, "0");
    }

    #[test]
    fn test_terminal_prompt_shows_message_and_default() {
        let mut output = Vec::new();
        {
            let mut prompt = TerminalPrompt::new("\n".as_bytes(), &mut output);
            prompt.ask(&question()).unwrap();
        }
        assert_eq!(String::from_utf8(output).unwrap(), "? Enable Console:  (0-1) (1) ");
    }

    #[test]
    fn test_terminal_prompt_colors_label_when_enabled() {
        let mut output = Vec::new();
        {
            let mut prompt = TerminalPrompt::new("\n".as_bytes(), &mut output).with_color(true);
            prompt.ask(&question()).unwrap();
        }
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains(&style("Enable Console").green().to_string()));
    }

    #[test]
    fn test_terminal_prompt_blank_line_is_returned_as_empty() {
        let mut prompt = TerminalPrompt::new("\n".as_bytes(), Vec::new());
        assert_eq!(prompt.ask(&question()).unwrap(), "");
    }

    #[test]
    fn test_terminal_prompt_keeps_spaces_in_answer() {
        let mut prompt = TerminalPrompt::new("   \n".as_bytes(), Vec::new());
        assert_eq!(prompt.ask(&question()).unwrap(), "   ");
    }

    #[test]
    fn test_terminal_prompt_reads_successive_lines() {
        let mut prompt = TerminalPrompt::new("5\n0\n".as_bytes(), Vec::new());
        assert_eq!(prompt.ask(&question()).unwrap(), "5");
        assert_eq!(prompt.ask(&question()).unwrap(), "0");
    }

    #[test]
    fn test_terminal_prompt_end_of_input_is_closed() {
        let mut prompt = TerminalPrompt::new("".as_bytes(), Vec::new());
        assert!(matches!(prompt.ask(&question()), Err(PromptError::Closed)));
    }

    #[test]
    fn test_terminal_prompt_message_writes_plain_line_without_color() {
        let mut output = Vec::new();
        {
            let mut prompt = TerminalPrompt::new("".as_bytes(), &mut output);
            prompt.message(Tone::Error, "Not valid.").unwrap();
        }
        assert_eq!(output, b"Not valid.\n");
    }

    #[test]
    fn test_paint_uses_tone_colors() {
        assert_eq!(paint("ok", Tone::Success, true), style("ok").green().to_string());
        assert_eq!(paint("hm", Tone::Warning, true), style("hm").yellow().to_string());
        assert_eq!(paint("no", Tone::Error, true), style("no").red().to_string());
        assert_eq!(paint("no", Tone::Error, false), "no");
    }

    #[test]
    fn test_defaults_prompt_answers_blank() {
        let mut output = Vec::new();
        let answer = {
            let mut prompt = DefaultsPrompt::new(&mut output);
            prompt.ask(&question()).unwrap()
        };
        assert_eq!(answer, "");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "? Enable Console:  (0-1) (1) \n"
        );
    }
}
