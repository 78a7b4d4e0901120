//! Scripted prompt for unit and integration tests.
//!
//! Answers are handed out in order.  Every question and every message is
//! recorded so tests can assert on exactly what the user would have seen.
//! When the script runs out, `ask` returns [`PromptError::Closed`], which
//! also stops any re-prompt loop that would otherwise spin forever.
//!
//! ```ignore
//! let mut prompt = ScriptedPrompt::new(["5", "0"]);
//! let answers = CollectAnswersUseCase::new(&catalog).collect(&mut prompt)?;
//! assert_eq!(prompt.messages().len(), 1);
//! ```

use std::collections::VecDeque;

use crate::application::collect_answers::{Prompt, PromptError, Question, Tone};

/// A prompt that replays a fixed list of answers.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    script: VecDeque<String>,
    asked: Vec<Question>,
    messages: Vec<(Tone, String)>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[Question] {
        &self.asked
    }

    /// Message texts shown so far, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.messages.iter().map(|(_, text)| text.as_str()).collect()
    }

    /// Tone of each message, in the same order as [`Self::messages`].
    pub fn tones(&self) -> Vec<Tone> {
        self.messages.iter().map(|(tone, _)| *tone).collect()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &Question) -> Result<String, PromptError> {
        self.asked.push(question.clone());
        self.script.pop_front().ok_or(PromptError::Closed)
    }

    fn message(&mut self, tone: Tone, text: &str) -> Result<(), PromptError> {
        self.messages.push((tone, text.to_string()));
        Ok(())
    }
}
