//! CollectAnswersUseCase: asks the user for every catalog value.
//!
//! Each setting is asked through a [`Prompt`] until the answer passes
//! validation.  An empty answer takes the setting's default.  Invalid answers
//! are reported back through [`Prompt::message`] and asked again with no
//! retry limit; the only way out of the loop is a valid answer or a
//! [`PromptError`].
//!
//! A gated category asks its flag first.  `"1"` fills every setting in the
//! category with the gate's forced value; `"0"` asks each one in turn.

use autoexec_core::{
    validate_boolean, validate_numeric, AnswerSet, Catalog, Category, CategoryGate,
    SettingDefinition, ValidationError,
};
use thiserror::Error;
use tracing::debug;

/// Error type for prompt I/O.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Reading the answer or writing the question failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before a valid answer was given.
    #[error("input closed before an answer was given")]
    Closed,
}

/// How a [`Prompt::message`] line should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Something went as expected (an install was found).
    Success,
    /// A recoverable problem (detection failed).
    Warning,
    /// A rejected answer.
    Error,
}

/// One question shown to the user.
///
/// Setting and gate questions carry the setting name as a `label` and read
/// `<label>: <text>`; the directory question has no label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub label: Option<String>,
    pub text: String,
    /// Value used when the answer is empty.
    pub default: Option<String>,
}

impl Question {
    pub fn new(text: impl Into<String>, default: Option<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
            default,
        }
    }

    pub fn labelled(
        label: impl Into<String>,
        text: impl Into<String>,
        default: Option<String>,
    ) -> Self {
        Self {
            label: Some(label.into()),
            text: text.into(),
            default,
        }
    }

    /// The full question as plain text.
    pub fn message(&self) -> String {
        match &self.label {
            Some(label) => format!("{label}: {}", self.text),
            None => self.text.clone(),
        }
    }

    fn for_setting(def: &SettingDefinition) -> Self {
        Self::labelled(
            def.display_name.clone(),
            format!("{} ({})", def.description, def.valid_range),
            Some(def.default_value.clone()),
        )
    }

    fn for_gate(gate: &CategoryGate) -> Self {
        Self::labelled(
            gate.display_name.clone(),
            format!("{} (0-1)", gate.description),
            Some(gate.default_value.clone()),
        )
    }
}

/// Interactive input capability.
///
/// The terminal implementation lives in `infrastructure::prompt`; tests use
/// `infrastructure::prompt::mock::ScriptedPrompt`.
pub trait Prompt {
    /// Shows `question` and returns the raw answer line without its newline.
    ///
    /// Defaults are not applied here; the caller substitutes
    /// [`Question::default`] for an empty answer.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Closed`] at end of input, or
    /// [`PromptError::Io`] if the terminal cannot be read or written.
    fn ask(&mut self, question: &Question) -> Result<String, PromptError>;

    /// Shows a status or error line to the user.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Io`] if the line cannot be written.
    fn message(&mut self, tone: Tone, text: &str) -> Result<(), PromptError>;
}

/// Asks `question` until `validate` accepts the answer.
///
/// Only an empty answer (Enter with nothing typed) is replaced by the
/// question's default.  Anything else is trimmed and validated, so an
/// answer of only spaces is rejected rather than defaulted.  Returns the
/// accepted answer.
///
/// # Errors
///
/// Propagates any [`PromptError`] from the prompt.
pub fn ask_until_valid<P, V>(
    prompt: &mut P,
    question: &Question,
    validate: V,
) -> Result<String, PromptError>
where
    P: Prompt + ?Sized,
    V: Fn(&str) -> Result<(), ValidationError>,
{
    loop {
        let raw = prompt.ask(question)?;
        let answer = match &question.default {
            Some(default) if raw.is_empty() => default.clone(),
            _ => raw.trim().to_string(),
        };

        match validate(&answer) {
            Ok(()) => return Ok(answer),
            Err(err) => {
                debug!(answer = %answer, "rejected answer: {err}");
                prompt.message(Tone::Error, &err.to_string())?;
            }
        }
    }
}

/// The Collect Answers use case.
pub struct CollectAnswersUseCase<'a> {
    catalog: &'a Catalog,
}

impl<'a> CollectAnswersUseCase<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Walks the catalog in order and returns every accepted answer.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the prompt fails or input ends early.
    pub fn collect<P>(&self, prompt: &mut P) -> Result<AnswerSet, PromptError>
    where
        P: Prompt + ?Sized,
    {
        let mut answers = AnswerSet::new();

        for category in &self.catalog.categories {
            match &category.gate {
                Some(gate) => collect_gated(category, gate, prompt, &mut answers)?,
                None => collect_each(&category.settings, prompt, &mut answers)?,
            }
        }

        debug!(count = answers.len(), "collected answers");
        Ok(answers)
    }
}

fn collect_each<P>(
    settings: &[SettingDefinition],
    prompt: &mut P,
    answers: &mut AnswerSet,
) -> Result<(), PromptError>
where
    P: Prompt + ?Sized,
{
    for def in settings {
        let value = ask_until_valid(prompt, &Question::for_setting(def), |input| {
            validate_numeric(input, &def.valid_range)
        })?;
        answers.record(def.key.clone(), value);
    }
    Ok(())
}

fn collect_gated<P>(
    category: &Category,
    gate: &CategoryGate,
    prompt: &mut P,
    answers: &mut AnswerSet,
) -> Result<(), PromptError>
where
    P: Prompt + ?Sized,
{
    let flag = ask_until_valid(prompt, &Question::for_gate(gate), validate_boolean)?;
    answers.record_synthetic(gate.key.clone(), flag.clone());

    if flag == "1" {
        debug!(
            category = %category.name,
            forced = %gate.forced_value,
            "gate enabled, skipping individual prompts"
        );
        for def in &category.settings {
            answers.record(def.key.clone(), gate.forced_value.clone());
        }
        Ok(())
    } else {
        collect_each(&category.settings, prompt, answers)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
