//! GenerateAutoexecUseCase: one complete generator run.
//!
//! ```text
//! locate (or --cfg-dir, or ask) → collect → render → ensure dir → backup → write
//! ```
//!
//! The steps run strictly in sequence.  The only branches are the gated
//! category inside collection and the manual directory question when no
//! installation was found.

use std::path::{Path, PathBuf};

use autoexec_core::{render_config, AnswerSet, Catalog};
use thiserror::Error;
use tracing::info;

use super::collect_answers::{CollectAnswersUseCase, Prompt, PromptError, Question, Tone};

/// File name written into the output directory.
pub const CONFIG_FILE_NAME: &str = "autoexec.cfg";

/// Name a pre-existing [`CONFIG_FILE_NAME`] is renamed to before writing.
pub const BACKUP_FILE_NAME: &str = "old-autoexec.cfg";

/// Error type for the write step.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The output directory could not be created.
    #[error("failed to create directory: {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be written.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for a whole generator run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Result of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// Full path of the written config file.
    pub path: PathBuf,
    /// Size of the written document in bytes.
    pub bytes: usize,
    /// Where the previous file was moved, if one existed.
    pub backup: Option<PathBuf>,
}

/// Finds the game's `cfg` directory on this machine.
pub trait InstallLocator {
    /// Returns the first detected directory, or `None` if nothing was found.
    fn locate(&self) -> Option<PathBuf>;
}

/// Persists a rendered document into a directory.
pub trait ConfigWriter {
    /// Writes `content` as [`CONFIG_FILE_NAME`] inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError`] if the directory or the file cannot be written.
    fn write(&self, dir: &Path, content: &str) -> Result<WriteReport, WriteError>;
}

/// Where the output directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirSource {
    /// Supplied up front (`--cfg-dir`).
    Explicit,
    /// Found by the [`InstallLocator`].
    Detected,
    /// Typed by the user after detection failed.
    Entered,
}

/// Everything a caller may want to report after a run.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub dir_source: DirSource,
    pub answers: AnswerSet,
    pub report: WriteReport,
}

/// The Generate Autoexec use case.
pub struct GenerateAutoexecUseCase<'a> {
    catalog: &'a Catalog,
    locator: &'a dyn InstallLocator,
    writer: &'a dyn ConfigWriter,
}

impl<'a> GenerateAutoexecUseCase<'a> {
    pub fn new(
        catalog: &'a Catalog,
        locator: &'a dyn InstallLocator,
        writer: &'a dyn ConfigWriter,
    ) -> Self {
        Self {
            catalog,
            locator,
            writer,
        }
    }

    /// Runs the full pipeline.
    ///
    /// `output_dir` skips detection entirely.  Otherwise the locator is
    /// consulted and, if it finds nothing, the user is asked for a directory
    /// with `<cwd>/cfg` as the default.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Prompt`] if input fails and
    /// [`GenerateError::Write`] if the directory or file cannot be written.
    pub fn run<P>(
        &self,
        prompt: &mut P,
        output_dir: Option<PathBuf>,
        cwd: &Path,
    ) -> Result<GenerateOutcome, GenerateError>
    where
        P: Prompt + ?Sized,
    {
        let (dir, dir_source) = self.resolve_dir(prompt, output_dir, cwd)?;
        info!(dir = %dir.display(), ?dir_source, "output directory resolved");

        let answers = CollectAnswersUseCase::new(self.catalog).collect(prompt)?;
        let document = render_config(&answers, &self.catalog.binds).to_text();
        let report = self.writer.write(&dir, &document)?;

        Ok(GenerateOutcome {
            dir_source,
            answers,
            report,
        })
    }

    fn resolve_dir<P>(
        &self,
        prompt: &mut P,
        output_dir: Option<PathBuf>,
        cwd: &Path,
    ) -> Result<(PathBuf, DirSource), PromptError>
    where
        P: Prompt + ?Sized,
    {
        if let Some(dir) = output_dir {
            return Ok((dir, DirSource::Explicit));
        }

        if let Some(dir) = self.locator.locate() {
            prompt.message(
                Tone::Success,
                &format!("✓ Found Dota 2 installation: {}", dir.display()),
            )?;
            return Ok((dir, DirSource::Detected));
        }

        prompt.message(Tone::Warning, "Could not auto-detect Dota 2 installation.")?;
        let fallback = cwd.join("cfg");
        let question = Question::new(
            "Enter your Dota 2 cfg directory path (or press Enter to save in current directory):",
            Some(fallback.display().to_string()),
        );

        // An empty answer keeps `fallback` as a PathBuf; the displayed
        // default is lossy for non-UTF-8 paths.
        loop {
            let raw = prompt.ask(&question)?;
            if raw.is_empty() {
                return Ok((fallback, DirSource::Entered));
            }
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                return Ok((PathBuf::from(trimmed), DirSource::Entered));
            }
            prompt.message(Tone::Error, "Not valid. Please enter a directory path.")?;
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::infrastructure::prompt::mock::ScriptedPrompt;
    use autoexec_core::{Category, SettingDefinition, ValueRange};

    struct FixedLocator(Option<PathBuf>);

    impl InstallLocator for FixedLocator {
        fn locate(&self) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    /// Records writes in memory instead of touching disk.
    #[derive(Default)]
    struct RecordingWriter {
        writes: RefCell<Vec<(PathBuf, String)>>,
        fail: bool,
    }

    impl ConfigWriter for RecordingWriter {
        fn write(&self, dir: &Path, content: &str) -> Result<WriteReport, WriteError> {
            if self.fail {
                return Err(WriteError::CreateDir {
                    path: dir.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                });
            }
            self.writes
                .borrow_mut()
                .push((dir.to_path_buf(), content.to_string()));
            Ok(WriteReport {
                path: dir.join(CONFIG_FILE_NAME),
                bytes: content.len(),
                backup: None,
            })
        }
    }

    fn one_setting_catalog() -> Catalog {
        Catalog {
            categories: vec![Category {
                name: "essentials".to_string(),
                gate: None,
                settings: vec![SettingDefinition {
                    key: "con_enable".to_string(),
                    display_name: "Enable Console".to_string(),
                    description: String::new(),
                    default_value: "1".to_string(),
                    valid_range: ValueRange::new("0", "1"),
                }],
            }],
            binds: vec![r#"bind "f7" disconnect"#.to_string()],
        }
    }

    #[test]
    fn test_run_with_explicit_dir_skips_locator_and_fallback() {
        // Arrange
        let catalog = one_setting_catalog();
        let locator = FixedLocator(Some(PathBuf::from("/detected")));
        let writer = RecordingWriter::default();
        let mut prompt = ScriptedPrompt::new([""]);

        // Act
        let outcome = GenerateAutoexecUseCase::new(&catalog, &locator, &writer)
            .run(&mut prompt, Some(PathBuf::from("/explicit")), Path::new("/cwd"))
            .unwrap();

        // Assert
        assert_eq!(outcome.dir_source, DirSource::Explicit);
        assert_eq!(writer.writes.borrow()[0].0, PathBuf::from("/explicit"));
        assert_eq!(prompt.asked().len(), 1);
    }

    #[test]
    fn test_run_uses_detected_dir_and_announces_it() {
        let catalog = one_setting_catalog();
        let locator = FixedLocator(Some(PathBuf::from("/steam/cfg")));
        let writer = RecordingWriter::default();
        let mut prompt = ScriptedPrompt::new([""]);

        let outcome = GenerateAutoexecUseCase::new(&catalog, &locator, &writer)
            .run(&mut prompt, None, Path::new("/cwd"))
            .unwrap();

        assert_eq!(outcome.dir_source, DirSource::Detected);
        assert_eq!(outcome.report.path, PathBuf::from("/steam/cfg").join(CONFIG_FILE_NAME));
        assert!(prompt.messages()[0].contains("Found Dota 2 installation"));
        assert_eq!(prompt.tones(), [Tone::Success]);
    }

    #[test]
    fn test_run_fallback_defaults_to_cfg_under_cwd() {
        let catalog = one_setting_catalog();
        let locator = FixedLocator(None);
        let writer = RecordingWriter::default();
        let mut prompt = ScriptedPrompt::new(["", ""]);

        let outcome = GenerateAutoexecUseCase::new(&catalog, &locator, &writer)
            .run(&mut prompt, None, Path::new("/work"))
            .unwrap();

        assert_eq!(outcome.dir_source, DirSource::Entered);
        assert_eq!(writer.writes.borrow()[0].0, Path::new("/work").join("cfg"));
    }

    #[test]
    fn test_run_fallback_asks_before_collecting_settings() {
        let catalog = one_setting_catalog();
        let locator = FixedLocator(None);
        let writer = RecordingWriter::default();
        let mut prompt = ScriptedPrompt::new(["/typed/dir", "0"]);

        let outcome = GenerateAutoexecUseCase::new(&catalog, &locator, &writer)
            .run(&mut prompt, None, Path::new("/work"))
            .unwrap();

        assert!(prompt.asked()[0]
            .message()
            .starts_with("Enter your Dota 2 cfg directory"));
        assert_eq!(writer.writes.borrow()[0].0, PathBuf::from("/typed/dir"));
        assert_eq!(outcome.answers.get("con_enable"), Some("0"));
    }

    #[test]
    fn test_run_fallback_blank_answer_keeps_cwd_path_unchanged() {
        // Arrange: a cwd that is not valid UTF-8 on Unix
        #[cfg(unix)]
        let cwd = {
            use std::os::unix::ffi::OsStrExt;
            PathBuf::from(std::ffi::OsStr::from_bytes(b"/work/\xff\xfe"))
        };
        #[cfg(not(unix))]
        let cwd = PathBuf::from("/work");
        let catalog = one_setting_catalog();
        let locator = FixedLocator(None);
        let writer = RecordingWriter::default();
        let mut prompt = ScriptedPrompt::new(["", ""]);

        // Act
        GenerateAutoexecUseCase::new(&catalog, &locator, &writer)
            .run(&mut prompt, None, &cwd)
            .unwrap();

        // Assert
        assert_eq!(writer.writes.borrow()[0].0, cwd.join("cfg"));
    }

    #[test]
    fn test_run_fallback_rejects_whitespace_only_directory() {
        let catalog = one_setting_catalog();
        let locator = FixedLocator(None);
        let writer = RecordingWriter::default();
        let mut prompt = ScriptedPrompt::new(["  ", " /typed ", ""]);

        GenerateAutoexecUseCase::new(&catalog, &locator, &writer)
            .run(&mut prompt, None, Path::new("/work"))
            .unwrap();

        assert_eq!(writer.writes.borrow()[0].0, PathBuf::from("/typed"));
        assert_eq!(prompt.tones(), [Tone::Warning, Tone::Error]);
    }

    #[test]
    fn test_run_writes_rendered_document() {
        let catalog = one_setting_catalog();
        let locator = FixedLocator(None);
        let writer = RecordingWriter::default();
        let mut prompt = ScriptedPrompt::new([""]);

        GenerateAutoexecUseCase::new(&catalog, &locator, &writer)
            .run(&mut prompt, Some(PathBuf::from("/out")), Path::new("/cwd"))
            .unwrap();

        let content = writer.writes.borrow()[0].1.clone();
        assert!(content.contains("\ncon_enable \"1\"\n"));
        assert!(content.ends_with("// Keybinds\nbind \"f7\" disconnect"));
    }

    #[test]
    fn test_run_propagates_write_failure() {
        let catalog = one_setting_catalog();
        let locator = FixedLocator(None);
        let writer = RecordingWriter {
            fail: true,
            ..RecordingWriter::default()
        };
        let mut prompt = ScriptedPrompt::new([""]);

        let result = GenerateAutoexecUseCase::new(&catalog, &locator, &writer).run(
            &mut prompt,
            Some(PathBuf::from("/out")),
            Path::new("/cwd"),
        );

        assert!(matches!(
            result,
            Err(GenerateError::Write(WriteError::CreateDir { .. }))
        ));
    }

    #[test]
    fn test_run_propagates_closed_input() {
        let catalog = one_setting_catalog();
        let locator = FixedLocator(None);
        let writer = RecordingWriter::default();
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());

        let result = GenerateAutoexecUseCase::new(&catalog, &locator, &writer).run(
            &mut prompt,
            Some(PathBuf::from("/out")),
            Path::new("/cwd"),
        );

        assert!(matches!(
            result,
            Err(GenerateError::Prompt(PromptError::Closed))
        ));
        assert!(writer.writes.borrow().is_empty());
    }
}
