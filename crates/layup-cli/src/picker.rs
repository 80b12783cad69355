//! Interactive folder prompt.
//!
//! Only compiled with the `interactive` feature (on by default).  This is the
//! production implementation of the core's `FolderPicker` port; scripted
//! invocations pass `--dir` and never reach it.

use std::path::{Path, PathBuf};

use dialoguer::Input;

use layup_core::application::{ApplicationError, ports::FolderPicker};
use layup_core::error::LayupResult;

/// Folder picker that asks on the terminal.
///
/// The fallback directory is offered as an editable default, the way a file
/// dialog opens on a sensible folder.  A blank answer or Ctrl-C dismisses
/// the prompt (`Ok(None)`); dismissal is a normal outcome, not an error.
#[derive(Debug, Default)]
pub struct PromptPicker;

impl PromptPicker {
    pub fn new() -> Self {
        Self
    }
}

impl FolderPicker for PromptPicker {
    fn pick_directory(&self, prompt: &str, fallback: &Path) -> LayupResult<Option<PathBuf>> {
        // dialoguer prompts on stderr, keeping stdout clean for `-o -`.
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .default(fallback.display().to_string())
            .interact_text();

        match answer {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(PathBuf::from(text)))
                }
            }
            Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => {
                Ok(None)
            }
            Err(e) => Err(ApplicationError::PickerFailed {
                reason: e.to_string(),
            }
            .into()),
        }
    }
}
