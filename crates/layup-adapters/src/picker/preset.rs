//! Non-interactive folder picker.

use std::path::{Path, PathBuf};

use layup_core::{application::ports::FolderPicker, error::LayupResult};

/// Picker with a predetermined answer.
///
/// Used when the directory is already known (`--dir`) and in tests; the
/// prompt and fallback are ignored. [`PresetPicker::cancelled`] models a
/// user dismissing the prompt.
#[derive(Debug, Clone)]
pub struct PresetPicker {
    choice: Option<PathBuf>,
}

impl PresetPicker {
    /// Always answer with `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            choice: Some(dir.into()),
        }
    }

    /// Always dismiss the prompt.
    pub fn cancelled() -> Self {
        Self { choice: None }
    }
}

impl FolderPicker for PresetPicker {
    fn pick_directory(&self, _prompt: &str, _fallback: &Path) -> LayupResult<Option<PathBuf>> {
        Ok(self.choice.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_answer_ignores_prompt_and_fallback() {
        let picker = PresetPicker::new("/maps");
        let choice = picker
            .pick_directory("Select folder", Path::new("~"))
            .unwrap();
        assert_eq!(choice, Some(PathBuf::from("/maps")));
    }

    #[test]
    fn cancelled_picker_answers_none() {
        let picker = PresetPicker::cancelled();
        let choice = picker.pick_directory("Select folder", Path::new("~")).unwrap();
        assert_eq!(choice, None);
    }
}
