//! Folder picker adapters.

mod preset;

pub use preset::PresetPicker;
