//! Run options for the cleaner.

use std::path::PathBuf;

/// Source export read from the working directory.
pub const DEFAULT_INPUT_PATH: &str = "efax_analysis.csv";

/// Destination of the cleaned JSON array.
pub const DEFAULT_OUTPUT_PATH: &str = "src/data/cleaned_data.json";

/// Input and output locations for one cleaning run.
///
/// The binary always runs with [`CleanOptions::default`]; other values are
/// only used to point the pipeline at scratch directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOptions {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl CleanOptions {
    /// Options that read and write relative to `root`.
    #[must_use]
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            input_path: root.join(DEFAULT_INPUT_PATH),
            output_path: root.join(DEFAULT_OUTPUT_PATH),
        }
    }
}
