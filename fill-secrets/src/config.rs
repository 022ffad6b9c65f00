use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "secrets.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "src/secrets.h";

// Where to read the secret definitions from and where to write the header.
// Relative paths resolve against the working directory of the process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Config {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}
