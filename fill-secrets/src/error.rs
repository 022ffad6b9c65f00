use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    OpenInput,
    ReadInput,
    CreateOutput,
    WriteOutput,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Access::OpenInput => "open input file",
            Access::ReadInput => "read input file",
            Access::CreateOutput => "create output file",
            Access::WriteOutput => "write output file",
        };
        f.write_str(what)
    }
}

/// The only way a transcription run can fail: one of the two files could
/// not be opened, read or written.
#[derive(Debug, Error)]
#[error("failed to {access} {}", .path.display())]
pub struct FileAccessError {
    pub access: Access,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl FileAccessError {
    pub fn new(access: Access, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            access,
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
