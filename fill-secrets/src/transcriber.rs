use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use log::{debug, info};

use crate::config::Config;
use crate::error::{Access, FileAccessError};

pub const DEFINE_PREFIX: &str = "#define ";

// Copy every line of `reader` to `writer` behind a `#define ` prefix.
// Lines keep their own terminator, so "\r\n" and a missing final newline
// come out exactly as they went in. Returns the number of lines written.
pub fn transcribe<R: BufRead, W: Write>(reader: R, writer: W) -> io::Result<usize> {
    transcribe_lines(reader, writer).map_err(|(_, e)| e)
}

fn transcribe_lines<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> Result<usize, (Access, io::Error)> {
    let mut line = Vec::new();
    let mut line_number = 0;

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| (Access::ReadInput, e))?;
        if read == 0 {
            break;
        }

        writer
            .write_all(DEFINE_PREFIX.as_bytes())
            .and_then(|_| writer.write_all(&line))
            .map_err(|e| (Access::WriteOutput, e))?;

        // Values are secrets, only the position goes to the log
        debug!("line {line_number}: {read} bytes");
        line_number += 1;
    }

    Ok(line_number)
}

pub struct Transcriber {
    config: Config,
}

impl Transcriber {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // Generate the header file from the secrets file.
    // The input is opened before the output is touched, so a missing input
    // never truncates an existing header. Both files are closed when this
    // returns, on success or failure.
    pub fn run(&self) -> Result<usize, FileAccessError> {
        let input_path = &self.config.input_path;
        let output_path = &self.config.output_path;

        let input = File::open(input_path)
            .map_err(|e| FileAccessError::new(Access::OpenInput, input_path, e))?;

        // Opening succeeds for some inputs that can't be read (a directory on
        // Linux), so read the first chunk before the header gets truncated
        let mut reader = BufReader::new(input);
        reader
            .fill_buf()
            .map_err(|e| FileAccessError::new(Access::ReadInput, input_path, e))?;

        let output = File::create(output_path)
            .map_err(|e| FileAccessError::new(Access::CreateOutput, output_path, e))?;

        info!(
            "Generating {} from {}",
            output_path.display(),
            input_path.display()
        );

        let mut writer = BufWriter::new(output);
        let lines = transcribe_lines(reader, &mut writer).map_err(
            |(access, e)| match access {
                Access::ReadInput | Access::OpenInput => {
                    FileAccessError::new(access, input_path, e)
                }
                Access::WriteOutput | Access::CreateOutput => {
                    FileAccessError::new(access, output_path, e)
                }
            },
        )?;

        // BufWriter swallows errors on drop
        writer
            .flush()
            .map_err(|e| FileAccessError::new(Access::WriteOutput, output_path, e))?;

        info!("Wrote {lines} definitions to {}", output_path.display());
        Ok(lines)
    }
}
