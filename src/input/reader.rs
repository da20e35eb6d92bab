use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Reads `file_path`, or stdin when no path is given.
    pub fn read(file_path: Option<&str>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    /// Like [`InputReader::read`], with one trailing line break removed.
    ///
    /// `echo hello | gtx` should translate `hello`, not `hello\n`.
    pub fn read_text(file_path: Option<&str>) -> Result<String> {
        let mut text = Self::read(file_path)?;
        strip_trailing_newline(&mut text);
        Ok(text)
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        check_size(metadata.len() as usize)?;

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    fn read_stdin() -> Result<String> {
        Self::read_limited(io::stdin().lock())
    }

    fn read_limited(reader: impl Read) -> Result<String> {
        let mut buffer = Vec::new();
        // One byte past the limit is enough to know the input is too large.
        reader
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;

        check_size(buffer.len())?;

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn check_size(size: usize) -> Result<()> {
    if size > MAX_INPUT_SIZE {
        bail!(
            "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).",
            size as f64 / 1024.0 / 1024.0
        );
    }
    Ok(())
}

fn strip_trailing_newline(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}
