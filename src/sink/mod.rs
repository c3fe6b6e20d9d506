//! Candidate sinks: one candidate per line to a file, the terminal or the
//! clipboard.

mod progress;
mod writer;

pub use progress::{Outcome, with_progress};
pub use writer::SecureBufWriter;

use std::fs::{self, File, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use thiserror::Error;
use zeroize::Zeroize;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("{path} already exists")]
    Exists { path: PathBuf },
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write failed: {0}")]
    Write(#[from] io::Error),
    #[error("clipboard: {0}")]
    Clipboard(String),
}

/// How an output file that may already exist is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Fail when the file exists.
    Create,
    Append,
    Overwrite,
}

enum Out {
    Terminal(SecureBufWriter<Stdout>),
    File {
        path: PathBuf,
        writer: SecureBufWriter<File>,
    },
    Clipboard {
        ctx: ClipboardContext,
        buf: String,
    },
}

pub struct Sink {
    out: Out,
    written: usize,
}

impl Sink {
    pub fn terminal() -> Self {
        Self {
            out: Out::Terminal(SecureBufWriter::new(io::stdout())),
            written: 0,
        }
    }

    /// Open `path` for writing, creating missing parent directories.
    pub fn file(path: &Path, mode: WriteMode) -> Result<Self, SinkError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|source| SinkError::Open {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut options = OpenOptions::new();
        match mode {
            WriteMode::Create => options.write(true).create_new(true),
            WriteMode::Append => options.create(true).append(true),
            WriteMode::Overwrite => options.create(true).write(true).truncate(true),
        };

        let file = options.open(path).map_err(|source| {
            if source.kind() == io::ErrorKind::AlreadyExists {
                SinkError::Exists {
                    path: path.to_path_buf(),
                }
            } else {
                SinkError::Open {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        debug!("writing candidates to {} ({mode:?})", path.display());

        Ok(Self {
            out: Out::File {
                path: path.to_path_buf(),
                writer: SecureBufWriter::new(file),
            },
            written: 0,
        })
    }

    pub fn clipboard() -> Result<Self, SinkError> {
        let ctx = ClipboardContext::new().map_err(|e| SinkError::Clipboard(e.to_string()))?;
        Ok(Self {
            out: Out::Clipboard {
                ctx,
                buf: String::new(),
            },
            written: 0,
        })
    }

    /// File path, when writing to a file.
    pub fn path(&self) -> Option<&Path> {
        match &self.out {
            Out::File { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.out, Out::Terminal(_))
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn push(&mut self, candidate: &str) -> Result<(), SinkError> {
        match &mut self.out {
            Out::Terminal(w) => {
                w.write_all(candidate.as_bytes())?;
                w.write_all(b"\n")?;
            }
            Out::File { writer, .. } => {
                writer.write_all(candidate.as_bytes())?;
                writer.write_all(b"\n")?;
            }
            Out::Clipboard { buf, .. } => {
                buf.push_str(candidate);
                buf.push('\n');
            }
        }
        self.written += 1;
        Ok(())
    }

    /// Write every candidate, wiping each one once written.
    pub fn drain<I>(&mut self, candidates: I) -> Result<usize, SinkError>
    where
        I: IntoIterator<Item = String>,
    {
        let start = self.written;
        for mut candidate in candidates {
            let result = self.push(&candidate);
            candidate.zeroize();
            result?;
        }
        Ok(self.written - start)
    }

    /// Flush buffered output, or hand the collected list to the clipboard.
    pub fn finish(mut self) -> Result<usize, SinkError> {
        match &mut self.out {
            Out::Terminal(w) => w.flush()?,
            Out::File { writer, .. } => writer.flush()?,
            Out::Clipboard { ctx, buf } => {
                let result = ctx
                    .set_contents(buf.clone())
                    .map_err(|e| SinkError::Clipboard(e.to_string()));
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                buf.zeroize();
                result?;
            }
        }
        Ok(self.written)
    }
}

impl Drop for Sink {
    fn drop(&mut self) {
        if let Out::Clipboard { buf, .. } = &mut self.out {
            buf.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(path: &Path, mode: WriteMode, lines: &[&str]) -> Result<usize, SinkError> {
        let mut sink = Sink::file(path, mode)?;
        sink.drain(lines.iter().map(|s| s.to_string()))?;
        sink.finish()
    }

    #[test]
    fn writes_one_candidate_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/list.txt");
        assert_eq!(write(&path, WriteMode::Create, &["carlos", "carlos1990"]).unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "carlos\ncarlos1990\n");
    }

    #[test]
    fn create_refuses_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list.txt");
        fs::write(&path, "old\n").unwrap();
        assert!(matches!(
            write(&path, WriteMode::Create, &["new"]),
            Err(SinkError::Exists { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "old\n");
    }

    #[test]
    fn append_and_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list.txt");
        fs::write(&path, "old\n").unwrap();

        write(&path, WriteMode::Append, &["new"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "old\nnew\n");

        write(&path, WriteMode::Overwrite, &["only"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "only\n");
    }

    #[test]
    fn path_is_reported_for_files_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list.txt");
        let sink = Sink::file(&path, WriteMode::Create).unwrap();
        assert_eq!(sink.path(), Some(path.as_path()));
        assert!(!sink.is_terminal());
        assert!(Sink::terminal().path().is_none());
    }
}
