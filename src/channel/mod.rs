//! Bio channels — where the external field is read from and written to
//!
//! The profile API client lives outside this crate; anything that can
//! get and put a string can carry the board.

use crate::error::Result;
use log::info;
use std::path::{Path, PathBuf};

/// Get-text/put-text pair over the external bio field
pub trait BioChannel {
    fn get_text(&mut self) -> Result<String>;
    fn put_text(&mut self, text: &str) -> Result<()>;
}

/// Bio kept in a local UTF-8 file; a missing file reads as an empty bio
#[derive(Debug, Clone)]
pub struct FileChannel {
    path: PathBuf,
}

impl FileChannel {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BioChannel for FileChannel {
    fn get_text(&mut self) -> Result<String> {
        if !self.path.exists() {
            info!("No bio at {}, starting from an empty bio", self.path.display());
            return Ok(String::new());
        }
        Ok(std::fs::read_to_string(&self.path)?)
    }

    fn put_text(&mut self, text: &str) -> Result<()> {
        std::fs::write(&self.path, text)?;
        info!("Wrote {} characters to {}", text.chars().count(), self.path.display());
        Ok(())
    }
}

/// In-memory bio that records every write
#[derive(Debug, Clone, Default)]
pub struct MemoryChannel {
    current: String,
    writes: Vec<String>,
}

impl MemoryChannel {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: initial.into(),
            writes: Vec::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl BioChannel for MemoryChannel {
    fn get_text(&mut self) -> Result<String> {
        Ok(self.current.clone())
    }

    fn put_text(&mut self, text: &str) -> Result<()> {
        self.current = text.to_string();
        self.writes.push(text.to_string());
        Ok(())
    }
}
