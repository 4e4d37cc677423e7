use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::window::ContextWindow;

/// In-memory text of the scanned bundle. The generated artifact is mostly
/// but not necessarily entirely valid UTF-8, so undecodable bytes are
/// replaced with U+FFFD instead of failing the load. All offsets are
/// character offsets.
#[derive(Debug)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

        Ok(Self {
            text: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// Character offset of the first occurrence of `needle`, if any.
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.text
            .find(needle)
            .map(|byte_offset| self.text[..byte_offset].chars().count())
    }

    /// Slice of the document around `offset`, clamped to the document's
    /// bounds.
    pub fn window(&self, offset: usize, window: ContextWindow) -> &str {
        let span = window.clamp(offset, self.text.chars().count());
        &self.text[self.byte_offset(span.start)..self.byte_offset(span.end)]
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map_or(self.text.len(), |(byte_offset, _)| byte_offset)
    }
}

#[cfg(test)]
impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self { text: text.into() }
    }
}
