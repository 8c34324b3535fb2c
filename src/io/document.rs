//! A plain-text document sink. Each booklet becomes a titled section of the
//! output file; images print as placeholders with their dimensions and size.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::render::DocumentSink;

#[derive(Debug, Default)]
pub struct TextDocument {
    content: String,
}

impl TextDocument {
    pub fn new() -> TextDocument {
        TextDocument::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.content).map_err(|e| Error::collaborator("document write", e))
    }
}

impl DocumentSink for TextDocument {
    fn create_document(&mut self, title: &str) -> Result<()> {
        if !self.content.is_empty() {
            self.content.push('\n');
        }
        self.content.push_str(&format!("=== {} ===\n", title));
        Ok(())
    }

    fn heading(&mut self, text: &str) -> Result<()> {
        self.content.push_str(&format!("\n## {}\n", text));
        Ok(())
    }

    fn paragraph(&mut self, text: &str) -> Result<()> {
        self.content.push('\n');
        self.content.push_str(text);
        self.content.push('\n');
        Ok(())
    }

    fn image(&mut self, bytes: &[u8], width: u32, height: u32) -> Result<()> {
        self.content
            .push_str(&format!("[image {}x{} {} bytes]\n", width, height, bytes.len()));
        Ok(())
    }

    fn page_break(&mut self) -> Result<()> {
        self.content.push_str("\n\u{c}\n");
        Ok(())
    }

    fn rule(&mut self) -> Result<()> {
        self.content.push_str("\n----------------------------------------\n");
        Ok(())
    }
}
