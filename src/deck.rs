// SPDX-License-Identifier: MPL-2.0
//! Slide deck: an ordered list of slide images with one active slide.
//!
//! The deck owns the scanned file list and the rotation state. Rotation is
//! index-based with wraparound in both directions, so the active index is
//! always in bounds while the deck is non-empty. An empty deck turns every
//! rotation operation into a silent no-op.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// An ordered set of slide image paths plus the currently active index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<PathBuf>,
    current: usize,
}

impl SlideDeck {
    /// Creates a new empty deck.
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            current: 0,
        }
    }

    /// Builds a deck from an explicit slide list, starting at the first slide.
    ///
    /// Used by tests and benchmarks; production decks come from
    /// [`SlideDeck::scan_directory`].
    pub fn from_slides(slides: Vec<PathBuf>) -> Self {
        Self { slides, current: 0 }
    }

    /// Scans a directory for supported image files, sorted by file name.
    ///
    /// Unsupported files are skipped silently. Returns an error only if the
    /// directory itself cannot be read.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        let mut slides = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                slides.push(path);
            }
        }

        slides.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Ok(Self { slides, current: 0 })
    }

    /// Scans the directory containing `file` and makes `file` the active
    /// slide if it survives the scan.
    pub fn scan_from_file(file: &Path) -> Result<Self> {
        let parent = file
            .parent()
            .ok_or_else(|| Error::Io("No parent directory".into()))?;

        let mut deck = Self::scan_directory(parent)?;
        if let Some(index) = deck.slides.iter().position(|p| p == file) {
            deck.current = index;
        }
        Ok(deck)
    }

    /// Activates the slide at `index`, wrapping around in both directions.
    ///
    /// Accepts any integer: negative indices wrap from the end, indices past
    /// the end wrap from the start (Euclidean remainder). On an empty deck
    /// this is a no-op. Re-applying the current index changes nothing.
    pub fn show(&mut self, index: i64) {
        if self.slides.is_empty() {
            return;
        }
        let len = self.slides.len() as i64;
        self.current = index.rem_euclid(len) as usize;
    }

    /// Advances to the next slide, wrapping from the last to the first.
    pub fn next(&mut self) {
        self.show(self.current as i64 + 1);
    }

    /// Steps back to the previous slide, wrapping from the first to the last.
    pub fn prev(&mut self) {
        self.show(self.current as i64 - 1);
    }

    /// Returns the path of the active slide, or `None` for an empty deck.
    pub fn current(&self) -> Option<&Path> {
        self.slides.get(self.current).map(|p| p.as_path())
    }

    /// Returns the active index, or `None` for an empty deck.
    pub fn current_index(&self) -> Option<usize> {
        if self.slides.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    /// Whether the slide at `index` is the active one.
    pub fn is_active(&self, index: usize) -> bool {
        !self.slides.is_empty() && index == self.current
    }

    /// Returns the total number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Checks if the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Iterates over the slide paths in order.
    pub fn slides(&self) -> impl Iterator<Item = &Path> {
        self.slides.iter().map(|p| p.as_path())
    }
}

impl Default for SlideDeck {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    matches!(
        ext.to_ascii_lowercase().as_str(),
        "jpg" | "jpeg" | "png" | "gif" | "webp" | "bmp" | "tiff" | "tif" | "ico"
    )
}
