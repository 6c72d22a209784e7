//! Product image carousel.

use serde::Serialize;

use crate::GALLERY_SLIDES;

/// Slide cursor for the product gallery.
///
/// Stepping past either end wraps to the other end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gallery {
    current: usize,
    slides: usize,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(GALLERY_SLIDES)
    }
}

impl Gallery {
    /// A gallery always has at least one slide.
    pub fn new(slides: usize) -> Self {
        Self {
            current: 0,
            slides: slides.max(1),
        }
    }

    pub const fn current(&self) -> usize {
        self.current
    }

    pub const fn slides(&self) -> usize {
        self.slides
    }

    /// Shows slide `index`. Below zero lands on the last slide, past the
    /// end on the first.
    pub fn go_to(&mut self, index: i64) -> usize {
        let last = self.slides - 1;
        self.current = match usize::try_from(index) {
            Err(_) => last,
            Ok(i) if i > last => 0,
            Ok(i) => i,
        };
        self.current
    }

    pub fn next(&mut self) -> usize {
        let index = i64::try_from(self.current).unwrap_or(i64::MAX).saturating_add(1);
        self.go_to(index)
    }

    pub fn prev(&mut self) -> usize {
        let index = i64::try_from(self.current).unwrap_or(i64::MAX) - 1;
        self.go_to(index)
    }

    /// Horizontal translation of the slide track, in percent of its width
    pub const fn offset_percent(&self) -> usize {
        self.current * 100 / self.slides
    }

    /// Active flag per navigation dot
    pub fn dots(&self) -> Vec<bool> {
        (0..self.slides).map(|i| i == self.current).collect()
    }
}
