// src/domain/carousel.rs

/// Horizontal position inside a listing's image strip.
///
/// One step moves exactly one viewport (one image). The strip clamps at both ends
/// instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    position: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { position: 0, len }
    }

    /// `direction` is -1 for previous, +1 for next. Other magnitudes still move one image.
    pub fn scroll_by(&mut self, direction: i32) {
        match direction.signum() {
            -1 => self.position = self.position.saturating_sub(1),
            1 if self.position + 1 < self.len => self.position += 1,
            _ => {}
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Arrows and the photo counter only make sense with more than one image.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    /// Horizontal offset of the strip, in percent of the viewport.
    pub fn offset_percent(&self) -> usize {
        self.position * 100
    }
}
