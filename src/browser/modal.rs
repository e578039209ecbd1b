// src/browser/modal.rs
use crate::domain::Carousel;

/// Which listing of the current page is open in the detail modal, if any.
///
/// The page body is scroll-locked exactly while a listing is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    open: Option<OpenListing>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenListing {
    index: usize,
    carousel: Carousel,
}

impl ModalState {
    pub fn open(&mut self, index: usize, image_count: usize) {
        self.open = Some(OpenListing {
            index,
            carousel: Carousel::new(image_count),
        });
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open.as_ref().map(|o| o.index)
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.open.as_ref().map(|o| &o.carousel)
    }

    /// Returns `false` when nothing is open.
    pub fn scroll_carousel(&mut self, direction: i32) -> bool {
        match self.open.as_mut() {
            Some(open) => {
                open.carousel.scroll_by(direction);
                true
            }
            None => false,
        }
    }

    pub fn body_scroll_locked(&self) -> bool {
        self.open.is_some()
    }
}
