//! Image gallery selection for the item detail view.

use crate::types::Item;

/// Which of an item's images is shown large.
#[derive(Debug, Clone, Copy)]
pub struct ImageGallery<'a> {
    images: &'a [String],
    selected: usize,
}

impl<'a> ImageGallery<'a> {
    /// Starts on the first image.
    pub fn new(item: &'a Item) -> Self {
        ImageGallery {
            images: &item.images,
            selected: 0,
        }
    }

    /// Selects a thumbnail. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.selected = index;
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The large image, or `""` for an item with no images (never the case
    /// for items from a validated catalog).
    pub fn current(&self) -> &'a str {
        self.images
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// `(index, image, is_selected)` for each thumbnail.
    pub fn thumbnails(&self) -> impl Iterator<Item = (usize, &'a str, bool)> + 'a {
        let selected = self.selected;
        self.images
            .iter()
            .enumerate()
            .map(move |(index, image)| (index, image.as_str(), index == selected))
    }
}
