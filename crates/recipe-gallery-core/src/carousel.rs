//! Cyclic image switcher for the modal.

/// Index over a fixed list of image URLs, wrapping in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
}

impl Carousel {
    /// Start at the first image.
    pub fn new(images: Vec<String>) -> Self {
        Self { images, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Arrows are only shown when there is something to switch to.
    pub fn has_arrows(&self) -> bool {
        self.images.len() > 1
    }

    /// Currently displayed image, if any.
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Advance one image, wrapping from the last to the first.
    pub fn next(&mut self) -> Option<&str> {
        self.step(1)
    }

    /// Go back one image, wrapping from the first to the last.
    pub fn prev(&mut self) -> Option<&str> {
        self.step(-1)
    }

    fn step(&mut self, dir: isize) -> Option<&str> {
        let len = self.images.len();
        if len == 0 {
            return None;
        }
        // rem_euclid keeps the result in [0, len) for negative steps
        self.index = (self.index as isize + dir).rem_euclid(len as isize) as usize;
        self.current()
    }
}
