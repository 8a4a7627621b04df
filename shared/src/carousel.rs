//! Screenshot pager used by the app detail modal.

/// Position within a fixed list of screenshots. Navigation wraps at both
/// ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenshotCarousel {
    len: usize,
    current: usize,
}

impl ScreenshotCarousel {
    /// A carousel over `len` screenshots, starting at the first.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
        }
    }

    /// Index of the visible screenshot.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of screenshots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// No screenshots at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advances, wrapping from the last screenshot to the first.
    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            current: (self.current + 1) % self.len,
            ..self
        }
    }

    /// Steps back, wrapping from the first screenshot to the last.
    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            current: (self.current + self.len - 1) % self.len,
            ..self
        }
    }

    /// Jumps to `index`, clamped to the last screenshot.
    pub fn select(self, index: usize) -> Self {
        Self {
            current: index.min(self.len.saturating_sub(1)),
            ..self
        }
    }
}
