//! Read-and-reset event counter.

/// Counts events until someone consumes them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally(u32);

impl Tally {
    #[inline]
    pub fn bump(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Current count without clearing it.
    #[inline]
    pub fn peek(&self) -> u32 {
        self.0
    }

    /// Return the count and reset it to zero.
    #[inline]
    pub fn consume(&mut self) -> u32 {
        std::mem::take(&mut self.0)
    }

    #[inline]
    pub fn reset(&mut self) {
        self.0 = 0;
    }
}
