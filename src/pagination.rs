use serde::{Deserialize, Serialize};

/// Maximum number of page links shown at once.
pub const WINDOW_SIZE: u32 = 5;

/// Bounded window of visible page links plus navigation targets, computed
/// from the current page and the total page count.
///
/// The window holds up to [`WINDOW_SIZE`] consecutive page numbers
/// centered on the current page and clamped to `[1, total]`. Navigation
/// controls are `Option<u32>` targets: `None` means the control is
/// disabled at that boundary. The gap jumps either side of the window
/// step one page outside it, the way the original `...` buttons did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    current: u32,
    total: u32,
    start: u32,
    end: u32,
}

impl PageWindow {
    /// Build the window. `current` is clamped into `[1, max(1, total)]`
    /// so the type stays total even for inputs the controller never
    /// produces.
    pub fn new(current: u32, total: u32) -> Self {
        let total = total.max(1);
        let current = current.clamp(1, total);
        let start = current.saturating_sub(WINDOW_SIZE / 2).max(1);
        let end = (start + WINDOW_SIZE - 1).min(total);
        PageWindow {
            current,
            total,
            start,
            end,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// The visible page numbers, in order.
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }

    /// Jump target for the `...` before the window, if pages are hidden
    /// on the left.
    pub fn leading_gap(&self) -> Option<u32> {
        (self.start > 1).then(|| self.start - 1)
    }

    /// Jump target for the `...` after the window, if pages are hidden
    /// on the right.
    pub fn trailing_gap(&self) -> Option<u32> {
        (self.end < self.total).then(|| self.end + 1)
    }

    /// Target of the "first page" control; disabled on page 1.
    pub fn first(&self) -> Option<u32> {
        (self.current > 1).then_some(1)
    }

    /// Target of the "previous page" control; disabled on page 1.
    pub fn previous(&self) -> Option<u32> {
        (self.current > 1).then(|| self.current - 1)
    }

    /// Target of the "next page" control; disabled on the last page.
    pub fn next(&self) -> Option<u32> {
        (self.current < self.total).then(|| self.current + 1)
    }

    /// Target of the "last page" control; disabled on the last page.
    pub fn last(&self) -> Option<u32> {
        (self.current < self.total).then_some(self.total)
    }
}
