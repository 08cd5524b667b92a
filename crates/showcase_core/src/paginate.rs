use crate::Item;

/// Page sizes offered to the user.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [4, 6, 9];
pub const DEFAULT_PAGE_SIZE: usize = 6;
pub const DEFAULT_LOAD_MORE_STEP: usize = 6;

/// Growable prefix over a sorted result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    visible: usize,
    page_size: usize,
    step: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_LOAD_MORE_STEP)
    }
}

impl PageWindow {
    /// Zero sizes are raised to one so the window can always grow.
    pub fn new(page_size: usize, step: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            visible: page_size,
            page_size,
            step: step.max(1),
        }
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }

    /// Grows the window by one step, clamped to `total`. Returns false when
    /// nothing was hidden.
    pub fn load_more(&mut self, total: usize) -> bool {
        if total <= self.visible {
            return false;
        }
        self.visible = (self.visible + self.step).min(total);
        true
    }

    /// Sets both the reset size and the current window to `page_size`.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.visible = self.page_size;
    }
}

/// The slice of a sorted result currently exposed to presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub items: Vec<&'a Item>,
    pub has_more: bool,
    pub total: usize,
}

pub fn paginate<'a>(sorted: &[&'a Item], window: &PageWindow) -> Page<'a> {
    let shown = window.visible().min(sorted.len());
    Page {
        items: sorted[..shown].to_vec(),
        has_more: sorted.len() > window.visible(),
        total: sorted.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_more_clamps_to_total() {
        let items: Vec<Item> = (0..10u64).map(|i| Item::new(i, "t", "c")).collect();
        let refs: Vec<&Item> = items.iter().collect();
        let mut window = PageWindow::default();

        let page = paginate(&refs, &window);
        assert_eq!(page.items.len(), 6);
        assert!(page.has_more);

        assert!(window.load_more(refs.len()));
        let page = paginate(&refs, &window);
        assert_eq!(page.items.len(), 10);
        assert!(!page.has_more);
        assert_eq!(window.visible(), 10);
        assert!(!window.load_more(refs.len()));
        assert_eq!(window.visible(), 10);
    }

    #[test]
    fn page_size_change_replaces_window() {
        let mut window = PageWindow::new(6, 6);
        window.load_more(20);
        assert_eq!(window.visible(), 12);
        window.set_page_size(4);
        assert_eq!(window.visible(), 4);
        window.set_page_size(9);
        assert_eq!(window.visible(), 9);
        window.load_more(20);
        window.reset();
        assert_eq!(window.visible(), 9);
    }
}
