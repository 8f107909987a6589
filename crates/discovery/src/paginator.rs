// discovery/src/paginator.rs
//! Collapsed / expanded view window over a filtered result.

/// `items` when expanded, otherwise at most the first `window_size` of them
pub fn apply_window<T>(items: &[T], window_size: usize, expanded: bool) -> &[T] {
    if expanded {
        items
    } else {
        &items[..window_size.min(items.len())]
    }
}

/// Whether a "show more" control makes sense for `total` results
pub fn has_more(total: usize, window_size: usize) -> bool {
    total > window_size
}

/// A filtered result together with its window state
#[derive(Debug, Clone, Copy)]
pub struct Window<'a, T> {
    items: &'a [T],
    window_size: usize,
    expanded: bool,
}

impl<'a, T> Window<'a, T> {
    /// `expanded` only sticks when there is something beyond the window
    pub fn new(items: &'a [T], window_size: usize, expanded: bool) -> Self {
        Self {
            items,
            window_size,
            expanded: expanded && has_more(items.len(), window_size),
        }
    }

    pub fn visible(&self) -> &'a [T] {
        apply_window(self.items, self.window_size, self.expanded)
    }

    /// Number of results before windowing
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Derived from the result size, never tracked separately
    pub fn has_more(&self) -> bool {
        has_more(self.items.len(), self.window_size)
    }

    /// Flip between collapsed and expanded. A no-op when everything already fits.
    pub fn toggled(self) -> Self {
        if !self.has_more() {
            return self;
        }
        Self {
            expanded: !self.expanded,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10, 8, false, 8)]
    #[case(10, 8, true, 10)]
    #[case(3, 8, false, 3)]
    #[case(3, 8, true, 3)]
    #[case(0, 8, false, 0)]
    #[case(8, 8, false, 8)]
    fn test_apply_window_length(
        #[case] len: usize,
        #[case] window_size: usize,
        #[case] expanded: bool,
        #[case] expected: usize,
    ) {
        let items: Vec<usize> = (0..len).collect();
        assert_eq!(apply_window(&items, window_size, expanded).len(), expected);
    }

    #[test]
    fn test_apply_window_keeps_prefix_order() {
        let items = vec!["a", "b", "c", "d"];
        assert_eq!(apply_window(&items, 2, false), &["a", "b"]);
        assert_eq!(apply_window(&items, 2, true), &["a", "b", "c", "d"]);
    }

    #[rstest]
    #[case(9, 8, true)]
    #[case(8, 8, false)]
    #[case(0, 5, false)]
    fn test_has_more(#[case] total: usize, #[case] window_size: usize, #[case] expected: bool) {
        assert_eq!(has_more(total, window_size), expected);
    }

    #[test]
    fn test_window_toggle_twice_restores_state() {
        let items: Vec<usize> = (0..12).collect();
        let window = Window::new(&items, 5, false);
        assert_eq!(window.visible().len(), 5);

        let expanded = window.toggled();
        assert!(expanded.is_expanded());
        assert_eq!(expanded.visible().len(), 12);

        let collapsed = expanded.toggled();
        assert!(!collapsed.is_expanded());
        assert_eq!(collapsed.visible(), window.visible());
    }

    #[test]
    fn test_window_toggle_is_noop_when_everything_fits() {
        let items = vec![1, 2, 3];
        let window = Window::new(&items, 5, false);
        assert!(!window.has_more());
        assert!(!window.toggled().is_expanded());
        assert_eq!(window.total(), 3);
    }

    #[test]
    fn test_window_not_expanded_when_everything_fits() {
        let items = vec![1, 2];
        let window = Window::new(&items, 5, true);
        assert!(!window.is_expanded());
        assert_eq!(window.visible(), &[1, 2]);
    }
}
