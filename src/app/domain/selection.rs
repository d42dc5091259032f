use std::ops::Range;

/// Caret plus selection anchor, in document byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    anchor: usize,
    caret: usize,
}

impl Selection {
    /// An empty selection: just a caret.
    pub fn caret_at(pos: usize) -> Self {
        Self {
            anchor: pos,
            caret: pos,
        }
    }

    pub fn new(anchor: usize, caret: usize) -> Self {
        Self { anchor, caret }
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.caret
    }

    pub fn range(&self) -> Range<usize> {
        self.anchor.min(self.caret)..self.anchor.max(self.caret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backward_selection_range_is_ordered() {
        let sel = Selection::new(8, 3);
        assert_eq!(sel.range(), 3..8);
        assert_eq!(sel.caret(), 3);
        assert!(!sel.is_empty());
    }

    #[test]
    fn test_caret_only() {
        let sel = Selection::caret_at(5);
        assert!(sel.is_empty());
        assert_eq!(sel.range(), 5..5);
    }
}
