//! Dirty flag tracking for widgets.

use bitflags::bitflags;

bitflags! {
    /// What changed on a widget since the last frame.
    ///
    /// Structural and setter changes relayout synchronously. These flags cover
    /// the deferred path: a widget that changes its own preferred size marks
    /// itself and its ancestors so the next render relayouts them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirtyFlags: u8 {
        const NONE   = 0b0000_0000;

        /// Child rectangles must be recomputed.
        const LAYOUT = 0b0000_0001;

        /// Text content or font changed, the label was re-measured.
        const TEXT   = 0b0000_0010;
    }
}

impl DirtyFlags {
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.intersects(Self::LAYOUT | Self::TEXT)
    }

    #[inline]
    pub fn should_propagate_to_parent(&self) -> bool {
        self.needs_layout()
    }

    /// Flags the parent receives when a child is marked.
    ///
    /// A child whose size inputs changed forces its parent to redistribute.
    #[inline]
    pub fn propagation_flags(&self) -> Self {
        if self.needs_layout() {
            Self::LAYOUT
        } else {
            Self::NONE
        }
    }
}

impl Default for DirtyFlags {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_flags() {
        assert!(DirtyFlags::LAYOUT.needs_layout());
        assert!(DirtyFlags::TEXT.needs_layout());
        assert!(!DirtyFlags::NONE.needs_layout());
    }

    #[test]
    fn test_propagation_flags() {
        assert_eq!(DirtyFlags::TEXT.propagation_flags(), DirtyFlags::LAYOUT);
        assert_eq!(
            (DirtyFlags::TEXT | DirtyFlags::LAYOUT).propagation_flags(),
            DirtyFlags::LAYOUT
        );
        assert_eq!(DirtyFlags::NONE.propagation_flags(), DirtyFlags::NONE);
        assert!(!DirtyFlags::NONE.should_propagate_to_parent());
    }
}
