//! Mobile drawer slice

/// Open/closed flag of the mobile overlay drawer
///
/// Independent of every other slice; the drawer's tree reads the desktop
/// expansion sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileDrawer {
    open: bool,
}

impl MobileDrawer {
    /// Flip the drawer; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        tracing::debug!("Drawer open={}", self.open);
        self.open
    }

    /// Force the drawer closed
    pub fn close(&mut self) {
        if self.open {
            tracing::debug!("Drawer closed");
        }
        self.open = false;
    }

    /// Check whether the drawer is open
    #[inline]
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }
}
