//! READ MORE / SHOW LESS toggle for the product description.

use serde::Serialize;

const READ_MORE: &str = "READ MORE";
const SHOW_LESS: &str = "SHOW LESS";

/// Whether the product description is shown in full.
///
/// Starts collapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DescriptionToggle {
    expanded: bool,
}

impl DescriptionToggle {
    pub const fn new() -> Self {
        Self { expanded: false }
    }

    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flips the state and returns the new one
    pub const fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Text for the toggle button
    pub const fn button_label(&self) -> &'static str {
        if self.expanded { SHOW_LESS } else { READ_MORE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_labels() {
        let mut toggle = DescriptionToggle::new();
        assert!(!toggle.is_expanded());
        assert_eq!(toggle.button_label(), "READ MORE");

        assert!(toggle.toggle());
        assert_eq!(toggle.button_label(), "SHOW LESS");

        assert!(!toggle.toggle());
        assert_eq!(toggle.button_label(), "READ MORE");
    }
}
