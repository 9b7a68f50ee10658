//! Boolean page toggles (favorite, follow, read-more) and the labels
//! that swap with them. Nothing here persists; state lives for the page
//! visit only.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ToggleFlag {
    active: bool,
}

impl ToggleFlag {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flips the flag and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }
}

pub fn follow_label(following: bool) -> &'static str {
    if following {
        "Підписано"
    } else {
        "Підписатися"
    }
}

pub fn read_more_label(expanded: bool) -> &'static str {
    if expanded {
        "Читати менше"
    } else {
        "Читати більше"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_returns_to_inactive() {
        let mut favorite = ToggleFlag::default();
        assert!(!favorite.is_active());
        assert!(favorite.toggle());
        assert!(!favorite.toggle());
        assert_eq!(favorite, ToggleFlag::default());
    }

    #[test]
    fn labels_swap_with_state() {
        assert_eq!(follow_label(false), "Підписатися");
        assert_eq!(follow_label(true), "Підписано");
        assert_eq!(read_more_label(false), "Читати більше");
        assert_eq!(read_more_label(true), "Читати менше");
    }
}
