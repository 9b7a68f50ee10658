//! Playback flags owned by the player, independent of the media element.
//!
//! The scrub gesture suspends playback for its whole duration and must
//! restore exactly the state it found: playing before the drag means
//! playing after it, paused means paused. While a drag is active the
//! controls auto-hide timer is suspended and the scrub position tracks
//! the pointer, not playback.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaybackFlags {
    pub is_dragging: bool,
    pub was_playing_before_drag: bool,
}

impl PlaybackFlags {
    /// Enters the dragging state, remembering whether playback was
    /// active so [`PlaybackFlags::end_drag`] can restore it.
    pub fn start_drag(&mut self, was_playing: bool) {
        self.is_dragging = true;
        self.was_playing_before_drag = was_playing;
    }

    /// Leaves the dragging state. Returns whether playback should
    /// resume.
    pub fn end_drag(&mut self) -> bool {
        self.is_dragging = false;
        self.was_playing_before_drag
    }
}

/// The auto-hide timer is only armed while playing and not scrubbing;
/// paused video keeps its controls on screen.
pub fn auto_hide_allowed(is_playing: bool, is_dragging: bool) -> bool {
    is_playing && !is_dragging
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_restores_playing_state() {
        let mut flags = PlaybackFlags::default();

        flags.start_drag(true);
        assert!(flags.is_dragging);
        assert!(flags.end_drag());
        assert!(!flags.is_dragging);

        flags.start_drag(false);
        assert!(!flags.end_drag());
        assert!(!flags.is_dragging);
    }

    #[test]
    fn auto_hide_suspended_while_paused_or_dragging() {
        assert!(auto_hide_allowed(true, false));
        assert!(!auto_hide_allowed(true, true));
        assert!(!auto_hide_allowed(false, false));
        assert!(!auto_hide_allowed(false, true));
    }
}
