//! Mute toggle with volume memory.
//!
//! Muting remembers the level the player was at so unmuting restores it
//! exactly instead of snapping back to full volume.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeMemory {
    muted: bool,
    previous: f64,
}

impl Default for VolumeMemory {
    fn default() -> Self {
        Self {
            muted: false,
            previous: 1.0,
        }
    }
}

impl VolumeMemory {
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Mutes, remembering `current_volume` for the next unmute.
    pub fn mute(&mut self, current_volume: f64) {
        self.previous = if current_volume.is_finite() {
            current_volume.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.muted = true;
    }

    /// Unmutes and returns the volume to restore.
    pub fn unmute(&mut self) -> f64 {
        self.muted = false;
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmute_restores_the_premute_level() {
        let mut volume = VolumeMemory::default();
        volume.mute(0.35);
        assert!(volume.is_muted());
        assert_eq!(volume.unmute(), 0.35);
        assert!(!volume.is_muted());
    }

    #[test]
    fn remembered_level_is_clamped() {
        let mut volume = VolumeMemory::default();
        volume.mute(1.8);
        assert_eq!(volume.unmute(), 1.0);
        volume.mute(-0.2);
        assert_eq!(volume.unmute(), 0.0);
        volume.mute(f64::NAN);
        assert_eq!(volume.unmute(), 1.0);
    }

    #[test]
    fn repeated_mutes_track_the_latest_level() {
        let mut volume = VolumeMemory::default();
        volume.mute(0.7);
        volume.unmute();
        volume.mute(0.2);
        assert_eq!(volume.unmute(), 0.2);
    }
}
