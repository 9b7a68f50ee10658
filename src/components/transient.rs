//! Bookkeeping for UI flags that revert after a delay.
//!
//! A `TransientState` owns a boolean flag together with a generation
//! counter. Every activation bumps the generation and hands it to the
//! timer armed for the revert; a timer may only flip the flag back if its
//! generation is still current. Re-activating therefore invalidates any
//! pending revert, so at most one armed timer can ever take effect.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransientState {
    active: bool,
    generation: u64,
}

impl TransientState {
    pub fn new(active: bool) -> Self {
        Self {
            active,
            generation: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Sets the flag and returns the generation the revert timer must
    /// present to [`TransientState::try_expire`].
    pub fn activate(&mut self) -> u64 {
        self.active = true;
        self.generation += 1;
        self.generation
    }

    /// Clears the flag if `generation` is still current. Returns whether
    /// the flag was cleared.
    pub fn try_expire(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.active {
            self.active = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_arms_a_single_generation() {
        let mut state = TransientState::default();
        let first = state.activate();
        let second = state.activate();
        assert!(state.is_active());

        // The stale timer must not clear the flag.
        assert!(!state.try_expire(first));
        assert!(state.is_active());

        assert!(state.try_expire(second));
        assert!(!state.is_active());
    }

    #[test]
    fn expired_generation_cannot_fire_twice() {
        let mut state = TransientState::default();
        let generation = state.activate();
        assert!(state.try_expire(generation));
        assert!(!state.try_expire(generation));
    }

    #[test]
    fn starts_in_requested_state() {
        assert!(TransientState::new(true).is_active());
        assert!(!TransientState::new(false).is_active());
    }
}
