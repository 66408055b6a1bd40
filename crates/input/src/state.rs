//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a key counts as held until it is released or until no press/repeat for it
//! has arrived within the timeout.

use std::time::{Duration, Instant};

use crate::types::Key;

// Long enough to bridge the gap between the first keypress and the terminal's
// auto-repeat kicking in.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 500;

/// Which movement keys are currently held.
#[derive(Debug, Clone)]
pub struct KeyState {
    last_seen: [Option<Instant>; 4],
    release_timeout: Option<Duration>,
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyState {
    /// Tracker for terminals without release events.
    pub fn new() -> Self {
        Self::with_release_timeout(Some(Duration::from_millis(
            DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        )))
    }

    /// Tracker for terminals that report key releases: keys stay held until
    /// released.
    pub fn with_release_events() -> Self {
        Self::with_release_timeout(None)
    }

    pub fn with_release_timeout(release_timeout: Option<Duration>) -> Self {
        Self {
            last_seen: [None; 4],
            release_timeout,
        }
    }

    pub fn release_timeout(&self) -> Option<Duration> {
        self.release_timeout
    }

    /// Record a press or auto-repeat of `key`.
    pub fn press(&mut self, key: Key, now: Instant) {
        self.last_seen[key.index()] = Some(now);
    }

    pub fn release(&mut self, key: Key) {
        self.last_seen[key.index()] = None;
    }

    /// Release every key whose last press is older than the timeout.
    pub fn expire(&mut self, now: Instant) {
        let Some(timeout) = self.release_timeout else {
            return;
        };
        for slot in self.last_seen.iter_mut() {
            if let Some(at) = *slot {
                if now.saturating_duration_since(at) > timeout {
                    *slot = None;
                }
            }
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.last_seen[key.index()].is_some()
    }

    pub fn clear(&mut self) {
        self.last_seen = [None; 4];
    }
}
