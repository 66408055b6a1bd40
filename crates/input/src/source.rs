//! Input sources polled by the game loop.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{map_key, should_quit};
use crate::state::KeyState;
use crate::types::{CancelToken, InputIntent, Key};

/// Synchronous key-state source.
pub trait InputSource {
    /// Take in pending input, waiting up to `timeout` for more.
    ///
    /// A zero timeout never blocks.
    fn poll(&mut self, timeout: Duration) -> Result<()>;

    /// Whether `key` is currently held.
    fn is_pressed(&self, key: Key) -> bool;

    /// All four keys sampled at once.
    fn intent(&self) -> InputIntent {
        Key::ALL
            .iter()
            .fold(InputIntent::idle(), |intent, &key| {
                intent.with(key, self.is_pressed(key))
            })
    }
}

/// Keyboard input from the controlling terminal via crossterm.
///
/// Quit keys cancel the shared [`CancelToken`] instead of being reported.
pub struct TerminalInput {
    keys: KeyState,
    cancel: CancelToken,
}

impl TerminalInput {
    /// `release_events` is whether the terminal reports key releases.
    pub fn new(cancel: CancelToken, release_events: bool) -> Self {
        let keys = if release_events {
            KeyState::with_release_events()
        } else {
            KeyState::new()
        };
        Self { keys, cancel }
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    /// Apply one terminal event.
    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(*key, now),
            Event::FocusLost => self.keys.clear(),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.kind {
            KeyEventKind::Press => {
                if should_quit(key) {
                    log::info!("quit requested");
                    self.cancel.cancel();
                    return;
                }
                if let Some(k) = map_key(key.code) {
                    self.keys.press(k, now);
                }
            }
            KeyEventKind::Repeat => {
                if let Some(k) = map_key(key.code) {
                    self.keys.press(k, now);
                }
            }
            KeyEventKind::Release => {
                if let Some(k) = map_key(key.code) {
                    self.keys.release(k);
                }
            }
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            let wait = deadline.saturating_duration_since(Instant::now());
            if !event::poll(wait)? {
                break;
            }
            let ev = event::read()?;
            self.handle_event(&ev, Instant::now());
            if self.cancel.is_cancelled() {
                break;
            }
        }
        self.keys.expire(Instant::now());
        Ok(())
    }

    fn is_pressed(&self, key: Key) -> bool {
        self.keys.is_pressed(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn press_and_release_events_drive_key_state() {
        let mut input = TerminalInput::new(CancelToken::new(), true);
        let now = Instant::now();

        input.handle_event(&key(KeyCode::Char('w'), KeyEventKind::Press), now);
        input.handle_event(&key(KeyCode::Left, KeyEventKind::Press), now);
        assert!(input.is_pressed(Key::Forward));
        assert!(input.is_pressed(Key::TurnLeft));
        assert_eq!(
            input.intent(),
            InputIntent::idle()
                .with(Key::Forward, true)
                .with(Key::TurnLeft, true)
        );

        input.handle_event(&key(KeyCode::Char('w'), KeyEventKind::Release), now);
        assert!(!input.is_pressed(Key::Forward));
        assert!(input.is_pressed(Key::TurnLeft));
    }

    #[test]
    fn quit_key_cancels_token() {
        let cancel = CancelToken::new();
        let mut input = TerminalInput::new(cancel.clone(), false);
        input.handle_event(&key(KeyCode::Char('q'), KeyEventKind::Press), Instant::now());
        assert!(cancel.is_cancelled());
        assert!(input.intent().is_idle());
    }

    #[test]
    fn quit_key_release_is_ignored() {
        let cancel = CancelToken::new();
        let mut input = TerminalInput::new(cancel.clone(), true);
        input.handle_event(&key(KeyCode::Esc, KeyEventKind::Release), Instant::now());
        assert!(!cancel.is_cancelled());
    }

    #[test]
    fn focus_lost_releases_keys() {
        let mut input = TerminalInput::new(CancelToken::new(), true);
        input.handle_event(&key(KeyCode::Down, KeyEventKind::Press), Instant::now());
        assert!(input.is_pressed(Key::Backward));
        input.handle_event(&Event::FocusLost, Instant::now());
        assert!(!input.is_pressed(Key::Backward));
    }

    #[test]
    fn terminal_without_release_events_uses_timeout() {
        let input = TerminalInput::new(CancelToken::new(), false);
        assert!(input.keys().release_timeout().is_some());
        let input = TerminalInput::new(CancelToken::new(), true);
        assert!(input.keys().release_timeout().is_none());
    }
}
