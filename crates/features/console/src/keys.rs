use crate::error::{MenuError, MenuErrorExt};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal;
use std::collections::VecDeque;
use tracing::trace;

/// A single keypress as seen by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// Any key without a character (arrows, function keys, ...).
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Self::Char(c),
            _ => Self::Other,
        }
    }
}

/// Source of keypresses. Each call blocks until exactly one key is available.
pub trait KeySource {
    /// # Errors
    /// Returns [`MenuError`] if no key can be read.
    fn next_key(&mut self) -> Result<Key, MenuError>;
}

/// Reads keys from the controlling terminal.
///
/// Raw mode is enabled only while waiting for a key, so actions print with
/// normal line discipline.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<Key, MenuError> {
        let code = {
            let _raw = RawMode::enable()?;
            read_press()?
        };

        // Raw mode is off again; stderr lines need their carriage return.
        trace!(?code, "Key pressed");
        Ok(Key::from(code))
    }
}

fn read_press() -> Result<KeyCode, MenuError> {
    loop {
        let ev = event::read().context("Failed to read terminal event")?;
        if let Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. }) = ev {
            return Ok(code);
        }
    }
}

struct RawMode;

impl RawMode {
    fn enable() -> Result<Self, MenuError> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Replays a fixed key sequence; fails once it runs dry.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self { keys: keys.into_iter().collect() }
    }

    /// Builds a script from characters, one key per char.
    #[must_use]
    pub fn from_chars(chars: &str) -> Self {
        Self::new(chars.chars().map(Key::Char))
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<Key, MenuError> {
        self.keys.pop_front().ok_or_else(|| "Key script exhausted".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_codes_map_to_keys() {
        assert_eq!(Key::from(KeyCode::Char('3')), Key::Char('3'));
        assert_eq!(Key::from(KeyCode::Enter), Key::Other);
        assert_eq!(Key::from(KeyCode::F(1)), Key::Other);
    }

    #[test]
    fn scripted_keys_replay_in_order_then_fail() {
        let mut keys = ScriptedKeys::new([Key::Char('1'), Key::Other]);
        assert_eq!(keys.next_key().ok(), Some(Key::Char('1')));
        assert_eq!(keys.next_key().ok(), Some(Key::Other));
        assert_eq!(keys.remaining(), 0);
        assert!(matches!(keys.next_key(), Err(MenuError::Internal { .. })));
    }

    #[test]
    fn from_chars_maps_every_char() {
        let keys = ScriptedKeys::from_chars("3x ");
        assert_eq!(keys.remaining(), 3);
    }
}
