#![forbid(unsafe_code)]

//! Demo model: the card, icons and translator, plus key handling.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio::{IconAsset, IconRegistry, ProfileCard, Translator};

/// What a key press asks the demo to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SwitchProfile,
    ToggleHover,
    CycleLocale,
    Restart,
    Quit,
}

/// Map a key event to an action. Releases and repeats are ignored.
#[must_use]
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }
    match key.code {
        KeyCode::Char(' ' | 's' | 'S') => Some(Action::SwitchProfile),
        KeyCode::Char('h' | 'H') => Some(Action::ToggleHover),
        KeyCode::Char('l' | 'L') => Some(Action::CycleLocale),
        KeyCode::Char('r' | 'R') => Some(Action::Restart),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Everything the demo renders.
#[derive(Debug)]
pub struct App {
    card: ProfileCard,
    icons: IconRegistry<IconAsset>,
    translator: Translator,
    elapsed: Duration,
    exit_after: Option<Duration>,
    quit: bool,
}

impl App {
    /// Build the model and start the typewriter.
    #[must_use]
    pub fn new(mut card: ProfileCard, translator: Translator) -> Self {
        card.initialize();
        Self {
            card,
            icons: IconRegistry::with_defaults(),
            translator,
            elapsed: Duration::ZERO,
            exit_after: None,
            quit: false,
        }
    }

    /// Quit automatically once `after` has elapsed.
    #[must_use]
    pub fn exit_after(mut self, after: Option<Duration>) -> Self {
        self.exit_after = after;
        self
    }

    pub fn apply(&mut self, action: Action) {
        tracing::debug!(?action, "demo action");
        match action {
            Action::SwitchProfile => {
                self.card.switch_profile();
            }
            Action::ToggleHover => {
                let hovered = self.card.is_image_hovered();
                self.card.set_image_hovered(!hovered);
            }
            Action::CycleLocale => {
                self.translator.cycle_locale();
            }
            Action::Restart => self.card.reset(),
            Action::Quit => self.quit = true,
        }
    }

    /// Feed elapsed wall-clock time into the card.
    pub fn tick(&mut self, dt: Duration) {
        self.card.advance(dt);
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.exit_after.is_some_and(|limit| self.elapsed >= limit) {
            self.quit = true;
        }
    }

    /// How long the event loop may sleep before the card needs a tick.
    #[must_use]
    pub fn poll_timeout(&self, idle: Duration) -> Duration {
        let mut timeout = self.card.time_until_next().unwrap_or(idle).min(idle);
        if let Some(limit) = self.exit_after {
            timeout = timeout.min(limit.saturating_sub(self.elapsed));
        }
        timeout
    }

    /// Cancel pending timers before exit.
    pub fn shutdown(&mut self) {
        self.card.teardown();
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    #[must_use]
    pub fn card(&self) -> &ProfileCard {
        &self.card
    }

    #[must_use]
    pub fn icons(&self) -> &IconRegistry<IconAsset> {
        &self.icons
    }

    #[must_use]
    pub fn translator(&self) -> &Translator {
        &self.translator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn key_bindings() {
        assert_eq!(action_for(press(KeyCode::Char(' '))), Some(Action::SwitchProfile));
        assert_eq!(action_for(press(KeyCode::Char('s'))), Some(Action::SwitchProfile));
        assert_eq!(action_for(press(KeyCode::Char('h'))), Some(Action::ToggleHover));
        assert_eq!(action_for(press(KeyCode::Char('l'))), Some(Action::CycleLocale));
        assert_eq!(action_for(press(KeyCode::Char('r'))), Some(Action::Restart));
        assert_eq!(action_for(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits_and_other_chords_are_ignored() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl('c')), Some(Action::Quit));
        assert_eq!(action_for(ctrl('s')), None);
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(action_for(release), None);
    }
}
