#![forbid(unsafe_code)]

//! The profile card: typewriter reveal, spin-guarded switching and hover.
//!
//! A [`ProfileCard`] owns its profile list, the active index, the visible
//! typewriter state and a [`TimerQueue`] of [`CardTimer`] events. Nothing
//! happens on its own: the host calls [`ProfileCard::advance`] with elapsed
//! time and every timer due in that window fires in deadline order.
//!
//! # Timeline (defaults)
//!
//! ```text
//! initialize    t=0
//! name chars    t=500, 600, ... one per 100ms
//! name done     one interval after the last char, blink stops
//! handle chars  200ms later, one per 100ms
//! complete      one interval after the last handle char
//! ```
//!
//! At most one start/pause timer, one per-character timer and one blink
//! ticker are armed at any time. Switching profiles runs on separate spin
//! timers that typing resets leave alone.

use std::time::Duration;

use folio_core::{TimerId, TimerQueue};
use folio_style::{Glow, LinearGradient};
use unicode_segmentation::UnicodeSegmentation;

use crate::config::TypewriterConfig;
use crate::profile::{Profile, ProfileList};

/// Scale applied to the switch button.
pub const BUTTON_SCALE: f32 = 0.9;

/// Where the typewriter is in its reveal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Waiting for the first name character.
    #[default]
    Idle,
    /// Revealing the name.
    TypingName,
    /// Name done, waiting to start the handle.
    InterPause,
    /// Revealing the handle.
    TypingHandle,
    /// Both fields fully shown. `typing_complete` is additionally false
    /// when the handle is empty.
    Complete,
}

/// Events carried by the card's timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardTimer {
    /// Enter [`Phase::TypingName`].
    BeginName,
    /// Reveal the next name grapheme.
    NameStep,
    /// Enter [`Phase::TypingHandle`].
    BeginHandle,
    /// Reveal the next handle grapheme.
    HandleStep,
    /// Toggle the active field's cursor.
    Blink,
    /// Move to the next profile.
    SpinAdvance,
    /// End the spin window.
    SpinSettle,
}

/// Visible typewriter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterState {
    displayed_name: String,
    displayed_handle: String,
    name_cursor: usize,
    handle_cursor: usize,
    show_name_cursor: bool,
    show_handle_cursor: bool,
    typing_name: bool,
    typing_handle: bool,
    typing_complete: bool,
    phase: Phase,
}

impl Default for TypewriterState {
    fn default() -> Self {
        Self {
            show_name_cursor: true,
            ..Self::cleared()
        }
    }
}

impl TypewriterState {
    fn cleared() -> Self {
        Self {
            displayed_name: String::new(),
            displayed_handle: String::new(),
            name_cursor: 0,
            handle_cursor: 0,
            show_name_cursor: false,
            show_handle_cursor: false,
            typing_name: false,
            typing_handle: false,
            typing_complete: false,
            phase: Phase::Idle,
        }
    }

    /// Revealed prefix of the name.
    #[must_use]
    pub fn displayed_name(&self) -> &str {
        &self.displayed_name
    }

    /// Revealed prefix of the handle.
    #[must_use]
    pub fn displayed_handle(&self) -> &str {
        &self.displayed_handle
    }

    /// Revealed name length in grapheme clusters.
    #[must_use]
    pub fn name_cursor(&self) -> usize {
        self.name_cursor
    }

    /// Revealed handle length in grapheme clusters.
    #[must_use]
    pub fn handle_cursor(&self) -> usize {
        self.handle_cursor
    }

    #[must_use]
    pub fn show_name_cursor(&self) -> bool {
        self.show_name_cursor
    }

    #[must_use]
    pub fn show_handle_cursor(&self) -> bool {
        self.show_handle_cursor
    }

    #[must_use]
    pub fn typing_name(&self) -> bool {
        self.typing_name
    }

    #[must_use]
    pub fn typing_handle(&self) -> bool {
        self.typing_handle
    }

    #[must_use]
    pub fn typing_complete(&self) -> bool {
        self.typing_complete
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[derive(Debug, Clone, Default)]
struct Slots {
    phase: Option<TimerId>,
    step: Option<TimerId>,
    blink: Option<TimerId>,
    spin_advance: Option<TimerId>,
    spin_settle: Option<TimerId>,
}

/// A profile card instance.
#[derive(Debug, Clone)]
pub struct ProfileCard {
    profiles: ProfileList,
    index: usize,
    config: TypewriterConfig,
    state: TypewriterState,
    timers: TimerQueue<CardTimer>,
    slots: Slots,
    spinning: bool,
    image_hovered: bool,
}

impl Default for ProfileCard {
    fn default() -> Self {
        Self::new(ProfileList::bundled(), TypewriterConfig::default())
    }
}

impl ProfileCard {
    /// Create an idle card showing the first profile. Nothing is scheduled
    /// until [`initialize`](Self::initialize).
    #[must_use]
    pub fn new(profiles: ProfileList, config: TypewriterConfig) -> Self {
        Self {
            profiles,
            index: 0,
            config,
            state: TypewriterState::default(),
            timers: TimerQueue::new(),
            slots: Slots::default(),
            spinning: false,
            image_hovered: false,
        }
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Schedule the name reveal after the startup delay.
    pub fn initialize(&mut self) {
        tracing::debug!(delay = ?self.config.startup_delay, "typewriter initialized");
        self.arm_phase(self.config.startup_delay, CardTimer::BeginName);
    }

    /// Cancel typing, clear both fields and restart after the restart delay.
    ///
    /// Spin timers are unaffected.
    pub fn reset(&mut self) {
        self.cancel_typing();
        self.state = TypewriterState::cleared();
        tracing::debug!(index = self.index, "typewriter reset");
        self.arm_phase(self.config.restart_delay, CardTimer::BeginName);
    }

    /// Start a switch to the next profile. Returns `false` while a switch is
    /// already in progress.
    pub fn switch_profile(&mut self) -> bool {
        if self.spinning {
            tracing::trace!("switch ignored while spinning");
            return false;
        }
        self.spinning = true;
        let settle = self.config.spin_duration.max(self.config.spin_advance);
        self.slots.spin_advance = Some(
            self.timers
                .schedule_after(self.config.spin_advance, CardTimer::SpinAdvance),
        );
        self.slots.spin_settle = Some(
            self.timers
                .schedule_after(settle, CardTimer::SpinSettle),
        );
        tracing::debug!(from = self.index, "profile switch started");
        true
    }

    /// Jump to `index` (wrapping). Restarts typing when the active profile
    /// changes; returns whether it did.
    pub fn select_profile(&mut self, index: usize) -> bool {
        let index = index % self.profiles.len();
        if index == self.index {
            return false;
        }
        self.index = index;
        self.reset();
        true
    }

    /// Cancel every pending timer, spin included. Displayed text stays as is.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.slots = Slots::default();
        self.spinning = false;
        tracing::debug!("profile card torn down");
    }

    /// Alias of [`teardown`](Self::teardown).
    pub fn cleanup(&mut self) {
        self.teardown();
    }

    pub fn set_image_hovered(&mut self, hovered: bool) {
        self.image_hovered = hovered;
    }

    /// Fire every timer due within `dt`, in deadline order, then move the
    /// clock to `now + dt`. Timers armed while firing also fire if due in
    /// the window.
    pub fn advance(&mut self, dt: Duration) {
        let limit = self.timers.now().saturating_add(dt);
        while let Some((_, timer)) = self.timers.pop_due(limit) {
            self.fire(timer);
        }
        self.timers.advance_clock(limit);
    }

    // -----------------------------------------------------------------------
    // Clock
    // -----------------------------------------------------------------------

    /// Virtual time since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Time until the next timer fires; `None` when the card is at rest.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.timers.time_until_next()
    }

    /// Pending timer events in firing order.
    pub fn pending_timers(&self) -> impl Iterator<Item = &CardTimer> {
        self.timers.pending_events()
    }

    #[must_use]
    pub fn pending_timer_count(&self) -> usize {
        self.timers.len()
    }

    // -----------------------------------------------------------------------
    // Derived values
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn state(&self) -> &TypewriterState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    #[must_use]
    pub fn profiles(&self) -> &ProfileList {
        &self.profiles
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current_profile(&self) -> &Profile {
        self.profiles.get_wrapped(self.index)
    }

    #[must_use]
    pub fn font(&self) -> &str {
        self.current_profile().font_id()
    }

    #[must_use]
    pub fn text_size(&self) -> &str {
        self.current_profile().text_size_id()
    }

    #[must_use]
    pub fn gradient(&self) -> LinearGradient {
        self.current_profile().linear_gradient()
    }

    /// Picture glow for the current hover state.
    #[must_use]
    pub fn glow(&self) -> Glow {
        self.current_profile().glow(self.image_hovered)
    }

    #[must_use]
    pub fn button_scale(&self) -> f32 {
        BUTTON_SCALE
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    #[must_use]
    pub fn is_image_hovered(&self) -> bool {
        self.image_hovered
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn fire(&mut self, timer: CardTimer) {
        tracing::trace!(?timer, now = ?self.timers.now(), "card timer");
        match timer {
            CardTimer::BeginName => {
                self.slots.phase = None;
                self.begin_name();
            }
            CardTimer::NameStep => {
                self.slots.step = None;
                self.step_name();
            }
            CardTimer::BeginHandle => {
                self.slots.phase = None;
                self.begin_handle();
            }
            CardTimer::HandleStep => {
                self.slots.step = None;
                self.step_handle();
            }
            CardTimer::Blink => match self.state.phase {
                Phase::TypingName => self.state.show_name_cursor = !self.state.show_name_cursor,
                Phase::TypingHandle => {
                    self.state.show_handle_cursor = !self.state.show_handle_cursor;
                }
                _ => {}
            },
            CardTimer::SpinAdvance => {
                self.slots.spin_advance = None;
                self.index = (self.index + 1) % self.profiles.len();
                tracing::debug!(index = self.index, "profile advanced");
                self.reset();
            }
            CardTimer::SpinSettle => {
                self.slots.spin_settle = None;
                self.spinning = false;
            }
        }
        self.sync_typing_complete();
    }

    /// `typing_complete` holds exactly when neither field is typing and a
    /// non-empty handle is fully shown.
    fn sync_typing_complete(&mut self) {
        let handle = self.profiles.get_wrapped(self.index).handle();
        let state = &mut self.state;
        state.typing_complete = !state.typing_name
            && !state.typing_handle
            && !handle.is_empty()
            && state.handle_cursor == handle.graphemes(true).count();
    }

    fn begin_name(&mut self) {
        cancel_slot(&mut self.timers, &mut self.slots.step);
        self.state.phase = Phase::TypingName;
        self.state.typing_name = true;
        self.state.typing_handle = false;
        self.state.show_name_cursor = true;
        self.state.show_handle_cursor = false;
        self.start_blink();
        self.step_name();
    }

    fn step_name(&mut self) {
        let profile = self.profiles.get_wrapped(self.index);
        if reveal_next(
            profile.name(),
            &mut self.state.displayed_name,
            &mut self.state.name_cursor,
        ) {
            self.arm_step(CardTimer::NameStep);
            return;
        }
        self.state.typing_name = false;
        self.state.show_name_cursor = false;
        self.stop_blink();
        self.state.phase = Phase::InterPause;
        tracing::debug!(name = %self.state.displayed_name, "name typed");
        self.arm_phase(self.config.inter_pause, CardTimer::BeginHandle);
    }

    fn begin_handle(&mut self) {
        cancel_slot(&mut self.timers, &mut self.slots.step);
        self.state.phase = Phase::TypingHandle;
        self.state.typing_handle = true;
        self.state.show_name_cursor = false;
        self.state.show_handle_cursor = true;
        self.start_blink();
        self.step_handle();
    }

    fn step_handle(&mut self) {
        let profile = self.profiles.get_wrapped(self.index);
        if reveal_next(
            profile.handle(),
            &mut self.state.displayed_handle,
            &mut self.state.handle_cursor,
        ) {
            self.arm_step(CardTimer::HandleStep);
            return;
        }
        self.state.typing_handle = false;
        self.state.show_handle_cursor = false;
        self.stop_blink();
        self.state.phase = Phase::Complete;
        tracing::debug!(handle = %self.state.displayed_handle, "typing complete");
    }

    fn arm_phase(&mut self, delay: Duration, timer: CardTimer) {
        cancel_slot(&mut self.timers, &mut self.slots.phase);
        self.slots.phase = Some(self.timers.schedule_after(delay, timer));
    }

    fn arm_step(&mut self, timer: CardTimer) {
        cancel_slot(&mut self.timers, &mut self.slots.step);
        self.slots.step = Some(self.timers.schedule_after(self.config.char_interval, timer));
    }

    fn start_blink(&mut self) {
        cancel_slot(&mut self.timers, &mut self.slots.blink);
        self.slots.blink = Some(
            self.timers
                .schedule_every(self.config.blink_interval, CardTimer::Blink),
        );
    }

    fn stop_blink(&mut self) {
        cancel_slot(&mut self.timers, &mut self.slots.blink);
    }

    fn cancel_typing(&mut self) {
        cancel_slot(&mut self.timers, &mut self.slots.phase);
        cancel_slot(&mut self.timers, &mut self.slots.step);
        cancel_slot(&mut self.timers, &mut self.slots.blink);
    }
}

fn cancel_slot(timers: &mut TimerQueue<CardTimer>, slot: &mut Option<TimerId>) {
    if let Some(id) = slot.take() {
        timers.cancel(id);
    }
}

/// Append the grapheme at `*cursor` of `target` to `shown`. Returns `false`
/// once everything is shown.
fn reveal_next(target: &str, shown: &mut String, cursor: &mut usize) -> bool {
    match target.graphemes(true).nth(*cursor) {
        Some(grapheme) => {
            shown.push_str(grapheme);
            *cursor += 1;
            true
        }
        None => false,
    }
}
