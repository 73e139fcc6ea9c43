//! Edge, hold and chord detection for the two buttons
//!
//! The buttons are sampled once per frame. Left and right are the physical
//! buttons; the chord is a third, derived button that is down while both
//! physical ones are.
//!
//! A chord is pressed on the sample both buttons become down together.
//! Releases are tracked with a latch: it is set as soon as both buttons are
//! down and cleared only when both are up again. While it is set (or on the
//! sample it clears) single-button releases are swallowed, so letting go of a
//! chord one finger at a time reports a single chord release and nothing
//! else. Re-forming the chord before both buttons are up presses it again.

use core::convert::TryFrom;

use heapless::{consts::U8, Vec};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Button {
    Left,
    Right,
    /// Both buttons at once
    Chord,
}

impl TryFrom<u8> for Button {
    type Error = &'static str;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Button::Left),
            1 => Ok(Button::Right),
            2 => Ok(Button::Chord),
            _ => Err("Unknown button"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Event {
    Pressed(Button),
    Released(Button),
}

/// State of the buttons after the latest sample
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct InputSnapshot {
    pub curr_left: bool,
    pub curr_right: bool,
    pub last_left: bool,
    pub last_right: bool,
    /// Milliseconds left has been continuously down, 0 while up
    pub left_hold: u32,
    /// Milliseconds right has been continuously down, 0 while up
    pub right_hold: u32,
    pub chord_latch: bool,
    pub last_chord_latch: bool,
    pub last_sample: u32,
}

#[derive(Debug, Default, Clone)]
pub struct Input {
    state: InputSnapshot,
}

impl Input {
    pub fn new() -> Self {
        Self {
            state: InputSnapshot::default(),
        }
    }

    /// Load the current levels without producing any edge
    ///
    /// A button already down at this point is reported as held, never as
    /// pressed, and hold time starts counting from `now`.
    pub fn prime(&mut self, left: bool, right: bool, now: u32) {
        let chord = left && right;
        self.state = InputSnapshot {
            curr_left: left,
            curr_right: right,
            last_left: left,
            last_right: right,
            chord_latch: chord,
            last_chord_latch: chord,
            last_sample: now,
            ..InputSnapshot::default()
        };
    }

    /// Take one sample, `true` meaning pressed
    ///
    /// Must be called exactly once per frame, before any query.
    pub fn update(&mut self, left: bool, right: bool, now: u32) {
        let s = &mut self.state;
        s.last_left = s.curr_left;
        s.last_right = s.curr_right;
        s.last_chord_latch = s.chord_latch;

        s.curr_left = left;
        s.curr_right = right;

        let dt = now.wrapping_sub(s.last_sample);
        s.last_sample = now;

        s.left_hold = if left { s.left_hold.saturating_add(dt) } else { 0 };
        s.right_hold = if right { s.right_hold.saturating_add(dt) } else { 0 };

        if left && right {
            s.chord_latch = true;
        } else if !left && !right {
            s.chord_latch = false;
        }
    }

    /// Whether `button` went down on this sample
    ///
    /// A physical button that completes a chord only reports the chord.
    pub fn pressed(&self, button: Button) -> bool {
        let s = &self.state;
        match button {
            Button::Left => s.curr_left && !s.last_left && !self.chord(),
            Button::Right => s.curr_right && !s.last_right && !self.chord(),
            Button::Chord => self.chord() && !(s.last_left && s.last_right),
        }
    }

    /// Whether `button` went up on this sample
    ///
    /// The chord is released when its last button is let go.
    pub fn released(&self, button: Button) -> bool {
        let s = &self.state;
        let unwinding = s.chord_latch || s.last_chord_latch;
        match button {
            Button::Left => !s.curr_left && s.last_left && !unwinding,
            Button::Right => !s.curr_right && s.last_right && !unwinding,
            Button::Chord => !s.chord_latch && s.last_chord_latch,
        }
    }

    /// Whether `button` is down
    ///
    /// Left and right count as held only while the other button is up.
    pub fn held(&self, button: Button) -> bool {
        let s = &self.state;
        match button {
            Button::Left => s.curr_left && !s.curr_right,
            Button::Right => s.curr_right && !s.curr_left,
            Button::Chord => self.chord(),
        }
    }

    /// Both buttons down
    pub fn chord(&self) -> bool {
        self.state.curr_left && self.state.curr_right
    }

    /// Milliseconds `button` has been continuously down, always 0 for chord
    pub fn hold_time(&self, button: Button) -> u32 {
        match button {
            Button::Left => self.state.left_hold,
            Button::Right => self.state.right_hold,
            Button::Chord => 0,
        }
    }

    /// `pressed` by numeric id (0 left, 1 right, 2 chord), false for others
    pub fn pressed_id(&self, id: u8) -> bool {
        Button::try_from(id).map_or(false, |button| self.pressed(button))
    }

    /// `released` by numeric id, false for unknown ids
    pub fn released_id(&self, id: u8) -> bool {
        Button::try_from(id).map_or(false, |button| self.released(button))
    }

    /// `held` by numeric id, false for unknown ids
    pub fn held_id(&self, id: u8) -> bool {
        Button::try_from(id).map_or(false, |button| self.held(button))
    }

    /// `hold_time` by numeric id, 0 for unknown ids
    pub fn hold_time_id(&self, id: u8) -> u32 {
        Button::try_from(id).map_or(0, |button| self.hold_time(button))
    }

    /// Edges of this sample, left first, chord last
    pub fn events(&self) -> Vec<Event, U8> {
        let mut events = Vec::new();
        for &button in &[Button::Left, Button::Right, Button::Chord] {
            if self.pressed(button) {
                let _ = events.push(Event::Pressed(button));
            }
            if self.released(button) {
                let _ = events.push(Event::Released(button));
            }
        }
        events
    }

    pub fn snapshot(&self) -> &InputSnapshot {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Button::*;
    use super::Event::*;

    const DT: u32 = 16;

    /// Feed `(left, right)` samples `DT` ms apart, collecting each sample's
    /// events
    fn run(input: &mut Input, samples: &[(bool, bool)]) -> std::vec::Vec<Vec<Event, U8>> {
        let mut now = input.snapshot().last_sample;
        samples
            .iter()
            .map(|&(left, right)| {
                now += DT;
                input.update(left, right, now);
                input.events()
            })
            .collect()
    }

    #[test]
    fn chord_unwinding_reports_only_chord() {
        let mut input = Input::new();
        let events = run(
            &mut input,
            &[(true, false), (true, true), (false, true), (false, false)],
        );

        assert_eq!(&events[0][..], &[Pressed(Left)]);
        assert_eq!(&events[1][..], &[Pressed(Chord)]);
        assert!(events[2].is_empty());
        assert_eq!(&events[3][..], &[Released(Chord)]);
    }

    #[test]
    fn right_completing_chord_is_not_pressed() {
        let mut input = Input::new();
        input.update(true, false, 10);
        input.update(true, true, 20);
        assert!(!input.pressed(Right));
        assert!(input.pressed(Chord));
        assert!(input.chord());
        assert!(input.held(Chord));
        assert!(!input.held(Left));
        assert!(!input.held(Right));
    }

    #[test]
    fn simultaneous_press_and_release() {
        let mut input = Input::new();
        let events = run(&mut input, &[(true, true), (true, true), (false, false)]);
        assert_eq!(&events[0][..], &[Pressed(Chord)]);
        assert!(events[1].is_empty());
        assert_eq!(&events[2][..], &[Released(Chord)]);
    }

    #[test]
    fn single_button_cycle() {
        let mut input = Input::new();
        let events = run(&mut input, &[(false, true), (false, true), (false, false)]);
        assert_eq!(&events[0][..], &[Pressed(Right)]);
        assert!(events[1].is_empty());
        assert_eq!(&events[2][..], &[Released(Right)]);
        assert!(!input.held(Right));
    }

    #[test]
    fn chord_reformed_while_unwinding_is_pressed_again() {
        let mut input = Input::new();
        let events = run(
            &mut input,
            &[(true, true), (false, true), (true, true), (false, false)],
        );
        assert_eq!(&events[0][..], &[Pressed(Chord)]);
        assert!(events[1].is_empty());
        assert_eq!(&events[2][..], &[Pressed(Chord)]);
        assert_eq!(&events[3][..], &[Released(Chord)]);
    }

    #[test]
    fn reformed_chord_press_is_not_lost() {
        let mut input = Input::new();
        input.update(true, true, 16);
        input.update(false, true, 32);
        input.update(true, true, 48);
        assert!(input.pressed(Chord));
        assert!(!input.pressed(Left));
        assert!(input.chord());
        assert_eq!(input.hold_time(Right), 48);
        assert_eq!(input.hold_time(Left), 16);
    }

    #[test]
    fn release_after_chord_is_reported_again() {
        let mut input = Input::new();
        let events = run(
            &mut input,
            &[(true, true), (false, false), (true, false), (false, false)],
        );
        assert_eq!(&events[2][..], &[Pressed(Left)]);
        assert_eq!(&events[3][..], &[Released(Left)]);
    }

    #[test]
    fn held_is_exclusive_with_chord() {
        let mut input = Input::new();
        input.update(true, false, 1);
        assert!(input.held(Left) && !input.held(Right) && !input.held(Chord));
        input.update(true, true, 2);
        assert!(!input.held(Left) && !input.held(Right) && input.held(Chord));
        input.update(false, true, 3);
        assert!(!input.held(Left) && input.held(Right) && !input.held(Chord));
    }

    #[test]
    fn hold_time_accumulates_and_resets() {
        let mut input = Input::new();
        input.prime(false, false, 1000);

        input.update(true, false, 1010);
        assert_eq!(input.hold_time(Left), 10);
        input.update(true, true, 1030);
        assert_eq!(input.hold_time(Left), 30);
        assert_eq!(input.hold_time(Right), 20);
        input.update(true, false, 1035);
        assert_eq!(input.hold_time(Left), 35);
        assert_eq!(input.hold_time(Right), 0);
        input.update(false, false, 1040);
        assert_eq!(input.hold_time(Left), 0);
        assert_eq!(input.hold_time(Chord), 0);
    }

    #[test]
    fn hold_time_survives_clock_wrap_and_saturates() {
        let mut input = Input::new();
        input.prime(false, false, u32::MAX - 5);
        input.update(true, false, 4);
        assert_eq!(input.hold_time(Left), 10);

        input.update(true, false, u32::MAX);
        input.update(true, false, u32::MAX - 1);
        assert_eq!(input.hold_time(Left), u32::MAX);
    }

    #[test]
    fn primed_button_is_held_but_not_pressed() {
        let mut input = Input::new();
        input.prime(true, false, 500);
        assert!(!input.pressed(Left));
        assert!(input.held(Left));

        input.update(true, false, 516);
        assert!(!input.pressed(Left));
        assert!(input.held(Left));
        assert_eq!(input.hold_time(Left), 16);

        input.update(false, false, 532);
        assert!(input.released(Left));
    }

    #[test]
    fn primed_chord_releases_as_chord() {
        let mut input = Input::new();
        input.prime(true, true, 0);
        let events = run(&mut input, &[(true, true), (true, false), (false, false)]);
        assert!(events[0].is_empty());
        assert!(events[1].is_empty());
        assert_eq!(&events[2][..], &[Released(Chord)]);
    }

    #[test]
    fn last_state_tracks_previous_sample() {
        let mut input = Input::new();
        input.update(true, false, 1);
        input.update(false, true, 2);
        let snapshot = input.snapshot();
        assert_eq!(
            (snapshot.last_left, snapshot.last_right),
            (true, false)
        );
        assert_eq!(
            (snapshot.curr_left, snapshot.curr_right),
            (false, true)
        );
    }

    #[test]
    fn numeric_ids() {
        let mut input = Input::new();
        input.update(true, false, 16);
        assert!(input.pressed_id(0));
        assert!(!input.pressed_id(1));
        assert!(input.held_id(0));
        assert_eq!(input.hold_time_id(0), 16);
        assert!(!input.pressed_id(3));
        assert!(!input.released_id(200));
        assert!(!input.held_id(7));
        assert_eq!(input.hold_time_id(9), 0);
        assert_eq!(Button::try_from(2), Ok(Chord));
        assert_eq!(Button::try_from(3), Err("Unknown button"));
    }
}
