//! Admin gesture
//!
//! The admin modal is hidden behind a three-step gesture: the logo, then the
//! footer, then the header title, each within [`GESTURE_WINDOW`] of the
//! previous step. Completing the gesture only opens the token modal; access is
//! granted by the server once the token verifies.

use std::time::Duration;

use jiff::{SignedDuration, Timestamp};

/// How long the sequence waits for the next step before starting over.
pub const GESTURE_WINDOW: Duration = Duration::from_secs(8);

/// Screen regions that take part in the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureRegion {
    /// Business logo.
    Logo,

    /// Page footer.
    Footer,

    /// Header title.
    HeaderTitle,
}

const SEQUENCE: [GestureRegion; 3] = [
    GestureRegion::Logo,
    GestureRegion::Footer,
    GestureRegion::HeaderTitle,
];

/// Where the gesture currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// Nothing triggered yet.
    #[default]
    Idle,

    /// Logo triggered.
    Step1,

    /// Logo then footer triggered.
    Step2,
}

impl GestureState {
    fn completed_steps(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Step1 => 1,
            Self::Step2 => 2,
        }
    }

    fn after_steps(steps: usize) -> Self {
        match steps {
            1 => Self::Step1,
            2 => Self::Step2,
            _ => Self::Idle,
        }
    }
}

/// What a trigger did to the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The sequence moved forward and waits for the next step.
    Advanced(GestureState),

    /// The sequence completed; the token modal should open.
    ModalOpened,

    /// The trigger was out of order and the sequence went back to idle.
    Reset,
}

/// Gesture state machine.
#[derive(Debug, Clone, Default)]
pub struct AdminGesture {
    state: GestureState,
    deadline: Option<Timestamp>,
}

impl AdminGesture {
    /// A machine in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state as of `now`, accounting for a lapsed window.
    pub fn state(&self, now: Timestamp) -> GestureState {
        if self.expired(now) {
            GestureState::Idle
        } else {
            self.state
        }
    }

    fn expired(&self, now: Timestamp) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.deadline = None;
    }

    fn advance(&mut self, now: Timestamp) -> GestureOutcome {
        let steps = self.state.completed_steps() + 1;

        if steps >= SEQUENCE.len() {
            self.reset();
            return GestureOutcome::ModalOpened;
        }

        self.state = GestureState::after_steps(steps);
        self.deadline = SignedDuration::try_from(GESTURE_WINDOW)
            .ok()
            .and_then(|window| now.checked_add(window).ok());

        GestureOutcome::Advanced(self.state)
    }

    /// Record a trigger on `region` at `now`.
    ///
    /// Triggering the logo out of order restarts the sequence at step one;
    /// any other out-of-order trigger resets to idle.
    pub fn trigger(&mut self, region: GestureRegion, now: Timestamp) -> GestureOutcome {
        if self.expired(now) {
            self.reset();
        }

        let expected = SEQUENCE.get(self.state.completed_steps()).copied();

        if expected == Some(region) {
            return self.advance(now);
        }

        self.reset();

        if region == GestureRegion::Logo {
            return self.advance(now);
        }

        GestureOutcome::Reset
    }
}

/// Whether a key press is the admin shortcut (Ctrl+Shift+A).
///
/// Ignored while a text input has focus.
pub fn is_admin_shortcut(ctrl: bool, shift: bool, key: char, in_text_input: bool) -> bool {
    !in_text_input && ctrl && shift && key.eq_ignore_ascii_case(&'a')
}

/// Result of a token submission as seen by the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyResult {
    /// The server accepted the token.
    Accepted(Option<String>),

    /// The server rejected the token or could not be reached.
    Rejected(String),
}

/// Token entry modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminModal {
    open: bool,
    unlocked: bool,
    message: Option<String>,
}

impl AdminModal {
    /// A closed, locked modal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal with a cleared message.
    pub fn open(&mut self) {
        self.open = true;
        self.message = None;
    }

    /// Close the modal without unlocking.
    pub fn close(&mut self) {
        self.open = false;
        self.message = None;
    }

    /// Apply a verification result.
    ///
    /// Acceptance unlocks the admin panel and closes the modal; rejection
    /// keeps it open with the message shown inline.
    pub fn submit(&mut self, result: VerifyResult) {
        match result {
            VerifyResult::Accepted(_) => {
                self.unlocked = true;
                self.close();
            }
            VerifyResult::Rejected(message) => {
                self.message = Some(message);
            }
        }
    }

    /// Whether the modal is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the admin panel is unlocked.
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Inline message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
