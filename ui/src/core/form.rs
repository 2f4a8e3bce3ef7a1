//! State machine backing the greeting form.
//!
//! The component layer owns a `Signal<GreetingForm>` and drives it through
//! the three operations below; the machine itself knows nothing about
//! signals, events, or the server function. Submission is guarded so that at
//! most one call is ever in flight per form instance.

/// Lifecycle of a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GreetingForm {
    name: String,
    greeting: Option<String>,
    error: Option<String>,
    phase: Phase,
}

impl GreetingForm {
    /// Keystroke update. Never touches the greeting, error, or phase.
    pub fn set_name(&mut self, value: String) {
        self.name = value;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn greeting(&self) -> Option<&str> {
        self.greeting.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Attempt the `Idle → Submitting` transition.
    ///
    /// Returns the request payload to send, or `None` when the trimmed name
    /// is empty or a call is already in flight (both leave the machine
    /// untouched). The name is sent as typed; trimming is the service's job.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.phase == Phase::Submitting || self.name.trim().is_empty() {
            return None;
        }

        self.error = None;
        self.phase = Phase::Submitting;
        Some(self.name.clone())
    }

    /// Successful settle: store the greeting and return to `Idle`.
    pub fn settle_ok(&mut self, greeting: String) {
        self.greeting = Some(greeting);
        self.phase = Phase::Idle;
    }

    /// Failed settle: surface the message and return to `Idle`. The last
    /// successful greeting is left in place.
    pub fn settle_err(&mut self, message: String) {
        self.error = Some(message);
        self.phase = Phase::Idle;
    }
}
