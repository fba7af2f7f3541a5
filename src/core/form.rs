// Contact form feedback. There is no backend: validation only colors the
// fields and flips the submit button into a short confirmation.

pub const ERROR_BORDER: &str = "#ff4444";
pub const SUCCESS_BORDER: &str = "#00ff88";

pub const CONFIRMATION_MS: f64 = 2000.0;

/// Visual state of one field after a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldMark {
    Error,
    Success,
}

impl FieldMark {
    pub fn border_color(self) -> &'static str {
        match self {
            FieldMark::Error => ERROR_BORDER,
            FieldMark::Success => SUCCESS_BORDER,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    pub marks: Vec<FieldMark>,
    pub is_valid: bool,
}

/// A field passes when it holds anything besides whitespace.
pub fn validate<S: AsRef<str>>(values: &[S]) -> Validation {
    let marks: Vec<FieldMark> = values
        .iter()
        .map(|v| {
            if v.as_ref().trim().is_empty() {
                FieldMark::Error
            } else {
                FieldMark::Success
            }
        })
        .collect();
    let is_valid = marks.iter().all(|m| *m == FieldMark::Success);
    Validation { marks, is_valid }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonFace {
    Default,
    Sent,
}

impl ButtonFace {
    pub fn text(self) -> &'static str {
        match self {
            ButtonFace::Default => "Send Message",
            ButtonFace::Sent => "Message Sent!",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            ButtonFace::Default => "linear-gradient(45deg, #00ff88, #0088ff)",
            ButtonFace::Sent => "#00ff88",
        }
    }
}

/// Submit button with a timed confirmation. Times are in milliseconds.
///
/// Every valid submit schedules its own revert; a later submit does not
/// cancel an earlier one.
#[derive(Clone, Debug)]
pub struct SubmitButton {
    face: ButtonFace,
    pending: Vec<f64>,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            face: ButtonFace::Default,
            pending: Vec::new(),
        }
    }
}

impl SubmitButton {
    pub fn face(&self) -> ButtonFace {
        self.face
    }

    /// Record a submit attempt. Returns the deadline to poll at when the
    /// confirmation was shown.
    pub fn submit(&mut self, validation: &Validation, now_ms: f64) -> Option<f64> {
        if !validation.is_valid {
            return None;
        }
        let deadline = now_ms + CONFIRMATION_MS;
        self.face = ButtonFace::Sent;
        self.pending.push(deadline);
        Some(deadline)
    }

    /// Fire every revert due at `now_ms`. Returns true when at least one was
    /// due, which is also when the fields must be cleared.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let before = self.pending.len();
        self.pending.retain(|at| *at > now_ms);
        if self.pending.len() == before {
            return false;
        }
        self.face = ButtonFace::Default;
        true
    }
}
