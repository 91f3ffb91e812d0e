use std::time::{Duration, Instant};

/// How long a toast stays on screen when left alone.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);
/// Fade-out time after the user dismisses a toast.
pub const TOAST_FADE: Duration = Duration::from_millis(300);

/// A transient notification shown over the picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    created_at: Instant,
    dismissed_at: Option<Instant>,
}

impl Toast {
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            created_at: now,
            dismissed_at: None,
        }
    }

    /// Start fading out. A second dismiss keeps the first fade start.
    pub fn dismiss(&mut self, now: Instant) {
        if self.dismissed_at.is_none() {
            self.dismissed_at = Some(now);
        }
    }

    pub fn is_fading(&self) -> bool {
        self.dismissed_at.is_some()
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        if now.saturating_duration_since(self.created_at) >= TOAST_LIFETIME {
            return true;
        }
        self.dismissed_at
            .is_some_and(|at| now.saturating_duration_since(at) >= TOAST_FADE)
    }
}
