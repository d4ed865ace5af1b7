use std::time::Duration;

use crate::timer::{TimerToken, TokenSource};

/// Auto-dismiss delay used when the host does not configure one.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Delay between mounting and the entrance transition.
pub const DEFAULT_ENTER_DELAY: Duration = Duration::from_millis(100);

/// Delay between dismissal and detachment, leaving room for the exit animation.
pub const DEFAULT_DETACH_DELAY: Duration = Duration::from_millis(300);

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

/// All toast kinds in display order.
pub const ALL_TOAST_KINDS: &[ToastKind] = &[
    ToastKind::Success,
    ToastKind::Error,
    ToastKind::Warning,
    ToastKind::Info,
];

impl ToastKind {
    /// Key used for the CSS class and the `type` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    /// Parse a kind key, falling back to `Info`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Created, entrance not yet shown.
    Pending,
    Visible,
    Dismissed,
}

/// Which one-shot timer a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTimer {
    Enter,
    AutoDismiss,
    Detach,
}

/// Work the host must carry out after a lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEffect {
    /// Start a one-shot timer and report it back through [`ToastLifecycle::fire`].
    Schedule {
        token: TimerToken,
        timer: ToastTimer,
        delay: Duration,
    },
    /// Stop a previously scheduled timer.
    Cancel(TimerToken),
    /// Emit the `toast-close` notification.
    Closed,
    /// Remove the toast from its host.
    Detach,
}

/// Fixed delays framing the visible period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    pub enter_delay: Duration,
    pub detach_delay: Duration,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            enter_delay: DEFAULT_ENTER_DELAY,
            detach_delay: DEFAULT_DETACH_DELAY,
        }
    }
}

/// Pending → Visible → Dismissed lifecycle of one toast.
///
/// At most one timer is pending at any time. Firings for any other token are
/// ignored, as is everything after [`ToastLifecycle::teardown`].
#[derive(Debug, Clone, PartialEq)]
pub struct ToastLifecycle {
    phase: ToastPhase,
    duration: Duration,
    timings: ToastTimings,
    tokens: TokenSource,
    pending: Option<(TimerToken, ToastTimer)>,
    mounted: bool,
    detached: bool,
    torn_down: bool,
}

impl ToastLifecycle {
    /// A zero `duration` disables auto-dismiss.
    pub fn new(duration: Duration) -> Self {
        Self {
            phase: ToastPhase::Pending,
            duration,
            timings: ToastTimings::default(),
            tokens: TokenSource::default(),
            pending: None,
            mounted: false,
            detached: false,
            torn_down: false,
        }
    }

    pub fn with_timings(mut self, timings: ToastTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_visible(&self) -> bool {
        self.phase == ToastPhase::Visible
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn pending_timer(&self) -> Option<(TimerToken, ToastTimer)> {
        self.pending
    }

    /// The toast was attached to its host; starts the entrance timer.
    /// Repeated calls do nothing.
    pub fn mount(&mut self) -> Vec<ToastEffect> {
        if self.mounted || self.torn_down || self.phase != ToastPhase::Pending {
            return Vec::new();
        }
        self.mounted = true;
        vec![self.schedule(ToastTimer::Enter, self.timings.enter_delay)]
    }

    /// A timer scheduled through [`ToastEffect::Schedule`] elapsed.
    pub fn fire(&mut self, token: TimerToken) -> Vec<ToastEffect> {
        if self.torn_down {
            tracing::trace!(token = token.raw(), "toast timer fired after teardown");
            return Vec::new();
        }
        let timer = match self.pending {
            Some((pending, timer)) if pending == token => timer,
            _ => {
                tracing::trace!(token = token.raw(), "stale toast timer ignored");
                return Vec::new();
            }
        };
        self.pending = None;

        match timer {
            ToastTimer::Enter => {
                self.phase = ToastPhase::Visible;
                if self.duration.is_zero() {
                    Vec::new()
                } else {
                    vec![self.schedule(ToastTimer::AutoDismiss, self.duration)]
                }
            }
            ToastTimer::AutoDismiss => self.dismiss(),
            ToastTimer::Detach => {
                self.detached = true;
                vec![ToastEffect::Detach]
            }
        }
    }

    /// The user activated the close control. Closing twice is a no-op.
    pub fn close(&mut self) -> Vec<ToastEffect> {
        if self.torn_down || self.phase == ToastPhase::Dismissed {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if let Some((token, _)) = self.pending.take() {
            effects.push(ToastEffect::Cancel(token));
        }
        effects.extend(self.dismiss());
        effects
    }

    /// The host is discarding the toast early. Cancels whatever is pending.
    pub fn teardown(&mut self) -> Vec<ToastEffect> {
        self.torn_down = true;
        self.pending
            .take()
            .map(|(token, _)| vec![ToastEffect::Cancel(token)])
            .unwrap_or_default()
    }

    fn dismiss(&mut self) -> Vec<ToastEffect> {
        self.phase = ToastPhase::Dismissed;
        vec![
            ToastEffect::Closed,
            self.schedule(ToastTimer::Detach, self.timings.detach_delay),
        ]
    }

    fn schedule(&mut self, timer: ToastTimer, delay: Duration) -> ToastEffect {
        let token = self.tokens.issue();
        self.pending = Some((token, timer));
        ToastEffect::Schedule {
            token,
            timer,
            delay,
        }
    }
}
