use iced::time::{Duration, Instant};

/// Minimum delay between two verification code requests.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(5 * 60);
/// Longest cooldown accepted from the configuration.
pub const MAX_COOLDOWN: Duration = Duration::from_secs(24 * 60 * 60);

/// Countdown started after a verification code was sent.
///
/// `end` is the source of truth, `remaining` is the value displayed to the user and is
/// refreshed once per second by [`Cooldown::tick`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cooldown {
    end: Option<Instant>,
    remaining: Option<u64>,
}

/// Seconds left before `end`, rounded to the nearest second (half up).
/// Zero means the cooldown is over.
pub fn remaining_secs(end: Instant, now: Instant) -> u64 {
    let millis = end.saturating_duration_since(now).as_millis();
    ((millis + 500) / 1000) as u64
}

/// Formats a number of seconds as `"4m 59s remaining"`.
pub fn format_remaining(secs: u64) -> String {
    format!("{}m {}s remaining", secs / 60, secs % 60)
}

impl Cooldown {
    /// Starts a countdown of `duration`, capped at [`MAX_COOLDOWN`].
    pub fn start(&mut self, now: Instant, duration: Duration) {
        let duration = duration.min(MAX_COOLDOWN);
        let Some(end) = now.checked_add(duration) else {
            tracing::error!("cannot represent cooldown end, no cooldown started");
            return;
        };
        self.end = Some(end);
        self.remaining = Some(remaining_secs(end, now));
    }

    /// Recomputes the remaining time, clears the cooldown once it is over.
    pub fn tick(&mut self, now: Instant) {
        let Some(end) = self.end else {
            return;
        };
        match remaining_secs(end, now) {
            0 => {
                tracing::debug!("verification code cooldown is over");
                self.end = None;
                self.remaining = None;
            }
            secs => self.remaining = Some(secs),
        }
    }

    /// Seconds to wait before a new request is allowed, if any.
    pub fn blocking_secs(&self, now: Instant) -> Option<u64> {
        self.end
            .map(|end| remaining_secs(end, now))
            .filter(|secs| *secs > 0)
    }

    pub fn is_active(&self) -> bool {
        self.end.is_some()
    }

    pub fn remaining(&self) -> Option<u64> {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_secs_rounding() {
        let now = Instant::now();
        assert_eq!(remaining_secs(now, now), 0);
        assert_eq!(remaining_secs(now + Duration::from_millis(499), now), 0);
        assert_eq!(remaining_secs(now + Duration::from_millis(500), now), 1);
        assert_eq!(remaining_secs(now + Duration::from_millis(1499), now), 1);
        assert_eq!(remaining_secs(now + Duration::from_millis(1500), now), 2);
        assert_eq!(remaining_secs(now + DEFAULT_COOLDOWN, now), 300);
        // Past deadline
        assert_eq!(remaining_secs(now, now + Duration::from_secs(3)), 0);
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(300), "5m 0s remaining");
        assert_eq!(format_remaining(299), "4m 59s remaining");
        assert_eq!(format_remaining(61), "1m 1s remaining");
        assert_eq!(format_remaining(7), "0m 7s remaining");
    }

    #[test]
    fn test_cooldown_lifecycle() {
        let start = Instant::now();
        let mut cooldown = Cooldown::default();
        assert!(!cooldown.is_active());
        assert_eq!(cooldown.remaining(), None);
        assert_eq!(cooldown.blocking_secs(start), None);

        cooldown.start(start, DEFAULT_COOLDOWN);
        assert!(cooldown.is_active());
        assert_eq!(cooldown.remaining(), Some(300));
        assert_eq!(cooldown.blocking_secs(start), Some(300));

        cooldown.tick(start + Duration::from_secs(1));
        assert_eq!(cooldown.remaining(), Some(299));

        cooldown.tick(start + Duration::from_secs(250));
        assert_eq!(cooldown.remaining(), Some(50));
        assert_eq!(
            cooldown.blocking_secs(start + Duration::from_secs(250)),
            Some(50)
        );

        // Less than half a second left rounds to zero: the cooldown is over.
        cooldown.tick(start + Duration::from_millis(299_600));
        assert!(!cooldown.is_active());
        assert_eq!(cooldown.remaining(), None);
        assert_eq!(cooldown.blocking_secs(start + Duration::from_secs(301)), None);
    }

    #[test]
    fn test_tick_without_cooldown_is_noop() {
        let mut cooldown = Cooldown::default();
        cooldown.tick(Instant::now());
        assert_eq!(cooldown, Cooldown::default());
    }

    #[test]
    fn test_start_caps_duration() {
        let start = Instant::now();
        let mut cooldown = Cooldown::default();
        cooldown.start(start, Duration::MAX);
        assert!(cooldown.is_active());
        assert_eq!(cooldown.remaining(), Some(MAX_COOLDOWN.as_secs()));
        assert_eq!(cooldown.blocking_secs(start), Some(24 * 60 * 60));
    }

    #[test]
    fn test_restart_extends_deadline() {
        let start = Instant::now();
        let mut cooldown = Cooldown::default();
        cooldown.start(start, Duration::from_secs(10));
        cooldown.start(start + Duration::from_secs(8), Duration::from_secs(10));
        assert_eq!(
            cooldown.blocking_secs(start + Duration::from_secs(12)),
            Some(6)
        );
    }
}
