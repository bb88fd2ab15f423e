//! Timestamped game log and the clocks that stamp it.

use std::{
    fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{Duration, SystemTime, UNIX_EPOCH},
};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Source of wall-clock timestamps for log entries.
pub trait Clock: fmt::Debug + Send {
    /// Time elapsed since the Unix epoch.
    fn now(&self) -> Duration;
}

/// Reads the operating system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }
}

/// Clock moved by hand. Clones share the same time, so a test can keep a
/// handle after giving the clock to an engine. Resolution is one nanosecond,
/// saturating around the year 2554.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock reading `now`.
    #[must_use]
    pub fn new(now: Duration) -> Self {
        Self {
            nanos: Arc::new(AtomicU64::new(to_nanos(now))),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: Duration) {
        self.nanos.store(to_nanos(now), Ordering::Relaxed);
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let delta = to_nanos(delta);
        let _ = self
            .nanos
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |nanos| {
                Some(nanos.saturating_add(delta))
            });
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::Relaxed))
    }
}

fn to_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// Single timestamped line of the game log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: Duration,
    message: String,
}

impl LogEntry {
    /// Time the entry was appended, measured from the Unix epoch.
    #[must_use]
    pub const fn timestamp(&self) -> Duration {
        self.timestamp
    }

    /// Entry text without the timestamp.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LogEntry {
    /// Renders as `[HH:MM:SS] message` in UTC.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.timestamp.as_secs() % SECONDS_PER_DAY;
        write!(
            f,
            "[{:02}:{:02}:{:02}] {}",
            seconds / 3600,
            (seconds / 60) % 60,
            seconds % 60,
            self.message
        )
    }
}

/// Append-only, human-readable trail of what happened in a match.
#[derive(Debug)]
pub struct GameLog {
    clock: Box<dyn Clock>,
    entries: Vec<LogEntry>,
}

impl GameLog {
    /// Creates an empty log stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty log stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            entries: Vec::new(),
        }
    }

    /// Appends a message stamped with the current time.
    pub fn append(&mut self, message: impl Into<String>) {
        self.entries.push(LogEntry {
            timestamp: self.clock.now(),
            message: message.into(),
        });
    }

    /// The last `count` entries, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    /// Every entry, oldest first.
    #[must_use]
    pub fn all(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Every entry rendered as `[HH:MM:SS] message`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for GameLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_render_with_time_of_day() {
        let clock = ManualClock::new(Duration::from_secs(3 * SECONDS_PER_DAY + 13 * 3600 + 5 * 60 + 9));
        let mut log = GameLog::with_clock(clock.clone());
        log.append("first");
        clock.advance(Duration::from_secs(61));
        log.append("second");

        assert_eq!(log.lines(), vec!["[13:05:09] first", "[13:06:10] second"]);
    }

    #[test]
    fn recent_returns_tail_in_order() {
        let mut log = GameLog::with_clock(ManualClock::default());
        for message in ["a", "b", "c", "d"] {
            log.append(message);
        }
        let recent: Vec<&str> = log.recent(2).iter().map(LogEntry::message).collect();
        assert_eq!(recent, vec!["c", "d"]);
        assert_eq!(log.recent(10).len(), 4);
        assert!(log.recent(0).is_empty());
    }

    #[test]
    fn manual_clock_handles_share_time_across_threads() {
        let clock = ManualClock::new(Duration::from_millis(1_500));
        let handle = clock.clone();
        std::thread::spawn(move || handle.advance(Duration::from_millis(500)))
            .join()
            .expect("clock thread");
        assert_eq!(clock.now(), Duration::from_secs(2));

        clock.set(Duration::MAX);
        assert_eq!(clock.now(), Duration::from_nanos(u64::MAX));
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = GameLog::with_clock(ManualClock::default());
        log.append("entry");
        assert_eq!(log.len(), 1);
        log.clear();
        assert!(log.is_empty());
    }
}
