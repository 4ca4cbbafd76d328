//! Unit tests for the task module.


use crate::task::ports::{KeyValueResult, KeyValueStore};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

mockall::mock! {
    /// Key-value store with scripted responses.
    pub Store {}

    impl KeyValueStore for Store {
        fn get(&self, key: &str) -> KeyValueResult<Option<String>>;
        fn set(&self, key: &str, value: &str) -> KeyValueResult<()>;
        fn remove(&self, key: &str) -> KeyValueResult<()>;
    }
}

/// Clock that advances one second on every reading.
pub(super) struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub(super) fn new() -> Self {
        Self {
            start: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).single().unwrap_or_default(),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(tick)
    }
}
