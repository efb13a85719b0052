#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use jiff::tz::TimeZone;
use jiff::{Timestamp, ToSpan};
use peace_core::clock::Clock;
use peace_core::models::assessment::ResponseSet;
use peace_core::models::instrument::InstrumentId;
use peace_engine::{Engine, EngineConfig};
use peace_instruments::{Instrument, instrument};
use peace_storage::memory::MemoryStore;

/// Clock the test moves by hand.
pub struct TestClock(Mutex<Timestamp>);

impl TestClock {
    pub fn at(s: &str) -> Arc<Self> {
        Arc::new(Self(Mutex::new(s.parse().unwrap())))
    }

    pub fn advance_days(&self, days: i64) {
        let mut now = self.0.lock().unwrap();
        *now = *now + (days * 24).hours();
    }
}

impl Clock for TestClock {
    fn now(&self) -> Timestamp {
        *self.0.lock().unwrap()
    }
}

pub fn engine(clock: Arc<TestClock>) -> Engine {
    Engine::new(
        Arc::new(MemoryStore::new()),
        clock,
        EngineConfig::new("/unused"),
    )
    .with_time_zone(TimeZone::UTC)
}

/// Answers for a 0–3 frequency instrument that add up to `total`,
/// filling questions in order.
pub fn answers_summing_to(id: InstrumentId, total: u32) -> ResponseSet {
    let mut remaining = total;
    instrument(id)
        .questions()
        .iter()
        .map(|q| {
            let value = remaining.min(q.max_value());
            remaining -= value;
            (q.id.clone(), value)
        })
        .collect()
}

pub fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}
