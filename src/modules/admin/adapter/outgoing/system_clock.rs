use chrono::{DateTime, Utc};

use crate::modules::admin::application::ports::outgoing::Clock;

/// Wall clock used outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
