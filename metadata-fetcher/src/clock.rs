use chrono::{Local, NaiveDateTime};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub fn timestamped_dir_name(prefix: &str, instant: NaiveDateTime) -> String {
    format!("{}{}", prefix, instant.format("%Y%m%d_%H%M%S"))
}
