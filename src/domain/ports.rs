use chrono::{DateTime, NaiveDate, Utc};

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn request_timeout_seconds(&self) -> u64;
    fn log_format(&self) -> &str;
    fn verbose(&self) -> bool;
}

/// Source of the current instant; used for age derivation and `createdAt`.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
