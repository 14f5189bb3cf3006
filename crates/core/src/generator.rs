//! Id and date generation ports.
//!
//! Use cases receive these capabilities explicitly at construction time so they
//! stay deterministic under test. Production code wires [`UuidIdGenerator`] and
//! [`SystemDateGenerator`]; tests wire the fixed variants.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Produces fresh, unique identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Produces the current instant.
pub trait DateGenerator: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<T> IdGenerator for Arc<T>
where
    T: IdGenerator + ?Sized,
{
    fn generate(&self) -> String {
        (**self).generate()
    }
}

impl<T> DateGenerator for Arc<T>
where
    T: DateGenerator + ?Sized,
{
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// UUIDv7 (time-ordered) identifiers rendered as strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// Wall clock (`Utc::now()`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDateGenerator;

impl DateGenerator for SystemDateGenerator {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same identifier.
#[derive(Debug, Clone)]
pub struct FixedIdGenerator {
    id: String,
}

impl FixedIdGenerator {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> String {
        self.id.clone()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedDateGenerator {
    now: DateTime<Utc>,
}

impl FixedDateGenerator {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl DateGenerator for FixedDateGenerator {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn uuid_generator_yields_distinct_ids() {
        let generator = UuidIdGenerator;
        let a = generator.generate();
        let b = generator.generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn fixed_generators_are_deterministic() {
        let ids: Arc<dyn IdGenerator> = Arc::new(FixedIdGenerator::new("id-1"));
        assert_eq!(ids.generate(), "id-1");
        assert_eq!(ids.generate(), "id-1");

        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let dates = FixedDateGenerator::new(at);
        assert_eq!(dates.now(), at);
    }
}
