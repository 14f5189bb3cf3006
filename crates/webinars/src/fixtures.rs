//! Shared test seeds.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use tracing::Level;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

use confero_core::User;

use crate::webinar::{Seats, Webinar, WebinarProps};

pub const WEBINAR_ID: &str = "webinar-id";

pub fn alice() -> User {
    User::new("alice").with_email("alice@gmail.com")
}

pub fn bob() -> User {
    User::new("bob").with_email("bob@gmail.com")
}

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap()
}

/// Alice's webinar with 100 seats.
pub fn webinar() -> Webinar {
    webinar_with_seats(100)
}

pub fn webinar_with_seats(seats: u32) -> Webinar {
    Webinar::new(WebinarProps {
        id: WEBINAR_ID.into(),
        organizer_id: alice().id,
        title: "Webinar title".to_string(),
        start_date: start(),
        end_date: end(),
        seats: Seats::new(seats),
    })
}

/// Records the level of every event emitted while installed.
#[derive(Clone, Default)]
pub struct CapturedLevels(Arc<Mutex<Vec<Level>>>);

impl CapturedLevels {
    /// Scoped to the current thread; pair with a current-thread runtime.
    pub fn install(&self) -> DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    pub fn take(&self) -> Vec<Level> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

impl<S: tracing::Subscriber> Layer<S> for CapturedLevels {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(*event.metadata().level());
    }
}
