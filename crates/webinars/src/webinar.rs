use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use confero_core::{Entity, User, UserId, ValueObject, WebinarId};

/// Seat capacity of a webinar (total attendance slots, not bookings).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seats(u32);

impl Seats {
    /// Upper bound a seat change may reach.
    pub const MAX: Seats = Seats(1000);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// `true` when the capacity is above [`Seats::MAX`].
    pub fn exceeds_limit(self) -> bool {
        self > Self::MAX
    }
}

impl ValueObject for Seats {}

impl From<u32> for Seats {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Seats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Constructor input for [`Webinar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebinarProps {
    pub id: WebinarId,
    pub organizer_id: UserId,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: Seats,
}

/// Aggregate root: Webinar.
///
/// A plain value holder. Rules about who may change what live in the use cases;
/// the only mutation exposed is the seat change, and only inside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webinar {
    id: WebinarId,
    organizer_id: UserId,
    title: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    seats: Seats,
}

impl Webinar {
    pub fn new(props: WebinarProps) -> Self {
        Self {
            id: props.id,
            organizer_id: props.organizer_id,
            title: props.title,
            start_date: props.start_date,
            end_date: props.end_date,
            seats: props.seats,
        }
    }

    pub fn webinar_id(&self) -> &WebinarId {
        &self.id
    }

    pub fn organizer_id(&self) -> &UserId {
        &self.organizer_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// Whether `user` is the recorded organizer.
    pub fn is_organizer(&self, user: &User) -> bool {
        self.organizer_id == user.id
    }

    pub(crate) fn set_seats(&mut self, seats: Seats) {
        self.seats = seats;
    }
}

impl Entity for Webinar {
    type Id = WebinarId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
