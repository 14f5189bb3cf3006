//! Request DTOs and their mapping to use-case inputs.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use confero_core::{DomainError, User, WebinarId};
use confero_webinars::{ChangeSeatsRequest, OrganizeWebinarRequest, Seats};

/// A seat count as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SeatsInput {
    Number(i64),
    Text(String),
}

impl SeatsInput {
    pub fn parse(&self) -> Result<Seats, DomainError> {
        let value = match self {
            SeatsInput::Number(n) => *n,
            SeatsInput::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                DomainError::validation(format!("seats must be an integer, got '{s}'"))
            })?,
        };
        u32::try_from(value).map(Seats::new).map_err(|_| {
            DomainError::validation(format!("seats must be a non-negative integer, got {value}"))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizeWebinarBody {
    pub title: String,
    pub seats: SeatsInput,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl OrganizeWebinarBody {
    /// The authenticated user becomes the organizer.
    pub fn into_request(self, user: &User) -> Result<OrganizeWebinarRequest, DomainError> {
        Ok(OrganizeWebinarRequest {
            user_id: user.id.clone(),
            title: self.title,
            seats: self.seats.parse()?,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangeSeatsBody {
    pub seats: SeatsInput,
}

impl ChangeSeatsBody {
    pub fn into_request(
        self,
        user: User,
        webinar_id: WebinarId,
    ) -> Result<ChangeSeatsRequest, DomainError> {
        Ok(ChangeSeatsRequest {
            user,
            webinar_id,
            seats: self.seats.parse()?,
        })
    }
}
