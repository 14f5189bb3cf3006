//! Webinars domain module.
//!
//! This crate contains the business rules for organizing webinars and changing
//! their seat capacity. Storage is reached only through [`WebinarRepository`];
//! id and date generation come in through the ports of `confero-core`.

pub mod change_seats;
pub mod error;
pub mod in_memory;
pub mod organize_webinar;
pub mod repository;
pub mod webinar;

#[cfg(test)]
pub(crate) mod fixtures;

pub use change_seats::{ChangeSeats, ChangeSeatsRequest};
pub use error::{WebinarError, WebinarResult};
pub use in_memory::InMemoryWebinarRepository;
pub use organize_webinar::{OrganizeWebinar, OrganizeWebinarRequest, OrganizeWebinarResponse};
pub use repository::{RepositoryError, WebinarRepository};
pub use webinar::{Seats, Webinar, WebinarProps};
