//! `confero-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the requesting user, and the id/date generation ports that use
//! cases receive explicitly.

pub mod entity;
pub mod error;
pub mod generator;
pub mod id;
pub mod user;
pub mod value_object;

pub use entity::Entity;
pub use error::DomainError;
pub use generator::{
    DateGenerator, FixedDateGenerator, FixedIdGenerator, IdGenerator, SystemDateGenerator,
    UuidIdGenerator,
};
pub use id::{UserId, WebinarId};
pub use user::User;
pub use value_object::ValueObject;
