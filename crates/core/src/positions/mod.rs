//! Positions module - domain models, services, and traits.

mod positions_model;
mod positions_service;
mod positions_traits;


pub use positions_model::{NewPosition, Position, PositionPayload, PositionUpdate, PositionValues};
pub use positions_service::PositionService;
pub use positions_traits::{PositionRepositoryTrait, PositionServiceTrait};
