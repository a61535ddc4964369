//! Typed ID definitions for domain entities.

pub use super::id::Id;

/// Marker type for salon listings (provider records in the account store).
pub struct Salon;

/// Typed ID for salon listings.
pub type SalonId = Id<Salon>;
