pub mod salon;

pub use salon::{SalonDetail, SalonSummary, SearchParams};
