pub mod queries;

pub use queries::{get_salon, recommend_salons, search_salons, RECOMMENDATION_COUNT, SEARCH_LIMIT};
