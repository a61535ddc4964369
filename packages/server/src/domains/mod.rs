// Business domains
pub mod salons;
