//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod salon_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use salon_store::PostgresSalonStore;
pub use traits::BaseSalonStore;
