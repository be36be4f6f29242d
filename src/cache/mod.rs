pub mod keys;
pub mod store;

pub use keys::{fingerprint, CacheKey};
pub use store::{CacheEntry, ResponseCache, DEFAULT_TTL_SECONDS};
