mod cached;
mod sorted;

pub use cached::{CachedMatcher, DEFAULT_CACHE_SIZE};
pub use sorted::DomainMatcher;
