//! Client-side list cache for the roster API.
//!
//! A [`QueryCache`] is constructed once per application session and passed to whatever
//! issues requests. List responses are cached per [`ResourceKey`]; create mutations insert a
//! placeholder through [`QueryCache::begin_optimistic`] and settle the returned
//! [`OptimisticMutation`] once the server answers, after which the entry is stale and the next
//! read refetches server truth.

pub mod cache;
pub mod error;
pub mod mutation;

pub use cache::{CachedList, FetchTicket, Freshness, QueryCache, ResourceKey};
pub use error::ClientError;
pub use mutation::OptimisticMutation;
