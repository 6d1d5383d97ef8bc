//! Color record storage for Hue.
//!
//! The store is the only data source behind the GraphQL API. It is an
//! ordered sequence of [`Color`](hue_types::Color) records held in memory
//! for the life of the process and initialized from seed data.
//!
//! # Storage Backends
//!
//! All backends implement the [`ColorStore`] trait:
//!
//! - [`InMemoryColorStore`] -- copy-on-write `Vec` behind a `RwLock`
//!
//! # Design Rules
//!
//! 1. Record ids are unique across the store at all times.
//! 2. Insertion order is preserved on add.
//! 3. A failed operation leaves the store unchanged.
//! 4. Add and remove publish a whole new sequence; readers never observe a
//!    partial mutation.

pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryColorStore;
pub use seed::{default_seed, load_seed, parse_seed, DEFAULT_SEED};
pub use traits::ColorStore;
