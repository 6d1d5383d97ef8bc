//! Foundation types for Hue.
//!
//! This crate provides the record, identifier, and color types shared by
//! every other Hue crate.
//!
//! # Key Types
//!
//! - [`ColorValue`] — Validated RGB color with a canonical `#rrggbb` form
//! - [`ColorId`] — Opaque, unique record identifier
//! - [`Color`] — A stored color record
//! - [`NewColor`] — Client input for creating a record
//!
//! # Features
//!
//! - `graphql` — registers [`ColorValue`] as the `ColorValue` GraphQL scalar

pub mod color;
pub mod error;
pub mod record;

#[cfg(any(feature = "graphql", test))]
mod graphql;

pub use color::ColorValue;
pub use error::{TypeError, TypeResult};
pub use record::{Color, ColorId, NewColor};
