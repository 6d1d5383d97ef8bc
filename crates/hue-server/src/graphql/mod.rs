//! GraphQL schema for the color API.
//!
//! ```graphql
//! scalar ColorValue
//! type Color { id: ID!  title: String!  color: ColorValue!  rating: Int  timestamp: String! }
//! type Query { allColors: [Color!]!  color(id: ID!): Color  totalColors: Int }
//! type Mutation {
//!   addColor(title: String!, color: ColorValue!): Color
//!   rateColor(id: ID!, rating: Int!): Color
//!   removeColor(id: ID!): Color
//! }
//! ```
//!
//! The store is injected as `Arc<dyn ColorStore>` schema data; resolvers
//! never touch process-wide state.

mod mutation;
mod query;
mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use hue_store::ColorStore;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{codes, ColorNode};

pub type HueSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over `store`.
pub fn build_schema(store: Arc<dyn ColorStore>) -> HueSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}
