use std::sync::Arc;

use async_graphql::{Context, Error, ErrorExtensions, Object, Result, ID};
use hue_store::{ColorStore, StoreError};
use hue_types::{Color, ColorId, ColorValue};

/// GraphQL view of a [`Color`] record.
pub struct ColorNode(pub Color);

#[Object(name = "Color")]
impl ColorNode {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn color(&self) -> ColorValue {
        self.0.color
    }

    async fn rating(&self) -> Option<i32> {
        Some(self.0.rating)
    }

    /// Creation time, ISO-8601.
    async fn timestamp(&self) -> String {
        self.0.timestamp_iso()
    }
}

/// Error extension `code` values.
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Convert a store failure into a client-visible GraphQL error with a
/// `code` extension.
pub(crate) fn store_error(err: StoreError) -> Error {
    let code = match &err {
        StoreError::NotFound(_) => codes::NOT_FOUND,
        _ => codes::INTERNAL,
    };
    Error::new(err.to_string()).extend_with(|_, e| e.set("code", code.to_string()))
}

pub(crate) fn store<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn ColorStore>> {
    ctx.data::<Arc<dyn ColorStore>>()
}

pub(crate) fn color_id(id: ID) -> ColorId {
    ColorId::new(id.0)
}
