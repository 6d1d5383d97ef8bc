use async_graphql::{Context, Object, Result, ID};

use super::types::{color_id, store, store_error, ColorNode};

/// Read-only operations over the color store.
#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Every color, in insertion order.
    async fn all_colors(&self, ctx: &Context<'_>) -> Result<Vec<ColorNode>> {
        let colors = store(ctx)?.all().map_err(store_error)?;
        Ok(colors.into_iter().map(ColorNode).collect())
    }

    /// The color with `id`, or null.
    async fn color(&self, ctx: &Context<'_>, id: ID) -> Result<Option<ColorNode>> {
        let color = store(ctx)?.get(&color_id(id)).map_err(store_error)?;
        Ok(color.map(ColorNode))
    }

    async fn total_colors(&self, ctx: &Context<'_>) -> Result<Option<i32>> {
        let count = store(ctx)?.count().map_err(store_error)?;
        Ok(i32::try_from(count).ok())
    }
}
