use async_graphql::{Context, Object, Result, ID};
use hue_types::{ColorValue, NewColor};

use super::types::{color_id, store, store_error, ColorNode};

/// Operations that change the color store.
///
/// `ColorValue` arguments are validated during argument coercion, before
/// any of these resolvers run, so a rejected color never reaches the store.
#[derive(Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Append a new color with a fresh id and a zero rating.
    async fn add_color(
        &self,
        ctx: &Context<'_>,
        title: String,
        color: ColorValue,
    ) -> Result<Option<ColorNode>> {
        let added = store(ctx)?
            .add(NewColor::new(title, color))
            .map_err(store_error)?;
        tracing::info!(id = %added.id, color = %added.color, "addColor");
        Ok(Some(ColorNode(added)))
    }

    /// Set the rating of an existing color. Fails with `NOT_FOUND` if no
    /// color has `id`.
    async fn rate_color(
        &self,
        ctx: &Context<'_>,
        id: ID,
        rating: i32,
    ) -> Result<Option<ColorNode>> {
        let rated = store(ctx)?
            .rate(&color_id(id), rating)
            .map_err(store_error)?;
        tracing::info!(id = %rated.id, rating, "rateColor");
        Ok(Some(ColorNode(rated)))
    }

    /// Remove a color and return it. Fails with `NOT_FOUND` if no color
    /// has `id`.
    async fn remove_color(&self, ctx: &Context<'_>, id: ID) -> Result<Option<ColorNode>> {
        let removed = store(ctx)?.remove(&color_id(id)).map_err(store_error)?;
        tracing::info!(id = %removed.id, "removeColor");
        Ok(Some(ColorNode(removed)))
    }
}
