use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::state::AppState;

use super::dto::{
    CartAck, NotFoundBody, PageMetadata, ProductDetails, ProductSummary, RouteParam, SiteMetadata,
};

type NotFound = (StatusCode, Json<NotFoundBody>);

fn not_found() -> NotFound {
    (StatusCode::NOT_FOUND, Json(NotFoundBody::default()))
}

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/site", get(site_metadata))
        .route("/products", get(list_products))
        .route("/product-ids", get(product_ids))
        .route("/products/:id", get(get_product))
        .route("/products/:id/metadata", get(product_metadata))
}

pub fn cart_routes() -> Router<AppState> {
    Router::new().route("/products/:id/cart", post(add_to_cart))
}

#[instrument(skip(state))]
pub async fn site_metadata(State(state): State<AppState>) -> Json<SiteMetadata> {
    Json(SiteMetadata {
        title: state.config.store.name.clone(),
        description: state.config.store.description.clone(),
    })
}

#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<ProductSummary>> {
    let items = state
        .catalog
        .list_products()
        .iter()
        .map(ProductSummary::from)
        .collect();
    Json(items)
}

#[instrument(skip(state))]
pub async fn product_ids(State(state): State<AppState>) -> Json<Vec<RouteParam>> {
    let ids = state
        .catalog
        .product_ids()
        .map(|id| RouteParam { id: id.to_owned() })
        .collect();
    Json(ids)
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductDetails>, NotFound> {
    match state.catalog.get_product_by_id(&id) {
        Some(p) => Ok(Json(ProductDetails::from(p))),
        None => {
            warn!(%id, "product not found");
            Err(not_found())
        }
    }
}

#[instrument(skip(state))]
pub async fn product_metadata(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<PageMetadata> {
    let product = state.catalog.get_product_by_id(&id);
    Json(PageMetadata::for_product(product, &state.config.store.name))
}

#[instrument(skip(state))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CartAck>, NotFound> {
    let product = state.catalog.get_product_by_id(&id).ok_or_else(|| {
        warn!(%id, "add to cart for unknown product");
        not_found()
    })?;
    info!(product_id = %product.id, "add to cart acknowledged");
    Ok(Json(CartAck::for_product(product)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_returns_every_product_in_order() {
        let state = AppState::fake();
        let Json(items) = list_products(State(state.clone())).await;
        let ids: Vec<&str> = items.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, state.catalog.product_ids().collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn get_product_found_and_missing() {
        let state = AppState::fake();
        let Json(details) = get_product(State(state.clone()), Path("1".into()))
            .await
            .expect("product 1 exists");
        assert_eq!(details.name, "Widget");

        let (status, Json(body)) = get_product(State(state), Path("does-not-exist".into()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Produit introuvable");
    }

    #[tokio::test]
    async fn metadata_falls_back_for_unknown_id() {
        let state = AppState::fake();
        let Json(meta) = product_metadata(State(state.clone()), Path("1".into())).await;
        assert_eq!(meta.title, "Widget - TestShop");

        let Json(meta) = product_metadata(State(state), Path("2".into())).await;
        assert_eq!(meta.title, "Produit introuvable - TestShop");
        assert!(meta.description.is_none());
    }

    #[tokio::test]
    async fn add_to_cart_acknowledges_without_mutation() {
        let state = AppState::fake();
        let before = state.catalog.list_products().to_vec();

        let Json(ack) = add_to_cart(State(state.clone()), Path("1".into()))
            .await
            .expect("known product");
        assert_eq!(ack.product_name, "Widget");
        assert_eq!(state.catalog.list_products(), before.as_slice());

        let (status, _) = add_to_cart(State(state), Path("2".into())).await.unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn product_ids_match_catalog() {
        let Json(ids) = product_ids(State(AppState::fake())).await;
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].id, "1");
    }
}
