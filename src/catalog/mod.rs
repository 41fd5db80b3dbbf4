pub mod dto;
pub mod error;
pub mod format;
pub mod handlers;
pub mod model;
pub mod store;

pub use error::LoadError;
pub use store::Catalog;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::read_routes())
        .merge(handlers::cart_routes())
}
