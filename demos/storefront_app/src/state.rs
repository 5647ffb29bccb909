// demos/storefront_app/src/state.rs
use std::sync::Arc;

use giftfields::{HookDispatch, MemoryProductStore};

use crate::config::AppConfig;
use crate::store::{Catalog, OrderBook, SessionCarts};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>, // Share loaded config
    pub products: Arc<MemoryProductStore>,
    pub catalog: Arc<Catalog>,
    pub carts: Arc<SessionCarts>,
    pub orders: Arc<OrderBook>,
    pub hooks: Arc<HookDispatch>,
}
