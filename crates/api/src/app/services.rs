use std::sync::Arc;

use kitchenpos_core::StoreResult;
use kitchenpos_infra::seed::seed_demo_data;
use kitchenpos_infra::store::{
    InMemoryMenuGroupStore, InMemoryMenuStore, InMemoryOrderLineItemStore, InMemoryOrderStore,
    InMemoryOrderTableStore,
};
use kitchenpos_infra::InMemoryStores;
use kitchenpos_menus::MenuGroupService;
use kitchenpos_orders::OrderService;

pub type InMemoryOrderService = OrderService<
    Arc<InMemoryMenuStore>,
    Arc<InMemoryOrderTableStore>,
    Arc<InMemoryOrderStore>,
    Arc<InMemoryOrderLineItemStore>,
>;

pub type InMemoryMenuGroupService = MenuGroupService<Arc<InMemoryMenuGroupStore>>;

/// Services shared by every request handler.
#[derive(Debug)]
pub struct AppServices {
    /// Direct store access for wiring and tests (reference data lives here).
    pub stores: InMemoryStores,
    pub orders: InMemoryOrderService,
    pub menu_groups: InMemoryMenuGroupService,
}

impl AppServices {
    pub fn new(stores: InMemoryStores) -> Self {
        let orders = OrderService::new(
            stores.menus.clone(),
            stores.tables.clone(),
            stores.orders.clone(),
            stores.line_items.clone(),
        );
        let menu_groups = MenuGroupService::new(stores.menu_groups.clone());

        Self {
            stores,
            orders,
            menu_groups,
        }
    }

    /// Fresh in-memory stores, optionally loaded with demo menus and tables.
    pub fn in_memory(seed_demo: bool) -> StoreResult<Self> {
        let stores = InMemoryStores::new();
        if seed_demo {
            seed_demo_data(&stores)?;
        }
        Ok(Self::new(stores))
    }
}
