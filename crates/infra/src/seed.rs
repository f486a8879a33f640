//! Demo reference data.
//!
//! Menu and table management are not exposed by this service, so a fresh
//! in-memory process gets a small fixed catalog and floor plan.

use kitchenpos_core::{MenuGroupId, MenuId, OrderTableId, StoreResult};
use kitchenpos_menus::{Menu, MenuGroupRepository, NewMenuGroup};
use kitchenpos_orders::OrderTable;

use crate::store::InMemoryStores;

const DEMO_MENUS: [(&str, &str); 6] = [
    ("Fried chicken", "Chicken"),
    ("Seasoned chicken", "Chicken"),
    ("Soy garlic chicken", "Chicken"),
    ("Two fried chickens", "Set menus"),
    ("Fried + seasoned set", "Set menus"),
    ("Cola", "Drinks"),
];

/// Tables 1..=4 are seated, 5..=8 are empty.
const DEMO_TABLES: u64 = 8;

pub fn seed_demo_data(stores: &InMemoryStores) -> StoreResult<()> {
    let mut groups: Vec<(&str, MenuGroupId)> = Vec::new();
    for (menu_id, (name, group_name)) in DEMO_MENUS.iter().enumerate() {
        let existing = groups
            .iter()
            .find(|(n, _)| n == group_name)
            .map(|(_, id)| *id);
        let group = match existing {
            Some(id) => id,
            None => {
                let saved = stores.menu_groups.insert(NewMenuGroup {
                    name: (*group_name).to_string(),
                })?;
                groups.push((*group_name, saved.id));
                saved.id
            }
        };

        stores.menus.upsert(Menu {
            id: MenuId::new(menu_id as u64 + 1),
            name: (*name).to_string(),
            menu_group_id: group,
        })?;
    }

    for id in 1..=DEMO_TABLES {
        let table = if id <= DEMO_TABLES / 2 {
            OrderTable::occupied(OrderTableId::new(id), 2)
        } else {
            OrderTable::vacant(OrderTableId::new(id))
        };
        stores.tables.upsert(table)?;
    }

    tracing::info!(
        menus = DEMO_MENUS.len(),
        menu_groups = groups.len(),
        tables = DEMO_TABLES,
        "seeded demo data"
    );
    Ok(())
}
