use kitchenpos_core::{MenuGroupId, MenuId, StoreResult};
use kitchenpos_menus::{Menu, MenuGroup, MenuGroupRepository, NewMenuGroup};
use kitchenpos_orders::MenuCatalog;

use super::{EntityMap, Sequence};

/// In-memory menu catalog. Menus are managed out of band (seeding, tests).
#[derive(Debug, Default)]
pub struct InMemoryMenuStore {
    menus: EntityMap<Menu>,
}

impl InMemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, menu: Menu) -> StoreResult<()> {
        self.menus.put(menu)
    }
}

impl MenuCatalog for InMemoryMenuStore {
    fn count_by_id_in(&self, ids: &[MenuId]) -> StoreResult<usize> {
        self.menus.count_present(ids)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryMenuGroupStore {
    groups: EntityMap<MenuGroup>,
    ids: Sequence,
}

impl InMemoryMenuGroupStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MenuGroupRepository for InMemoryMenuGroupStore {
    fn insert(&self, group: NewMenuGroup) -> StoreResult<MenuGroup> {
        let saved = MenuGroup {
            id: MenuGroupId::new(self.ids.next()),
            name: group.name,
        };
        self.groups.put(saved.clone())?;
        Ok(saved)
    }

    fn find_all(&self) -> StoreResult<Vec<MenuGroup>> {
        self.groups.all()
    }
}
