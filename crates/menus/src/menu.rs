use serde::{Deserialize, Serialize};

use kitchenpos_core::{Entity, MenuGroupId, MenuId};

/// A purchasable item. Orders reference menus by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    pub menu_group_id: MenuGroupId,
}

impl Entity for Menu {
    type Id = MenuId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
