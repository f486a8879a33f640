use serde::{Deserialize, Serialize};

use kitchenpos_core::{Entity, OrderTableId, TableGroupId};

/// Seating unit. Orders read it during admission but never change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTable {
    pub id: OrderTableId,
    pub table_group_id: Option<TableGroupId>,
    pub number_of_guests: u32,
    /// An empty table has nobody seated and cannot take orders.
    pub empty: bool,
}

impl OrderTable {
    pub fn occupied(id: OrderTableId, number_of_guests: u32) -> Self {
        Self {
            id,
            table_group_id: None,
            number_of_guests,
            empty: false,
        }
    }

    pub fn vacant(id: OrderTableId) -> Self {
        Self {
            id,
            table_group_id: None,
            number_of_guests: 0,
            empty: true,
        }
    }
}

impl Entity for OrderTable {
    type Id = OrderTableId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
