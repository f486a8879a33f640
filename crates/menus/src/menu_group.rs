use serde::{Deserialize, Serialize};
use thiserror::Error;

use kitchenpos_core::{Entity, MenuGroupId, StoreError, StoreResult};

/// A named grouping of menus (e.g. "Set menus", "Sides").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroup {
    pub id: MenuGroupId,
    pub name: String,
}

impl Entity for MenuGroup {
    type Id = MenuGroupId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Menu group that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMenuGroup {
    pub name: String,
}

/// Persistence collaborator for menu groups.
pub trait MenuGroupRepository: Send + Sync {
    /// Persist a new group, assigning its id.
    fn insert(&self, group: NewMenuGroup) -> StoreResult<MenuGroup>;
    /// All groups, in persistence order.
    fn find_all(&self) -> StoreResult<Vec<MenuGroup>>;
}

impl<R> MenuGroupRepository for std::sync::Arc<R>
where
    R: MenuGroupRepository + ?Sized,
{
    fn insert(&self, group: NewMenuGroup) -> StoreResult<MenuGroup> {
        (**self).insert(group)
    }

    fn find_all(&self) -> StoreResult<Vec<MenuGroup>> {
        (**self).find_all()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MenuGroupError {
    #[error("menu group name must not be blank")]
    BlankName,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Create/list operations for menu groups.
#[derive(Debug)]
pub struct MenuGroupService<R> {
    groups: R,
}

impl<R> MenuGroupService<R>
where
    R: MenuGroupRepository,
{
    pub fn new(groups: R) -> Self {
        Self { groups }
    }

    pub fn create(&self, group: NewMenuGroup) -> Result<MenuGroup, MenuGroupError> {
        let name = group.name.trim();
        if name.is_empty() {
            return Err(MenuGroupError::BlankName);
        }

        let saved = self.groups.insert(NewMenuGroup {
            name: name.to_string(),
        })?;
        tracing::info!(menu_group_id = %saved.id, name = %saved.name, "menu group created");
        Ok(saved)
    }

    pub fn list(&self) -> Result<Vec<MenuGroup>, MenuGroupError> {
        Ok(self.groups.find_all()?)
    }
}
