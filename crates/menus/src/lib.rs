//! Menus module: menus and the groups they are listed under.
//!
//! Menu pricing and composition are out of scope; orders only ever ask whether
//! a menu exists.

pub mod menu;
pub mod menu_group;

pub use menu::Menu;
pub use menu_group::{
    MenuGroup, MenuGroupError, MenuGroupRepository, MenuGroupService, NewMenuGroup,
};
