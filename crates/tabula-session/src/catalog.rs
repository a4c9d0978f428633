//! Role-gated navigation catalog.
//!
//! The catalog is data: the application shell loads it once (typically from
//! bundled JSON) and derives each signed-in user's menu with the pure
//! [`visible_items_for`]. Hiding an item is a UI nicety only; the backend
//! still authorizes every call.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::session::Role;

/// Errors raised while validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two items share an id.
    #[error("duplicate nav item id '{0}'")]
    DuplicateId(String),
}

/// One entry of the navigation catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Stable identifier, unique across the whole catalog.
    pub id: String,
    /// Label shown in the menu.
    pub label: String,
    /// Route the item navigates to; groups that only hold children may
    /// have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Roles that see this item. Empty means everyone.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Role>,
    /// Nested entries for grouped menus.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// A leaf item visible to everyone.
    pub fn leaf(id: impl Into<String>, label: impl Into<String>, route: impl Into<String>) -> Self {
        NavItem {
            id: id.into(),
            label: label.into(),
            route: Some(route.into()),
            roles: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Restricts the item to the given roles.
    pub fn for_roles<I, R>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Role>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a child entry.
    pub fn child(mut self, item: NavItem) -> Self {
        self.children.push(item);
        self
    }

    fn allows(&self, role: &Role) -> bool {
        self.roles.is_empty() || self.roles.iter().any(|r| r == role)
    }
}

/// The full navigation catalog of the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub items: Vec<NavItem>,
}

impl Catalog {
    pub fn new(items: Vec<NavItem>) -> Self {
        Catalog { items }
    }

    /// Checks item ids are unique across the whole tree.
    pub fn validate(&self) -> Result<(), CatalogError> {
        fn walk<'a>(items: &'a [NavItem], seen: &mut HashSet<&'a str>) -> Result<(), CatalogError> {
            for item in items {
                if !seen.insert(&item.id) {
                    return Err(CatalogError::DuplicateId(item.id.clone()));
                }
                walk(&item.children, seen)?;
            }
            Ok(())
        }
        walk(&self.items, &mut HashSet::new())
    }
}

/// Computes the catalog a given role sees.
///
/// Pure function of its inputs: an item survives when its role list allows
/// the role (empty allows everyone); children are filtered recursively; a
/// group left with no route and no visible children disappears entirely.
pub fn visible_items_for(role: &Role, catalog: &Catalog) -> Catalog {
    fn filter_items(role: &Role, items: &[NavItem]) -> Vec<NavItem> {
        items
            .iter()
            .filter(|item| item.allows(role))
            .filter_map(|item| {
                let children = filter_items(role, &item.children);
                if children.is_empty() && item.route.is_none() && !item.children.is_empty() {
                    // A group whose every child was filtered out.
                    return None;
                }
                Some(NavItem {
                    children,
                    ..item.clone()
                })
            })
            .collect()
    }
    Catalog::new(filter_items(role, &catalog.items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            NavItem::leaf("dashboard", "Dashboard", "/"),
            NavItem::leaf("consultants", "Consultants", "/consultants")
                .for_roles(["admin", "manager"]),
            NavItem {
                id: "billing".into(),
                label: "Billing".into(),
                route: None,
                roles: Vec::new(),
                children: Vec::new(),
            }
            .child(NavItem::leaf("fees", "Fees", "/fees").for_roles(["admin"]))
            .child(NavItem::leaf("agreements", "Agreements", "/agreements").for_roles(["admin"])),
            NavItem::leaf("profile", "My profile", "/me"),
        ])
    }

    #[test]
    fn unrestricted_items_visible_to_everyone() {
        let menu = visible_items_for(&Role::new("guest"), &catalog());
        let ids: Vec<&str> = menu.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["dashboard", "profile"]);
    }

    #[test]
    fn role_match_is_case_insensitive() {
        let menu = visible_items_for(&Role::new("Manager"), &catalog());
        assert!(menu.items.iter().any(|i| i.id == "consultants"));
    }

    #[test]
    fn empty_groups_disappear() {
        // Manager sees neither billing child, so the group itself goes.
        let menu = visible_items_for(&Role::new("manager"), &catalog());
        assert!(!menu.items.iter().any(|i| i.id == "billing"));

        let menu = visible_items_for(&Role::new("admin"), &catalog());
        let billing = menu.items.iter().find(|i| i.id == "billing").unwrap();
        assert_eq!(billing.children.len(), 2);
    }

    #[test]
    fn filtering_is_pure() {
        let original = catalog();
        let before = original.clone();
        let _ = visible_items_for(&Role::new("admin"), &original);
        assert_eq!(original, before);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let bad = Catalog::new(vec![
            NavItem::leaf("a", "A", "/a"),
            NavItem::leaf("a", "A again", "/a2"),
        ]);
        assert!(matches!(bad.validate(), Err(CatalogError::DuplicateId(_))));
        assert!(catalog().validate().is_ok());
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let encoded = serde_json::to_string(&catalog()).unwrap();
        let decoded: Catalog = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, catalog());
    }
}
