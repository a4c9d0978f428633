//! Tabula session - explicit host-side context for list views.
//!
//! The front end this workspace grew out of read its auth token and role
//! from browser storage wherever it needed them, and broadcast auth or
//! verification changes as window-global events. This crate replaces both
//! ambient mechanisms with explicit values:
//!
//! - [`Session`] carries the token and [`Role`] into every view that needs
//!   them, instead of each view reaching into global storage.
//! - [`Catalog`] plus the pure [`visible_items_for`] compute role-gated
//!   navigation; nothing here enforces authorization, which stays with the
//!   backend.
//! - [`EventBus`] is an application-scoped, typed pub/sub for cross-view
//!   notification ([`SessionChanged`], [`VerificationChanged`]).

mod bus;
mod catalog;
mod session;

pub use bus::{EventBus, SessionChanged, SubscriptionId, VerificationChanged};
pub use catalog::{visible_items_for, Catalog, CatalogError, NavItem};
pub use session::{Role, Session};
