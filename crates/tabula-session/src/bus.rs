//! Application-scoped typed event bus.
//!
//! Replaces the window-global custom events the source application used for
//! cross-view notification. Subscribers register against a concrete payload
//! type; publishing an event delivers it to that type's subscribers in
//! subscription order. Single-threaded by design, like the views it serves.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Rc<dyn Fn(&dyn Any)>;

/// Typed publish/subscribe hub owned by the application shell.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tabula_session::{EventBus, VerificationChanged};
///
/// let mut bus = EventBus::new();
/// let seen = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&seen);
/// bus.subscribe(move |event: &VerificationChanged| {
///     if event.verified {
///         counter.set(counter.get() + 1);
///     }
/// });
///
/// bus.publish(&VerificationChanged { consultant_id: "c-17".into(), verified: true });
/// assert_eq!(seen.get(), 1);
/// ```
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<TypeId, Vec<(SubscriptionId, Handler)>>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        EventBus::default()
    }

    /// Registers a handler for events of type `E`.
    pub fn subscribe<E, F>(&mut self, handler: F) -> SubscriptionId
    where
        E: 'static,
        F: Fn(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let erased: Handler = Rc::new(move |any: &dyn Any| {
            if let Some(event) = any.downcast_ref::<E>() {
                handler(event);
            }
        });
        self.handlers
            .entry(TypeId::of::<E>())
            .or_default()
            .push((id, erased));
        id
    }

    /// Removes a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        for subscribers in self.handlers.values_mut() {
            subscribers.retain(|(sub_id, _)| *sub_id != id);
        }
    }

    /// Delivers an event to every subscriber of its type, in subscription
    /// order.
    ///
    /// Subscribing and unsubscribing need `&mut self`, so the handler list
    /// cannot change underneath a delivery.
    pub fn publish<E: 'static>(&self, event: &E) {
        if let Some(subscribers) = self.handlers.get(&TypeId::of::<E>()) {
            for (_, handler) in subscribers {
                handler(event);
            }
        }
    }

    /// Number of subscribers for an event type.
    pub fn subscriber_count<E: 'static>(&self) -> usize {
        self.handlers
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }
}

/// The session was replaced (sign-in, sign-out, role change).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionChanged {
    pub session: Session,
}

/// A consultant's document-verification status changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationChanged {
    pub consultant_id: String,
    pub verified: bool,
}
