//! Observable output cells
//!
//! A [`Published<T>`] holds the latest value of a derived output and fans every
//! assignment out to its subscribers synchronously, before `set` returns. There
//! is no batching and no equality suppression: each assignment is one
//! notification.
//!
//! Subscribing only needs a shared reference, so views can attach observers to
//! a view-model they do not own mutably. Publishing needs `&mut`, which rules
//! out an observer mutating the same owner while it is being notified.
//!
//! ```rust
//! use spark_core::Published;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut label = Published::new(String::from("idle"));
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let log_clone = log.clone();
//! let _subscription = label.subscribe(move |value: &String| {
//!     log_clone.borrow_mut().push(value.clone());
//! });
//!
//! label.set("focused".into());
//! label.set("focused".into());
//! assert_eq!(*log.borrow(), vec!["focused", "focused"]);
//! ```

use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::fmt;

new_key_type! {
    /// Unique identifier for a subscriber callback
    pub struct SubscriberId;
}

/// Handle returned by [`Published::subscribe`], used to unsubscribe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: SubscriberId,
}

impl Subscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }
}

type Callback<T> = Box<dyn FnMut(&T)>;

/// An observable value with synchronous subscriber notification
pub struct Published<T> {
    /// Latest published value
    value: T,
    /// Number of assignments since creation
    version: u64,
    /// Subscribers notified on every assignment
    subscribers: RefCell<SlotMap<SubscriberId, Callback<T>>>,
}

impl<T> Published<T> {
    /// Create a cell holding `initial` with no subscribers
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            version: 0,
            subscribers: RefCell::new(SlotMap::with_key()),
        }
    }

    /// Current value
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of times a value has been published
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replace the value and notify every subscriber
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.version += 1;
        self.notify_subscribers();
    }

    /// Register a callback invoked with each newly published value
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        let id = self.subscribers.borrow_mut().insert(Box::new(callback));
        Subscription { id }
    }

    /// Remove a subscriber. Returns `false` if it was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.subscribers
            .borrow_mut()
            .remove(subscription.id)
            .is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn notify_subscribers(&mut self) {
        let value = &self.value;
        for callback in self.subscribers.get_mut().values_mut() {
            callback(value);
        }
    }
}

impl<T: Clone> Published<T> {
    /// Clone of the current value
    pub fn value(&self) -> T {
        self.value.clone()
    }
}

impl<T: Default> Default for Published<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Published<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Published")
            .field("value", &self.value)
            .field("version", &self.version)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
