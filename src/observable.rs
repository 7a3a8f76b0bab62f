//! Observable values and broadcast topics
//!
//! Two publish/subscribe primitives shared by the session store, the
//! notification channel and the navigator:
//!
//! - [`Observable<T>`] holds a current value. New subscribers immediately
//!   receive that value (replay-latest), then every later change.
//! - [`Broadcast<T>`] holds nothing. Emissions reach whoever is subscribed at
//!   that moment and are otherwise lost.
//!
//! Subscribing returns a [`Subscription`] guard; dropping the guard
//! unsubscribes. Callbacks run outside of every internal lock, so a callback
//! may read the source, subscribe, or drop other guards.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

/// The subscriber list behind both primitives
struct Subscribers<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T: 'static> Subscribers<T> {
    fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    fn add(&self, callback: Callback<T>) -> Subscription {
        let id = {
            let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
            let id = registry.next_id;
            registry.next_id += 1;
            registry.entries.push((id, callback));
            id
        };

        let weak: Weak<Mutex<Registry<T>>> = Arc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = weak.upgrade() {
                let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
                registry.entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    fn snapshot(&self) -> Vec<Callback<T>> {
        let registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        registry.entries.iter().map(|(_, cb)| Arc::clone(cb)).collect()
    }

    fn notify(&self, value: &T) {
        for callback in self.snapshot() {
            (*callback)(value);
        }
    }

    fn len(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }
}

/// Guard for an active subscription
///
/// Dropping it (or calling [`Subscription::unsubscribe`]) removes the
/// callback. Outliving the source is harmless.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Explicitly end the subscription
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// A value with replay-latest change notification
pub struct Observable<T> {
    value: RwLock<T>,
    subscribers: Subscribers<T>,
}

impl<T: Clone + Send + Sync + 'static> Observable<T> {
    /// Create an observable holding `initial`
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
            subscribers: Subscribers::new(),
        }
    }

    /// Read the current value
    pub fn get(&self) -> T {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Read the current value through a closure without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.value.read().unwrap_or_else(PoisonError::into_inner);
        f(&value)
    }

    /// Replace the value and notify every subscriber
    pub fn set(&self, value: T) {
        {
            let mut current = self.value.write().unwrap_or_else(PoisonError::into_inner);
            *current = value.clone();
        }
        self.subscribers.notify(&value);
    }

    /// Subscribe to changes; `callback` runs once right away with the
    /// current value
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let callback: Callback<T> = Arc::new(callback);
        let subscription = self.subscribers.add(Arc::clone(&callback));
        let current = self.get();
        (*callback)(&current);
        subscription
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Clone + Send + Sync + fmt::Debug + 'static> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// A fire-and-forget topic with no replay
pub struct Broadcast<T> {
    subscribers: Subscribers<T>,
}

impl<T: 'static> Broadcast<T> {
    /// Create an empty topic
    pub fn new() -> Self {
        Self {
            subscribers: Subscribers::new(),
        }
    }

    /// Deliver `value` to the current subscribers
    ///
    /// Returns how many subscribers received it; zero means it was dropped.
    pub fn emit(&self, value: &T) -> usize {
        let callbacks = self.subscribers.snapshot();
        for callback in &callbacks {
            (**callback)(value);
        }
        callbacks.len()
    }

    /// Subscribe to future emissions
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        self.subscribers.add(Arc::new(callback))
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: 'static> Default for Broadcast<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> fmt::Debug for Broadcast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcast")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(&T) + Send + Sync) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value: &T| sink.lock().unwrap().push(value.clone()))
    }

    #[test]
    fn test_observable_replays_current_value() {
        let observable = Observable::new(1);
        observable.set(2);

        let (seen, callback) = recorder::<i32>();
        let _sub = observable.subscribe(callback);
        observable.set(3);

        assert_eq!(*seen.lock().unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_dropping_subscription_stops_delivery() {
        let observable = Observable::new("a".to_string());
        let (seen, callback) = recorder::<String>();

        let sub = observable.subscribe(callback);
        assert_eq!(observable.subscriber_count(), 1);
        drop(sub);
        observable.set("b".into());

        assert_eq!(observable.subscriber_count(), 0);
        assert_eq!(*seen.lock().unwrap(), vec!["a".to_string()]);
    }

    #[test]
    fn test_callback_can_read_source() {
        let observable = Arc::new(Observable::new(0));
        let source = Arc::clone(&observable);
        let (seen, sink) = recorder::<i32>();

        let _sub = observable.subscribe(move |_| sink(&source.get()));
        observable.set(5);

        assert_eq!(*seen.lock().unwrap(), vec![0, 5]);
    }

    #[test]
    fn test_broadcast_has_no_replay() {
        let topic = Broadcast::new();
        assert_eq!(topic.emit(&"lost"), 0);

        let (seen, callback) = recorder::<&'static str>();
        let _sub = topic.subscribe(callback);
        assert_eq!(topic.emit(&"kept"), 1);

        assert_eq!(*seen.lock().unwrap(), vec!["kept"]);
    }

    #[test]
    fn test_explicit_unsubscribe() {
        let topic = Broadcast::<u8>::new();
        let (seen, callback) = recorder::<u8>();
        let sub = topic.subscribe(callback);
        sub.unsubscribe();
        topic.emit(&1);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_subscription_outliving_source() {
        let topic = Broadcast::<u8>::new();
        let sub = topic.subscribe(|_| {});
        drop(topic);
        drop(sub);
    }
}
