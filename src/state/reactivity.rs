// ============================================================================
// REACTIVITY - single-writer state cell with subscriber notifications
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Box<dyn Fn()>;

/// Reactive state cell. All mutations go through `set`/`update`, which notify
/// every subscriber. Clones share both the value and the subscriber list, so a
/// handle captured by an async task observes the current value, never a stale
/// copy.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Borrow the current value for reading
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Mutate the value in place and notify subscribers
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Subscribe to changes
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    /// Clone of the current value
    pub fn snapshot(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_value_and_subscribers() {
        let cell = ReactiveState::new(0u32);
        let seen = Rc::new(RefCell::new(0u32));

        let seen_clone = seen.clone();
        let reader = cell.clone();
        cell.subscribe(move || {
            *seen_clone.borrow_mut() = reader.snapshot();
        });

        let writer = cell.clone();
        writer.update(|v| *v += 5);

        assert_eq!(cell.snapshot(), 5);
        assert_eq!(*seen.borrow(), 5);
    }
}
