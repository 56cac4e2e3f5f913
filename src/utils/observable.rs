//! Single-threaded observable value.
//!
//! A [`Subject`] owns a value and a list of subscribers. Every [`Subject::set`]
//! or [`Subject::update`] re-invokes the subscribers synchronously with the
//! new value. Subscribers stay registered for as long as the returned
//! [`Subscription`] is alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Inner<T> {
    value: T,
    /// Bumped on every change; lets an outer notification stop once a
    /// callback has published something newer.
    version: u64,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

pub struct Subject<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Subject<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Registers `callback`. It is not called with the current value; read
    /// [`Subject::get`] for that.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let callback: Callback<T> = Rc::new(RefCell::new(callback));
        inner.subscribers.push((id, callback));

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
    }

    /// Mutates the value in place, then notifies.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        {
            let mut inner = self.inner.borrow_mut();
            f(&mut inner.value);
            inner.version += 1;
        }
        self.notify();
    }

    fn notify(&self) {
        // Snapshot so callbacks may subscribe, unsubscribe or set again.
        let (version, value, callbacks): (u64, T, Vec<Callback<T>>) = {
            let inner = self.inner.borrow();
            (
                inner.version,
                inner.value.clone(),
                inner.subscribers.iter().map(|(_, cb)| Rc::clone(cb)).collect(),
            )
        };

        for callback in callbacks {
            // A nested change has already reached the remaining subscribers.
            if self.inner.borrow().version != version {
                break;
            }
            // A callback that re-enters its own subject is skipped.
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (&mut *callback)(&value);
            }
        }
    }
}

/// Keeps a subscriber registered. Dropping it unsubscribes.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscribers_see_every_change() {
        let subject = Subject::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = subject.subscribe(move |v| sink.borrow_mut().push(*v));

        subject.set(1);
        subject.update(|v| *v += 10);

        assert_eq!(*seen.borrow(), vec![1, 11]);
        assert_eq!(subject.get(), 11);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let subject = Subject::new("a".to_string());
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let sub = subject.subscribe(move |_| counter.set(counter.get() + 1));

        subject.set("b".into());
        drop(sub);
        subject.set("c".into());

        assert_eq!(calls.get(), 1);
        assert!(subject.inner.borrow().subscribers.is_empty());
    }

    #[test]
    fn subscription_outliving_subject_is_harmless() {
        let subject = Subject::new(1);
        let sub = subject.subscribe(|_| {});
        drop(subject);
        drop(sub);
    }

    #[test]
    fn callback_may_set_the_subject_again() {
        let subject = Subject::new(0);
        let inner = subject.clone();
        let _sub = subject.subscribe(move |v| {
            if *v == 1 {
                inner.set(2);
            }
        });

        subject.set(1);
        assert_eq!(subject.get(), 2);
    }

    #[test]
    fn later_subscribers_end_on_the_nested_value() {
        let subject = Subject::new(0);
        let inner = subject.clone();
        let _first = subject.subscribe(move |v| {
            if *v == 1 {
                inner.set(2);
            }
        });
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _second = subject.subscribe(move |v| sink.borrow_mut().push(*v));

        subject.set(1);

        assert_eq!(subject.get(), 2);
        assert_eq!(*seen.borrow(), vec![2]);
    }
}
