pub type SubscriptionId = u64;

type Listener<T> = Box<dyn Fn(&T)>;

pub struct Subscribers<T> {
    next_id: SubscriptionId,
    entries: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

impl<T> Subscribers<T> {
    pub fn subscribe(&mut self, listener: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify(&self, value: &T) {
        for (_, listener) in &self.entries {
            listener(value);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn unsubscribed_listener_stops_receiving() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::<u32>::default();

        let first = {
            let seen = Rc::clone(&seen);
            subscribers.subscribe(move |value| seen.borrow_mut().push(*value))
        };
        subscribers.notify(&1);
        assert!(subscribers.unsubscribe(first));
        assert!(!subscribers.unsubscribe(first));
        subscribers.notify(&2);

        assert_eq!(*seen.borrow(), vec![1]);
        assert!(subscribers.is_empty());
    }
}
