//! One coarse lock around a whole deque, for callers that need to share it across threads.
//!
//! The link invariants are not safe under interleaved mutation, so every operation takes the
//! single mutex for its full duration. Use [`SharedDeque::lock`] when several operations must
//! observe the same state.

use std::{fmt, sync::Arc};

use parking_lot::{Mutex, MutexGuard};

use crate::{Config, Deque, DequeItem, IResult};

#[derive(Clone, Default)]
pub struct SharedDeque(Arc<Mutex<Deque>>);

impl SharedDeque {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Deque::with_config(config).into()
    }

    pub fn lock(&self) -> MutexGuard<'_, Deque> {
        self.0.lock()
    }

    pub fn add_to_back(&self, x: i32) {
        self.lock().add_to_back(x)
    }

    pub fn add_to_front(&self, x: i32) {
        self.lock().add_to_front(x)
    }

    pub fn get_back(&self) -> DequeItem {
        self.lock().get_back()
    }

    pub fn get_front(&self) -> DequeItem {
        self.lock().get_front()
    }

    pub fn remove_back(&self) -> bool {
        self.lock().remove_back()
    }

    pub fn remove_front(&self) -> bool {
        self.lock().remove_front()
    }

    pub fn pop_back(&self) -> Option<i32> {
        self.lock().pop_back()
    }

    pub fn pop_front(&self) -> Option<i32> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn validate(&self) -> IResult<()> {
        self.lock().validate()
    }

    /// Same text as `Deque`'s `Display`, taken under the lock.
    pub fn describe(&self) -> String {
        self.lock().to_string()
    }
}

impl From<Deque> for SharedDeque {
    fn from(deque: Deque) -> Self {
        Self(Arc::new(Mutex::new(deque)))
    }
}

impl fmt::Debug for SharedDeque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedDeque").field(&*self.lock()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SharedDeque;
    use std::thread;

    #[test]
    fn concurrent_pushes_keep_links_intact() {
        let shared = SharedDeque::new();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..500 {
                        if i % 2 == 0 {
                            shared.add_to_back(t * 1000 + i);
                        } else {
                            shared.add_to_front(t * 1000 + i);
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 2000);
        assert_eq!(shared.validate(), Ok(()));
    }

    #[test]
    fn concurrent_drain_removes_each_element_once() {
        let shared = SharedDeque::new();
        for i in 0..1000 {
            shared.add_to_back(i);
        }

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let mut taken = 0usize;
                    loop {
                        let popped = if t % 2 == 0 {
                            shared.pop_front()
                        } else {
                            shared.pop_back()
                        };
                        match popped {
                            Some(_) => taken += 1,
                            None => break taken,
                        }
                    }
                })
            })
            .collect();
        let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(total, 1000);
        assert!(shared.is_empty());
        assert!(!shared.remove_back());
        assert_eq!(shared.describe(), "Deque: []");
    }

    #[test]
    fn lock_spans_compound_operations() {
        let shared = SharedDeque::new();
        {
            let mut deque = shared.lock();
            deque.add_to_back(1);
            deque.add_to_back(2);
            assert_eq!(deque.get_front().into_option(), Some(1));
        }
        assert_eq!(format!("{:?}", shared), "SharedDeque([1, 2])");
    }
}
