//! Walking the live elements. Used for display and for link validation.
//!
//! ```text
//!  forward_node               backward_node
//!            |                 |
//!            v                 v
//!  front <-> node <-> node <-> node <-> back
//! ```
//!
//! Both ends are bounded by `remaining`, so the sentinels are never yielded.

use std::{marker::PhantomData, ptr::NonNull};

use crate::node::Node;

pub(crate) struct Iter<'list> {
    forward_node: NonNull<Node>,
    backward_node: NonNull<Node>,
    remaining: usize,
    _bound_to_list: PhantomData<&'list Node>,
}

enum Direction {
    Forward,
    Backward,
}

impl<'list> Iter<'list> {
    /// # Safety
    ///
    /// `forward_start` and `backward_start` must be the first and last element nodes of a list
    /// holding exactly `len` elements, and that list must outlive `'list`.
    pub(crate) unsafe fn new(
        forward_start: NonNull<Node>,
        backward_start: NonNull<Node>,
        len: usize,
    ) -> Self {
        Self {
            forward_node: forward_start,
            backward_node: backward_start,
            remaining: len,
            _bound_to_list: PhantomData,
        }
    }

    fn next_in_dir(&mut self, direction: Direction) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // SAFETY: `remaining` never exceeds the number of element nodes still unvisited,
        //         which the contract of `new` guarantees are alive for `'list`.
        let info = match direction {
            Direction::Forward => unsafe {
                let node = self.forward_node.as_ref();
                if let Some(next) = node.next() {
                    self.forward_node = next;
                }
                node.info()
            },
            Direction::Backward => unsafe {
                let node = self.backward_node.as_ref();
                if let Some(prev) = node.prev() {
                    self.backward_node = prev;
                }
                node.info()
            },
        };

        Some(info)
    }
}

impl<'list> Iterator for Iter<'list> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.next_in_dir(Direction::Forward)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'list> DoubleEndedIterator for Iter<'list> {
    fn next_back(&mut self) -> Option<i32> {
        self.next_in_dir(Direction::Backward)
    }
}

impl<'list> ExactSizeIterator for Iter<'list> {}
