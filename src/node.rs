//! The list cell. A passive record: one value and two neighbour links.

use std::ptr::NonNull;

pub(crate) type Link = Option<NonNull<Node>>;

#[derive(Debug)]
pub struct Node {
    info: i32,
    prev: Link,
    next: Link,
}

impl Node {
    /// A detached node holding `0`.
    pub fn new() -> Self {
        Self {
            info: 0,
            prev: None,
            next: None,
        }
    }

    pub fn with_info(info: i32) -> Self {
        Self {
            info,
            ..Self::new()
        }
    }

    pub fn info(&self) -> i32 {
        self.info
    }

    pub fn set_info(&mut self, info: i32) {
        self.info = info;
    }

    pub(crate) fn prev(&self) -> Link {
        self.prev
    }

    pub(crate) fn next(&self) -> Link {
        self.next
    }

    // Storing a pointer is harmless, only following it needs `unsafe`.
    pub(crate) fn set_prev(&mut self, ptr: NonNull<Node>) {
        self.prev = Some(ptr);
    }

    pub(crate) fn set_next(&mut self, ptr: NonNull<Node>) {
        self.next = Some(ptr);
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_node_is_detached_zero() {
        let node = Node::new();
        assert_eq!(node.info(), 0);
        assert!(node.prev().is_none());
        assert!(node.next().is_none());
    }

    #[test]
    fn links_are_stored_as_given() {
        let mut a = Node::with_info(1);
        let mut b = Node::with_info(2);
        let pa = NonNull::from(&mut a);
        let pb = NonNull::from(&mut b);

        a.set_next(pb);
        b.set_prev(pa);
        b.set_info(-7);

        assert_eq!(a.next(), Some(pb));
        assert_eq!(b.prev(), Some(pa));
        assert_eq!(b.info(), -7);
    }
}
