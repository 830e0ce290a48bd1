//! A double-ended queue of `i32`s on a doubly linked list with two permanent sentinels.
//!
//! The front and back sentinels are allocated once in [`Deque::new`] and never hold data, so
//! every insertion and removal is the same four-link splice regardless of where the list ends.


mod config;
mod error;
mod item;
mod iter;
mod node;
mod shared;

pub mod prelude {
    pub use super::{Config, Deque, DequeItem, Error, IResult, SharedDeque};
}

pub use config::{Config, ConfigInner};
pub use error::{Error, IResult};
pub use item::DequeItem;
pub use node::Node;
pub use shared::SharedDeque;

use std::{fmt, ptr::NonNull};

pub struct Deque {
    front: NonNull<Node>,
    back: NonNull<Node>,
    count: usize,
    config: Config,
}

// SAFETY: the deque uniquely owns every node it points to, nothing is shared across handles.
unsafe impl Send for Deque {}

impl Deque {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let mut front = allocate(Node::new());
        let mut back = allocate(Node::new());

        // SAFETY: both sentinels were just allocated and are not aliased yet
        unsafe {
            front.as_mut().set_next(back);
            back.as_mut().set_prev(front);
        }

        Self {
            front,
            back,
            count: 0,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn add_to_back(&mut self, x: i32) {
        // SAFETY: `self.back` is allocated in `Self::with_config` and lives until `Drop`
        unsafe {
            self.splice(self.back, Direction::Before, x);
        }
    }

    pub fn add_to_front(&mut self, x: i32) {
        // SAFETY: `self.front` is allocated in `Self::with_config` and lives until `Drop`
        unsafe {
            self.splice(self.front, Direction::After, x);
        }
    }

    /// Reads the last element without removing it.
    pub fn get_back(&self) -> DequeItem {
        match self.back_element() {
            // SAFETY: element nodes stay alive while borrowed through `&self`
            Some(node) => DequeItem::found(unsafe { node.as_ref().info() }),
            None => {
                log::debug!("get_back on an empty deque");
                DequeItem::missing(self.config.placeholder)
            }
        }
    }

    /// Reads the first element without removing it.
    pub fn get_front(&self) -> DequeItem {
        match self.front_element() {
            // SAFETY: element nodes stay alive while borrowed through `&self`
            Some(node) => DequeItem::found(unsafe { node.as_ref().info() }),
            None => {
                log::debug!("get_front on an empty deque");
                DequeItem::missing(self.config.placeholder)
            }
        }
    }

    /// Returns `false` and leaves the deque untouched when it is empty.
    pub fn remove_back(&mut self) -> bool {
        self.pop_back().is_some()
    }

    /// Returns `false` and leaves the deque untouched when it is empty.
    pub fn remove_front(&mut self) -> bool {
        self.pop_front().is_some()
    }

    pub fn pop_back(&mut self) -> Option<i32> {
        let Some(victim) = self.back_element() else {
            log::debug!("pop_back on an empty deque");
            return None;
        };

        // SAFETY: `back_element` only yields linked element nodes, never a sentinel
        Some(unsafe { self.unlink(victim) })
    }

    pub fn pop_front(&mut self) -> Option<i32> {
        let Some(victim) = self.front_element() else {
            log::debug!("pop_front on an empty deque");
            return None;
        };

        // SAFETY: `front_element` only yields linked element nodes, never a sentinel
        Some(unsafe { self.unlink(victim) })
    }

    /// Walks the list from both sentinels and checks that the links agree with `len()`.
    pub fn validate(&self) -> IResult<()> {
        // SAFETY: only links reachable from the sentinels are followed, and both walks
        //         stop after at most `count + 1` steps
        unsafe {
            let front_next = self.front.as_ref().next();
            let back_prev = self.back.as_ref().prev();
            let empty = self.count == 0;
            if empty != (front_next == Some(self.back)) || empty != (back_prev == Some(self.front))
            {
                return Err(Error::EmptyState { count: self.count });
            }

            let walked = self.walk(Direction::After)?;
            if walked != self.count {
                return Err(Error::ForwardWalk {
                    expected: self.count,
                    walked,
                });
            }

            let walked = self.walk(Direction::Before)?;
            if walked != self.count {
                return Err(Error::BackwardWalk {
                    expected: self.count,
                    walked,
                });
            }
        }

        Ok(())
    }

    pub(crate) fn iter(&self) -> iter::Iter<'_> {
        // SAFETY: the inner links of the sentinels point at the first and last element,
        //         or at each other while `count` is 0 and nothing gets followed
        unsafe {
            let start = self.front.as_ref().next().unwrap_or(self.back);
            let end = self.back.as_ref().prev().unwrap_or(self.front);
            iter::Iter::new(start, end, self.count)
        }
    }

    fn front_element(&self) -> Option<NonNull<Node>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: `self.front` lives until `Drop`
        unsafe { self.front.as_ref().next() }
    }

    fn back_element(&self) -> Option<NonNull<Node>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: `self.back` lives until `Drop`
        unsafe { self.back.as_ref().prev() }
    }

    /// Allocates a node for `info` and links it next to `anchor`.
    ///
    /// # Safety
    ///
    /// `anchor` must be a node of this deque.
    ///
    /// # Panics
    ///
    /// Panics if `anchor` is a sentinel and `direction` points away from the rest of the list.
    unsafe fn splice(&mut self, anchor: NonNull<Node>, direction: Direction, info: i32) {
        let (Some(mut prev_for_new), Some(mut next_for_new)) =
            retrieve_paired_elements(anchor, Pair::AnchorAnd(direction))
        else {
            unreachable!("tried to insert element outside of the sentinels");
        };

        // the new node captures both neighbours before either of them is rewritten
        let mut node = Node::with_info(info);
        node.set_prev(prev_for_new);
        node.set_next(next_for_new);
        let new_node = allocate(node);

        prev_for_new.as_mut().set_next(new_node);
        next_for_new.as_mut().set_prev(new_node);

        self.count += 1;
        log::trace!("linked {} ({} elements)", info, self.count);
    }

    /// Repairs the cross links of both neighbours of `victim`, then releases it.
    ///
    /// # Safety
    ///
    /// `victim` must be an element node currently linked into this deque.
    unsafe fn unlink(&mut self, victim: NonNull<Node>) -> i32 {
        let (Some(mut prev), Some(mut next)) = retrieve_paired_elements(victim, Pair::Surrounding)
        else {
            unreachable!("element node is missing a neighbour");
        };

        prev.as_mut().set_next(next);
        next.as_mut().set_prev(prev);
        self.count -= 1;

        let node = Box::from_raw(victim.as_ptr());
        log::trace!("unlinked {} ({} elements)", node.info(), self.count);
        node.info()
    }

    /// Steps from one sentinel to the other, checking link symmetry on the way. Returns the
    /// number of element nodes passed, or `count + 1` if the other sentinel wasn't reached.
    ///
    /// # Safety
    ///
    /// The links followed must point at live nodes.
    unsafe fn walk(&self, direction: Direction) -> IResult<usize> {
        let (mut current, target) = match direction {
            Direction::After => (self.front, self.back),
            Direction::Before => (self.back, self.front),
        };
        let mut walked = 0;

        loop {
            let step = match direction {
                Direction::After => current.as_ref().next(),
                Direction::Before => current.as_ref().prev(),
            };
            let Some(step) = step else {
                return Err(Error::Asymmetric { position: walked });
            };

            let back_link = match direction {
                Direction::After => step.as_ref().prev(),
                Direction::Before => step.as_ref().next(),
            };
            if back_link != Some(current) {
                return Err(Error::Asymmetric { position: walked });
            }
            if step == target {
                return Ok(walked);
            }

            walked += 1;
            if walked > self.count {
                return Ok(walked);
            }
            current = step;
        }
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Before,
    After,
}

enum Pair {
    AnchorAnd(Direction),
    Surrounding,
}

/// Retrieves the given pair in relation to the given anchor node. The returned tuple refers to a
/// pair of `(left, right)`, where "next" is "right-hand". If the relative node is inaccessible
/// because the anchor is a sentinel, it'll be `None`.
///
/// # Safety
///
/// The caller must ensure that `anchor` refers to a live node.
unsafe fn retrieve_paired_elements(
    anchor: NonNull<Node>,
    which: Pair,
) -> (Option<NonNull<Node>>, Option<NonNull<Node>>) {
    match which {
        Pair::AnchorAnd(Direction::Before) => {
            let before_anchor = anchor.as_ref().prev();
            (before_anchor, Some(anchor))
        }
        Pair::AnchorAnd(Direction::After) => {
            let after_anchor = anchor.as_ref().next();
            (Some(anchor), after_anchor)
        }
        Pair::Surrounding => {
            let before_anchor = anchor.as_ref().prev();
            let after_anchor = anchor.as_ref().next();
            (before_anchor, after_anchor)
        }
    }
}

fn allocate<T>(item: T) -> NonNull<T> {
    let ptr = Box::into_raw(Box::new(item));
    // SAFETY: `Box::into_raw` always returns a non-null pointer according to the docs
    unsafe { NonNull::new_unchecked(ptr) }
}

impl fmt::Display for Deque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deque: [")?;
        for (i, info) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{info}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for Deque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Default for Deque {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Deque {
    fn drop(&mut self) {
        // SAFETY: every node between the sentinels came from `splice` and is still linked
        //         exactly once, the sentinels came from `with_config`
        unsafe {
            let mut element = self.front.as_ref().next();
            while let Some(node) = element {
                if node == self.back {
                    break;
                }
                element = node.as_ref().next();
                drop(Box::from_raw(node.as_ptr()));
            }
            drop(Box::from_raw(self.front.as_ptr()));
            drop(Box::from_raw(self.back.as_ptr()));
        }
    }
}
