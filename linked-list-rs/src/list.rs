use std::alloc::Layout;
use std::fmt;
use std::io;

use log::{debug, trace, warn};

use crate::alloc::{Global, NodeAlloc};
use crate::error::ListError;

#[derive(Default)]
pub struct List {
    head: Link,
}

type Link = Option<Box<Node>>;

struct Node {
    val: u64,
    next: Link,
}

fn alloc_node<A: NodeAlloc + ?Sized>(alloc: &mut A, val: u64) -> Option<Box<Node>> {
    let ptr = alloc.allocate(Layout::new::<Node>()) as *mut Node;
    if ptr.is_null() {
        return None;
    }
    // SAFETY: `NodeAlloc` guarantees a global-allocator block sized and
    // aligned for `Node`, which is what `Box::from_raw` expects.
    unsafe {
        ptr.write(Node { val, next: None });
        Some(Box::from_raw(ptr))
    }
}

impl List {
    pub fn new() -> Self {
        List { head: None }
    }

    pub fn try_from_slice(values: &[u64]) -> Result<List, ListError> {
        Self::try_from_slice_in(values, &mut Global)
    }

    pub fn try_from_slice_in<A: NodeAlloc + ?Sized>(
        values: &[u64],
        alloc: &mut A,
    ) -> Result<List, ListError> {
        let len = values.len();
        let mut list = List::new();
        let mut tail = &mut list.head;
        for (index, &val) in values.iter().enumerate() {
            let node = match alloc_node(alloc, val) {
                Some(node) => node,
                None => {
                    if index > 0 {
                        warn!("allocation failed at element {index} of {len}, rolling back");
                        list.destroy();
                    } else {
                        warn!("allocation failed for the head of a {len}-element list");
                    }
                    return Err(ListError::Alloc { index, len });
                }
            };
            tail = &mut tail.insert(node).next;
        }
        debug!("built list of {len} nodes");
        Ok(list)
    }

    pub fn push(&mut self, val: u64) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { val, next }));
    }
    pub fn pop(&mut self) -> Option<u64> {
        self.head.take().map(|node| {
            self.head = node.next;
            node.val
        })
    }
    pub fn peek(&self) -> Option<&u64> {
        self.head.as_ref().map(|node| &node.val)
    }
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn reverse(&mut self) {
        let mut prev: Link = None;
        let mut current = self.head.take();
        let mut steps = 0usize;
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = prev;
            prev = Some(node);
            steps += 1;
        }
        self.head = prev;
        trace!("reversed {steps} links");
    }

    pub fn display<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    // Empty lists are fine.
    pub fn destroy(mut self) {
        let released = self.release();
        debug!("destroyed list of {released} nodes");
    }

    fn release(&mut self) -> usize {
        let mut cur_link = self.head.take();
        let mut released = 0;
        while let Some(mut node) = cur_link {
            cur_link = node.next.take();
            released += 1;
        }
        released
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl Drop for List {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for val in self.iter() {
            write!(f, "{val} -> ")?;
        }
        f.write_str("NULL")
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}
impl Eq for List {}

impl FromIterator<u64> for List {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let mut list = List::new();
        let mut tail = &mut list.head;
        for val in iter {
            tail = &mut tail.insert(Box::new(Node { val, next: None })).next;
        }
        list
    }
}

impl From<&[u64]> for List {
    fn from(values: &[u64]) -> Self {
        values.iter().copied().collect()
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a u64;
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.val
        })
    }
}

pub struct IntoIter(List);

impl Iterator for IntoIter {
    type Item = u64;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }
}

impl IntoIterator for List {
    type Item = u64;
    type IntoIter = IntoIter;
    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a u64;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
