use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use linked_list_rs::alloc::{FailAt, Global};
use linked_list_rs::{List, ListError};

struct Counting;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

// Counts per thread so that tests running side by side do not see each
// other's allocations.
unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let _ = LIVE.try_with(|live| live.set(live.get() + 1));
        }
        ptr
    }
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = LIVE.try_with(|live| live.set(live.get() - 1));
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

fn live() -> isize {
    LIVE.with(|live| live.get())
}

#[test]
fn construct_then_destroy_releases_every_node() {
    let values: Vec<u64> = (0..1000).collect();
    let before = live();
    let list = List::try_from_slice(&values).unwrap();
    assert_eq!(live() - before, 1000);
    list.destroy();
    assert_eq!(live(), before);
}

#[test]
fn reverse_allocates_nothing() {
    let values: Vec<u64> = (0..1000).collect();
    let mut list = List::try_from_slice(&values).unwrap();
    let before = live();
    list.reverse();
    assert_eq!(live(), before);
    assert_eq!(list.peek(), Some(&999));
}

#[test]
fn empty_construct_allocates_nothing() {
    let before = live();
    let list = List::try_from_slice(&[]).unwrap();
    assert_eq!(live(), before);
    list.destroy();
    assert_eq!(live(), before);
}

#[test]
fn failed_construction_leaves_nothing_behind() {
    let values: Vec<u64> = (0..100).collect();
    for k in [0, 1, 2, 50, 99] {
        let before = live();
        let mut alloc = FailAt::new(Global, k);
        let result = List::try_from_slice_in(&values, &mut alloc);
        assert_eq!(result, Err(ListError::Alloc { index: k, len: 100 }));
        assert_eq!(live(), before, "nodes leaked after failing at element {k}");
    }
}

#[test]
fn million_nodes() {
    let values: Vec<u64> = (0..1_000_000).collect();
    let before = live();
    let mut list = List::try_from_slice(&values).unwrap();
    list.reverse();
    list.reverse();
    assert_eq!(list.peek(), Some(&0));
    drop(list);
    assert_eq!(live(), before);
}
