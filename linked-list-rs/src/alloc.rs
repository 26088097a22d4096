use std::alloc::Layout;

/// Source of raw node storage.
///
/// # Safety
///
/// `allocate` must either return null or a pointer obtained from the global
/// allocator (`std::alloc::alloc` or equivalent) for exactly `layout`, since the
/// list hands it to `Box::from_raw` and frees it through the global allocator.
/// Callers never pass a zero-sized layout.
pub unsafe trait NodeAlloc {
    fn allocate(&mut self, layout: Layout) -> *mut u8;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Global;

unsafe impl NodeAlloc for Global {
    fn allocate(&mut self, layout: Layout) -> *mut u8 {
        debug_assert!(layout.size() != 0);
        unsafe { std::alloc::alloc(layout) }
    }
}

/// Fails the `fail_at`-th request (counting from zero) and forwards all others.
#[derive(Debug)]
pub struct FailAt<A> {
    inner: A,
    fail_at: usize,
    calls: usize,
}

impl<A> FailAt<A> {
    pub fn new(inner: A, fail_at: usize) -> Self {
        FailAt {
            inner,
            fail_at,
            calls: 0,
        }
    }
    pub fn calls(&self) -> usize {
        self.calls
    }
}

unsafe impl<A: NodeAlloc> NodeAlloc for FailAt<A> {
    fn allocate(&mut self, layout: Layout) -> *mut u8 {
        let call = self.calls;
        self.calls += 1;
        if call == self.fail_at {
            std::ptr::null_mut()
        } else {
            self.inner.allocate(layout)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fail_at_counts_and_fails_once() {
        let layout = Layout::new::<u64>();
        let mut alloc = FailAt::new(Global, 1);

        let first = alloc.allocate(layout);
        assert!(!first.is_null());
        assert!(alloc.allocate(layout).is_null());
        let third = alloc.allocate(layout);
        assert!(!third.is_null());
        assert_eq!(alloc.calls(), 3);

        unsafe {
            std::alloc::dealloc(first, layout);
            std::alloc::dealloc(third, layout);
        }
    }
}
