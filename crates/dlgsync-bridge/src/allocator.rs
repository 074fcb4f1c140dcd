use dlgsync_common::Handle;

/// Issues handles in strictly increasing order starting at 0.
///
/// There is no way to return a handle, so a value is never issued twice
/// for the lifetime of the allocator.
#[derive(Debug, Default)]
pub struct HandleAllocator {
    next: u64,
}

impl HandleAllocator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn next_handle(&mut self) -> Handle {
        let handle = Handle(self.next);
        self.next += 1;
        handle
    }

    /// The handle the next call to `next_handle` will return.
    pub fn peek(&self) -> Handle {
        Handle(self.next)
    }

    /// How many handles have been issued so far.
    pub fn allocated(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let mut alloc = HandleAllocator::new();
        assert_eq!(alloc.next_handle(), Handle(0));
    }

    #[test]
    fn strictly_increasing() {
        let mut alloc = HandleAllocator::new();
        let handles: Vec<Handle> = (0..100).map(|_| alloc.next_handle()).collect();
        assert!(handles.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(alloc.allocated(), 100);
    }

    #[test]
    fn peek_does_not_allocate() {
        let mut alloc = HandleAllocator::new();
        alloc.next_handle();
        assert_eq!(alloc.peek(), Handle(1));
        assert_eq!(alloc.peek(), Handle(1));
        assert_eq!(alloc.next_handle(), Handle(1));
        assert_eq!(alloc.allocated(), 2);
    }
}
