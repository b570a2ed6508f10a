use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};

/// core queue structure: handles only enqueue/dequeue logic
#[derive(Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create a new, empty queue
    pub(crate) fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    /// Enqueue an item at the back
    pub(crate) fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
        // --post operation assertion
        assert!(!self.items.is_empty(), "Queue must have at least one item after enqueue");
    }

    /// Dequeue the front item, if any
    pub(crate) fn dequeue(&mut self) -> Option<T> {
        let len_before = self.items.len();
        let result = self.items.pop_front();
        // -- post op assertion: queue size decreases if dequeue succeeded
        match result {
            Some(_) => assert_eq!(self.items.len(), len_before - 1, "Queue length should decrease by 1"),
            None => assert_eq!(self.items.len(), len_before, "Queue length unchanged when empty"),
        }
        result
    }

    /// Get the current queue length
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Monitor over the queue: a mutex guarding the items plus the condition
/// signal that parks consumers while the queue is empty. The lock is never
/// exposed; all access goes through the synchronized operations below.
pub struct ConcurrentQueue<T> {
    inner: Mutex<Queue<T>>,
    not_empty: Condvar,
}

impl<T> ConcurrentQueue<T> {
    /// Create a new, empty queue with a fresh lock and signal
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Queue::new()),
            not_empty: Condvar::new(),
        }
    }

    /// Check if empty at the instant of the call.
    ///
    /// This is a snapshot, not a reservation: another thread may push or pop
    /// before the caller acts on the result.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }

    /// Current queue length, same snapshot semantics as `is_empty`
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Enqueue a value and wake one parked consumer.
    ///
    /// Never suspends; the lock is held only for the append. If no consumer
    /// is parked the notification is a no-op and the value stays queued for
    /// the next `wait_and_pop`.
    pub fn push(&self, value: T) {
        let mut queue = self.inner.lock().unwrap();
        queue.enqueue(value);
        drop(queue);
        self.not_empty.notify_one();
    }

    /// Blocking pop: park until an item is available, then remove and return
    /// the front item.
    ///
    /// Never returns without a value; there is no timeout and no cancellation.
    /// Two concurrent calls never receive the same item. The wait loops on
    /// the condition: a wakeup may be spurious, or another consumer may have
    /// taken the item first, so emptiness is re-checked every time.
    pub fn wait_and_pop(&self) -> T {
        let mut queue = self.inner.lock().unwrap();
        loop {
            // pop_front moves the item out, so removal and hand-back are one
            // step; the queue is never left missing an undelivered item
            if let Some(item) = queue.dequeue() {
                return item;
            }
            // releases the lock while parked, re-acquires on wake
            queue = self.not_empty.wait(queue).unwrap();
        }
    }
}

impl<T: Clone> Clone for ConcurrentQueue<T> {
    /// Snapshot copy: captures the source contents under its lock and builds
    /// an independent queue with its own fresh lock and signal. Pushes to the
    /// source after the copy are not reflected in it.
    fn clone(&self) -> Self {
        let source = self.inner.lock().unwrap();
        Self {
            inner: Mutex::new(source.clone()),
            not_empty: Condvar::new(),
        }
    }
}

impl<T> Default for ConcurrentQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe shared handle. Every operation takes `&self`, so a live
/// queue's contents, lock and signal can never be replaced through it.
pub type SafeQueue<T> = Arc<ConcurrentQueue<T>>;
