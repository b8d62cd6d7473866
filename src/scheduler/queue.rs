//! Bounded binary min-heap of timed events
use super::event::TimedEvent;

/// Insert was refused because the queue is at capacity. Carries the
/// rejected event back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub TimedEvent);

const VACANT: TimedEvent = TimedEvent::mole_pop(0);

/// Fixed-capacity priority queue keyed on `fire_time`. The root always
/// holds the earliest event; ties are not ordered.
pub struct EventQueue<const N: usize> {
    heap: [TimedEvent; N],
    len: usize,
}

impl<const N: usize> EventQueue<N> {
    pub const fn new() -> Self {
        Self {
            heap: [VACANT; N],
            len: 0,
        }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len >= N
    }

    pub fn insert(&mut self, event: TimedEvent) -> Result<(), QueueFull> {
        if self.is_full() {
            return Err(QueueFull(event));
        }

        self.heap[self.len] = event;
        self.len += 1;
        self.sift_up(self.len - 1);
        Ok(())
    }

    pub fn peek_min(&self) -> Option<&TimedEvent> {
        if self.is_empty() {
            None
        } else {
            Some(&self.heap[0])
        }
    }

    pub fn extract_min(&mut self) -> Option<TimedEvent> {
        if self.is_empty() {
            return None;
        }

        let min = self.heap[0];
        self.len -= 1;
        if self.len > 0 {
            self.heap[0] = self.heap[self.len];
            self.sift_down(0);
        }
        Some(min)
    }

    /// Removes the earliest event if it is due at `now`.
    pub fn pop_due(&mut self, now: u32) -> Option<TimedEvent> {
        match self.peek_min() {
            Some(event) if event.is_due(now) => self.extract_min(),
            _ => None,
        }
    }

    /// Drops every pending event
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Pending events in heap order, not sorted.
    pub fn iter(&self) -> impl Iterator<Item = &TimedEvent> {
        self.heap[..self.len].iter()
    }

    #[inline]
    fn parent(index: usize) -> usize {
        (index - 1) / 2
    }

    #[inline]
    fn left(index: usize) -> usize {
        2 * index + 1
    }

    #[inline]
    fn right(index: usize) -> usize {
        2 * index + 2
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = Self::parent(index);
            if self.heap[index].fire_time() >= self.heap[parent].fire_time() {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = Self::left(index);
            let right = Self::right(index);
            let mut smallest = index;

            if left < self.len && self.heap[left].fire_time() < self.heap[smallest].fire_time() {
                smallest = left;
            }
            if right < self.len && self.heap[right].fire_time() < self.heap[smallest].fire_time() {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.heap.swap(index, smallest);
            index = smallest;
        }
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.len).all(|i| self.heap[i].fire_time() >= self.heap[Self::parent(i)].fire_time())
    }
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
