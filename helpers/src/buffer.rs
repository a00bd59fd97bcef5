/// RingBuffer provides a buffer with a user-defined capacity. As soon as the capacity is reached,
/// the buffer overwrites old values when new values are pushed to it.
#[derive(Debug)]
pub struct RingBuffer<T> {
    vals: Vec<T>,
    idx: usize,
}

impl<T: Into<f64> + std::marker::Copy> RingBuffer<T> {
    pub fn new(capacity: usize) -> RingBuffer<T> {
        RingBuffer {
            vals: Vec::with_capacity(capacity),
            idx: 0,
        }
    }
    pub fn push(&mut self, val: T) {
        if self.vals.len() < self.vals.capacity() {
            self.vals.push(val);
        } else {
            self.vals[self.idx] = val;
            self.idx = (self.idx + 1) % self.vals.capacity();
        }
    }
    pub fn get_avg(&self) -> Option<f64> {
        if self.vals.is_empty() {
            return None;
        }
        Some(self.get_sum() / self.vals.len() as f64)
    }
    fn get_sum(&self) -> f64 {
        let mut sum = 0.0;
        for val in self.vals.iter() {
            sum += (*val).into()
        }
        sum
    }
}

/// HistoryBuffer keeps the most recent capacity elements of an append-only stream. In contrast to
/// RingBuffer it is generic over arbitrary element types and returns its content in insertion
/// order (oldest element first).
#[derive(Debug)]
pub struct HistoryBuffer<T> {
    vals: Vec<T>,
    idx: usize,
    capacity: usize,
}

impl<T: Clone> HistoryBuffer<T> {
    pub fn new(capacity: usize) -> HistoryBuffer<T> {
        if capacity == 0 {
            panic!("HistoryBuffer capacity must be at least one!")
        }

        HistoryBuffer {
            vals: Vec::with_capacity(capacity),
            idx: 0,
            capacity,
        }
    }
    pub fn push(&mut self, val: T) {
        if self.vals.len() < self.capacity {
            self.vals.push(val);
        } else {
            self.vals[self.idx] = val;
            self.idx = (self.idx + 1) % self.capacity;
        }
    }
    pub fn len(&self) -> usize {
        self.vals.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }
    pub fn clear(&mut self) {
        self.vals.clear();
        self.idx = 0;
    }
    /// as_ordered_vec returns the buffer content in insertion order (once the buffer wrapped
    /// around, idx points at the oldest element).
    pub fn as_ordered_vec(&self) -> Vec<T> {
        let mut ordered = Vec::with_capacity(self.vals.len());
        ordered.extend_from_slice(&self.vals[self.idx..]);
        ordered.extend_from_slice(&self.vals[..self.idx]);
        ordered
    }
}
