//! Spelling work queue with front re-injection.
//!
//! The queue is drained front to back. Attempts come from two places:
//! - a deque of re-injected attempts (padded variants of odd candidates),
//!   always served first;
//! - the lazy Cartesian product, pulled only when the deque is empty.
//!
//! Re-injected pairs are therefore processed before any combination that
//! has not been generated yet, and memory stays proportional to the label
//! length plus the (bounded) number of pending padded attempts.

use std::collections::VecDeque;

use lospell_kernel::spelling::product::CartesianProduct;

use crate::attempt::SpellingAttemptV1;

/// Worklist over spelling attempts.
pub struct WorkQueue<'a> {
    pending: VecDeque<SpellingAttemptV1>,
    product: CartesianProduct<'a>,
    drawn: u64,
    reinjected: u64,
    high_water: usize,
}

impl<'a> WorkQueue<'a> {
    /// Create a queue that draws from `product`.
    #[must_use]
    pub fn new(product: CartesianProduct<'a>) -> Self {
        Self {
            pending: VecDeque::new(),
            product,
            drawn: 0,
            reinjected: 0,
            high_water: 0,
        }
    }

    /// Pop the next attempt: re-injected attempts first, then the product.
    pub fn pop(&mut self) -> Option<SpellingAttemptV1> {
        if let Some(attempt) = self.pending.pop_front() {
            return Some(attempt);
        }
        let parts = self.product.next()?;
        let attempt = SpellingAttemptV1::from_parts(&parts, self.drawn);
        self.drawn += 1;
        Some(attempt)
    }

    /// Insert `first` then `second` at the front, ahead of everything else.
    pub fn push_front_pair(&mut self, first: SpellingAttemptV1, second: SpellingAttemptV1) {
        self.pending.push_front(second);
        self.pending.push_front(first);
        self.reinjected += 2;
        if self.pending.len() > self.high_water {
            self.high_water = self.pending.len();
        }
    }

    /// Number of combinations drawn from the product so far.
    #[must_use]
    pub fn drawn(&self) -> u64 {
        self.drawn
    }

    /// Number of attempts re-injected so far.
    #[must_use]
    pub fn reinjected(&self) -> u64 {
        self.reinjected
    }

    /// High-water mark of pending re-injected attempts.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Number of re-injected attempts not yet popped.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
