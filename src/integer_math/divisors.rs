// src/integer_math/divisors.rs
//
// Divisor enumeration by trial division up to sqrt(num).
// Complexity: O(sqrt(num)) candidate checks regardless of divisor count.
// Divisors arrive interleaved: small ones ascending, their cofactors
// descending. Ordered mode restores ascending order while buffering only
// the descending half.

use num::integer::Roots;
use std::cmp::max;

pub struct Divisors;

impl Divisors {
    /// Enumerates divisors of `num`, scanning candidates from `start`.
    ///
    /// `start` bounds the scanned candidates, not the paired cofactors:
    /// every candidate `j` found in `[start, sqrt(num)]` is yielded together
    /// with `num / j`. `start == 1` additionally yields `1` and `num` up
    /// front. The square root of a perfect square is yielded exactly once.
    ///
    /// # Examples
    /// ```
    /// use eulertools::integer_math::divisors::Divisors;
    ///
    /// let d: Vec<u64> = Divisors::of(6, 1).collect();
    /// assert_eq!(d, vec![1, 6, 2, 3]);
    ///
    /// // a prime scanned from 2 has nothing to yield
    /// assert_eq!(Divisors::of(7, 2).count(), 0);
    /// ```
    pub fn of(num: u64, start: u64) -> DivisorIter {
        Self::with_step(num, start, 1)
    }

    /// Same scan with a candidate step of 2, skipping even candidates.
    /// Callers must have extracted the factor 2 already and pass an odd
    /// `start`.
    pub fn with_step(num: u64, start: u64, step: u64) -> DivisorIter {
        assert!(num > 0, "divisors iterator works with num > 0");
        assert!(start > 0, "divisors iterator works with start > 0");

        let sqrt_num = num.sqrt();
        let exact_sqrt = sqrt_num * sqrt_num == num;

        DivisorIter {
            num,
            step,
            candidate: max(2, start),
            // exact square roots are handled separately, after the scan
            scan_end: if exact_sqrt { sqrt_num } else { sqrt_num + 1 },
            pending_cofactor: None,
            emit_one: start == 1,
            emit_num: start == 1 && num > 1,
            emit_sqrt: exact_sqrt && num > 1,
            sqrt_num,
        }
    }

    /// Like [`Divisors::of`], but yields in increasing order.
    ///
    /// ```
    /// use eulertools::integer_math::divisors::Divisors;
    ///
    /// let d: Vec<u64> = Divisors::ordered(12, 1).collect();
    /// assert_eq!(d, vec![1, 2, 3, 4, 6, 12]);
    /// ```
    pub fn ordered(num: u64, start: u64) -> OrderedDivisorIter {
        OrderedDivisorIter {
            inner: Self::of(num, start),
            stack: Vec::new(),
            previous: None,
            primed: false,
        }
    }
}

/// Cursor over the divisors of a fixed number. Construct via [`Divisors`].
pub struct DivisorIter {
    num: u64,
    step: u64,
    candidate: u64,
    scan_end: u64,
    sqrt_num: u64,
    pending_cofactor: Option<u64>,
    emit_one: bool,
    emit_num: bool,
    emit_sqrt: bool,
}

impl Iterator for DivisorIter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.emit_one {
            self.emit_one = false;
            return Some(1);
        }
        if self.emit_num {
            self.emit_num = false;
            return Some(self.num);
        }
        if let Some(cofactor) = self.pending_cofactor.take() {
            return Some(cofactor);
        }
        while self.candidate < self.scan_end {
            let j = self.candidate;
            self.candidate += self.step;
            if self.num % j == 0 {
                self.pending_cofactor = Some(self.num / j);
                return Some(j);
            }
        }
        if self.emit_sqrt {
            self.emit_sqrt = false;
            return Some(self.sqrt_num);
        }
        None
    }
}

/// Sorting wrapper over [`DivisorIter`]. Ascending yields pass straight
/// through; descending cofactors are parked on a stack and drained in
/// reverse once the scan is exhausted.
pub struct OrderedDivisorIter {
    inner: DivisorIter,
    stack: Vec<u64>,
    previous: Option<u64>,
    primed: bool,
}

impl Iterator for OrderedDivisorIter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if !self.primed {
            self.previous = self.inner.next();
            self.primed = true;
        }
        while let Some(prev) = self.previous {
            match self.inner.next() {
                Some(current) => {
                    self.previous = Some(current);
                    if prev > current {
                        // cofactor, larger than everything still to come
                        // from the scan
                        self.stack.push(prev);
                    } else {
                        return Some(prev);
                    }
                }
                None => {
                    self.previous = None;
                    return Some(prev);
                }
            }
        }
        self.stack.pop()
    }
}
