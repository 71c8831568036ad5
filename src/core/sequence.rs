// src/core/sequence.rs

/// Adapter yielding overlapping (previous, current) pairs.
///
/// ```
/// use eulertools::core::sequence::moving_pairs;
///
/// let pairs: Vec<(i32, i32)> = moving_pairs(vec![1, 2, 3]).collect();
/// assert_eq!(pairs, vec![(1, 2), (2, 3)]);
/// ```
pub fn moving_pairs<I>(iterable: I) -> MovingPairs<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let mut iterator = iterable.into_iter();
    let previous = iterator.next();
    MovingPairs { iterator, previous }
}

pub struct MovingPairs<I: Iterator> {
    iterator: I,
    previous: Option<I::Item>,
}

impl<I> Iterator for MovingPairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let previous = self.previous.take()?;
        let current = self.iterator.next()?;
        self.previous = Some(current.clone());
        Some((previous, current))
    }
}

/// True iff `condition` holds between every element and its successor.
/// Vacuously true for sequences shorter than two elements.
pub fn sequence_condition<I, F>(condition: F, sequence: I) -> bool
where
    I: IntoIterator,
    I::Item: Clone,
    F: Fn(&I::Item, &I::Item) -> bool,
{
    moving_pairs(sequence).all(|(a, b)| condition(&a, &b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_pairs_short_inputs() {
        assert_eq!(moving_pairs(Vec::<i32>::new()).count(), 0);
        assert_eq!(moving_pairs(vec![1]).count(), 0);
    }

    #[test]
    fn test_sequence_condition_non_decreasing() {
        let non_decreasing = |a: &u64, b: &u64| a <= b;
        assert!(sequence_condition(non_decreasing, Vec::new()));
        assert!(sequence_condition(non_decreasing, vec![1]));
        assert!(sequence_condition(non_decreasing, vec![1, 2, 2, 3, 4, 4]));
        assert!(!sequence_condition(non_decreasing, vec![1, 0]));
        assert!(!sequence_condition(non_decreasing, vec![1, 2, 2, 0]));
        assert!(!sequence_condition(non_decreasing, vec![1, 0, 3, 3]));
    }
}
