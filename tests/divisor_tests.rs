// tests/divisor_tests.rs

use eulertools::core::sequence::sequence_condition;
use eulertools::integer_math::divisors::Divisors;

#[cfg(test)]
mod divisor_tests {
    use super::*;

    #[test]
    fn test_small_numbers_against_fixtures() {
        // (num, start, expected yields in scan order)
        let table: [(u64, u64, &[u64]); 20] = [
            (1, 1, &[1]),
            (1, 2, &[]),
            (2, 1, &[1, 2]),
            (2, 2, &[]),
            (3, 1, &[1, 3]),
            (3, 2, &[]),
            (4, 1, &[1, 4, 2]),
            (4, 2, &[2]),
            (5, 1, &[1, 5]),
            (5, 2, &[]),
            (6, 1, &[1, 6, 2, 3]),
            (6, 2, &[2, 3]),
            (7, 1, &[1, 7]),
            (7, 2, &[]),
            (8, 1, &[1, 8, 2, 4]),
            (8, 2, &[2, 4]),
            (8, 3, &[]),
            (9, 1, &[1, 9, 3]),
            (9, 2, &[3]),
            (9, 3, &[3]),
        ];
        for (num, start, expected) in table {
            let result: Vec<u64> = Divisors::of(num, start).collect();
            assert_eq!(result, expected, "divisors of {} from {}", num, start);

            let mut sorted = expected.to_vec();
            sorted.sort_unstable();
            let ordered: Vec<u64> = Divisors::ordered(num, start).collect();
            assert_eq!(ordered, sorted, "ordered divisors of {} from {}", num, start);
        }
    }

    #[test]
    fn test_every_yield_divides() {
        for num in 1..=500u64 {
            for divisor in Divisors::of(num, 1) {
                assert_eq!(num % divisor, 0, "{} yielded for {}", divisor, num);
            }
        }
    }

    #[test]
    fn test_matches_exhaustive_scan() {
        // The sqrt-bounded scan must find exactly the divisors a full
        // O(n) scan finds
        for num in 1..=500u64 {
            let mut expected: Vec<u64> = (1..=num).filter(|d| num % d == 0).collect();
            expected.sort_unstable();

            let mut yielded: Vec<u64> = Divisors::of(num, 1).collect();
            yielded.sort_unstable();
            assert_eq!(yielded, expected, "divisor set of {}", num);

            let ordered: Vec<u64> = Divisors::ordered(num, 1).collect();
            assert_eq!(ordered, expected, "ordered divisor set of {}", num);
        }
    }

    #[test]
    fn test_ordered_is_strictly_ascending() {
        for num in 1..=500u64 {
            let ordered: Vec<u64> = Divisors::ordered(num, 1).collect();
            assert!(
                sequence_condition(|a, b| a < b, ordered.clone()),
                "ordered divisors of {} not strictly ascending: {:?}",
                num,
                ordered
            );
        }
    }

    #[test]
    fn test_square_root_never_duplicated() {
        for root in 2..=40u64 {
            let square = root * root;
            let count = Divisors::of(square, 1)
                .filter(|&d| d == root)
                .count();
            assert_eq!(count, 1, "sqrt {} of {} must appear exactly once", root, square);
        }
    }

    #[test]
    fn test_odd_step_finds_odd_factors_only() {
        // 105 = 3 * 5 * 7
        let result: Vec<u64> = Divisors::with_step(105, 3, 2).collect();
        assert_eq!(result, vec![3, 35, 5, 21, 7, 15]);
    }

    #[test]
    fn test_scan_start_resumes_factor_search() {
        // stepping a factorization: the first yield from `start` is the
        // smallest scanned divisor >= start
        assert_eq!(Divisors::of(60, 2).next(), Some(2));
        assert_eq!(Divisors::of(15, 3).next(), Some(3));
        assert_eq!(Divisors::with_step(35, 3, 2).next(), Some(5));
    }
}
