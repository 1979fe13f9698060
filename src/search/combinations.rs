//! Lazy k-subset enumeration.
//!
//! Yields index combinations in lexicographic order, the same order as
//! nested loops `i0 < i1 < … < ik-1`. The first index varies slowest, so
//! the sequence is the concatenation of the per-first-index partitions,
//! which is what the parallel search relies on.

/// Iterator over all `k`-element index subsets of `start..end`.
///
/// For `k == 0` a single empty combination is produced; for `k` larger
/// than the range nothing is produced.
#[derive(Debug, Clone)]
pub struct Combinations {
    end: usize,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Combinations {
    /// All `k`-subsets of `0..n`.
    pub fn new(n: usize, k: usize) -> Self {
        Self::over_range(0, n, k)
    }

    /// All `k`-subsets of `start..end`.
    pub fn over_range(start: usize, end: usize, k: usize) -> Self {
        Self {
            end,
            indices: (start..start + k).collect(),
            started: false,
            exhausted: k > end.saturating_sub(start),
        }
    }

    /// Advances `indices` to the next combination in place.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        // Rightmost position that can still be incremented.
        let Some(pos) = (0..k)
            .rev()
            .find(|&i| self.indices[i] < self.end - k + i)
        else {
            return false;
        };

        self.indices[pos] += 1;
        for j in pos + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.exhausted = true;
            return None;
        }
        Some(self.indices.clone())
    }
}

/// Binomial coefficient `C(n, k)`, or `None` on overflow.
pub fn count_combinations(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;
    let mut result: u128 = 1;
    for i in 0..k {
        // Exact at every step: result * (n - i) is divisible by (i + 1).
        result = result.checked_mul(n - i)? / (i + 1);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_order() {
        let combos: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(
            combos,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn test_count_matches_binomial() {
        for n in 0..9 {
            for k in 1..=n {
                let produced = Combinations::new(n, k).count() as u128;
                assert_eq!(Some(produced), count_combinations(n, k), "C({n}, {k})");
            }
        }
    }

    #[test]
    fn test_full_and_oversized() {
        assert_eq!(Combinations::new(3, 3).collect::<Vec<_>>(), vec![vec![0, 1, 2]]);
        assert_eq!(Combinations::new(3, 4).count(), 0);
        assert_eq!(Combinations::new(0, 1).count(), 0);
    }

    #[test]
    fn test_zero_size_yields_single_empty() {
        assert_eq!(Combinations::new(5, 0).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_over_range() {
        let combos: Vec<Vec<usize>> = Combinations::over_range(2, 5, 2).collect();
        assert_eq!(combos, vec![vec![2, 3], vec![2, 4], vec![3, 4]]);
    }

    #[test]
    fn test_partitions_concatenate_to_full_sequence() {
        let (n, k) = (7, 3);
        let full: Vec<Vec<usize>> = Combinations::new(n, k).collect();
        let partitioned: Vec<Vec<usize>> = (0..n)
            .flat_map(|first| {
                Combinations::over_range(first + 1, n, k - 1).map(move |mut rest| {
                    rest.insert(0, first);
                    rest
                })
            })
            .collect();
        assert_eq!(full, partitioned);
    }

    #[test]
    fn test_count_combinations() {
        assert_eq!(count_combinations(19, 6), Some(27_132));
        assert_eq!(count_combinations(5, 0), Some(1));
        assert_eq!(count_combinations(3, 5), Some(0));
        assert!(count_combinations(1000, 500).is_none());
    }
}
