//! Sieve of Eratosthenes over a fixed bound.
//!
//! The table is built once for the largest index a render will query and is
//! immutable afterwards, so it can be shared by reference across threads.

/// Primality of every integer in `[0, limit]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeTable {
    marks: Vec<bool>,
}

impl PrimeTable {
    /// Build the table for `[0, limit]`.
    ///
    /// `O(n log log n)` time, one byte per entry.
    pub fn build(limit: u64) -> Self {
        let len = limit as usize + 1;
        let mut marks = vec![true; len];
        marks[0] = false;
        if len > 1 {
            marks[1] = false;
        }

        let mut p = 2usize;
        while p * p <= limit as usize {
            if marks[p] {
                for multiple in (p * p..len).step_by(p) {
                    marks[multiple] = false;
                }
            }
            p += 1;
        }

        tracing::debug!(limit, "prime table built");
        Self { marks }
    }

    /// Largest integer covered by the table.
    pub fn limit(&self) -> u64 {
        (self.marks.len() - 1) as u64
    }

    /// Number of entries (`limit + 1`).
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Always false: the table covers at least 0.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Whether `n` is prime.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`limit`](Self::limit). Callers size the table for
    /// every index they will ask about.
    #[inline]
    pub fn is_prime(&self, n: u64) -> bool {
        match self.get(n) {
            Some(prime) => prime,
            None => panic!(
                "index {} is outside the prime table (limit {})",
                n,
                self.limit()
            ),
        }
    }

    /// Non-panicking lookup.
    #[inline]
    pub fn get(&self, n: u64) -> Option<bool> {
        usize::try_from(n).ok().and_then(|i| self.marks.get(i).copied())
    }

    /// Number of primes in the table.
    pub fn count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }

    /// Iterate over the primes in ascending order.
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m)
            .map(|(i, _)| i as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes_below_100() {
        let table = PrimeTable::build(100);
        let primes: Vec<u64> = table.primes().collect();
        assert_eq!(
            primes,
            vec![
                2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73,
                79, 83, 89, 97
            ]
        );
        assert_eq!(table.count(), 25);
    }

    #[test]
    fn tiny_tables() {
        let zero = PrimeTable::build(0);
        assert_eq!(zero.len(), 1);
        assert!(!zero.is_prime(0));

        let one = PrimeTable::build(1);
        assert_eq!(one.len(), 2);
        assert!(!one.is_prime(1));

        let two = PrimeTable::build(2);
        assert!(two.is_prime(2));
        assert_eq!(two.count(), 1);
    }

    #[test]
    fn perfect_square_limit() {
        // limit = p^2 must still strike p^2 itself
        let table = PrimeTable::build(49);
        assert!(!table.is_prime(49));
        assert!(table.is_prime(47));

        let table = PrimeTable::build(169);
        assert!(!table.is_prime(169));
        assert!(table.is_prime(167));
    }

    #[test]
    fn matches_trial_division() {
        fn is_prime_slow(n: u64) -> bool {
            n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
        }

        let table = PrimeTable::build(5000);
        for n in 0..=5000 {
            assert_eq!(table.is_prime(n), is_prime_slow(n), "n = {}", n);
        }
    }

    #[test]
    fn prime_count_pi_10000() {
        assert_eq!(PrimeTable::build(10_000).count(), 1229);
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let table = PrimeTable::build(10);
        assert_eq!(table.limit(), 10);
        assert_eq!(table.get(11), None);
        assert_eq!(table.get(7), Some(true));
    }

    #[test]
    #[should_panic(expected = "outside the prime table")]
    fn is_prime_out_of_bounds_panics() {
        PrimeTable::build(10).is_prime(11);
    }

    #[test]
    fn shared_across_threads() {
        let table = PrimeTable::build(1000);
        let counts: Vec<usize> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let table = &table;
                    s.spawn(move || (t * 250..(t + 1) * 250).filter(|&n| table.is_prime(n)).count())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(counts.iter().sum::<usize>(), 168);
    }
}
