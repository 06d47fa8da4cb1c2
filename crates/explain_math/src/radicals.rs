//! Square-root simplification by pairing equal prime factors.
//!
//! `√n = outside · √inside` where every prime that appears in pairs moves
//! outside once per pair and each unpaired prime stays inside.

use crate::primes::prime_factors;

/// One distinct prime that contributed at least one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairExtraction {
    pub prime: u64,
    /// Number of complete pairs of `prime` in the factorization.
    pub pairs: u32,
    /// `prime^pairs`, the factor this prime moves outside the root.
    pub contribution: u64,
}

/// Result of simplifying `√n`.
///
/// Invariant: `outside² × inside == n` and `inside` is square-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqrtSimplification {
    pub radicand: u64,
    pub outside: u64,
    pub inside: u64,
    /// Pair contributions in first-appearance order of the distinct primes.
    pub pair_breakdown: Vec<PairExtraction>,
    /// Prime factorization of the radicand, ascending.
    pub factors: Vec<u64>,
}

impl SqrtSimplification {
    /// True when nothing is left under the root.
    pub fn is_perfect_square(&self) -> bool {
        self.inside == 1
    }

    /// `outside · √inside`, dropping the coefficient when it is 1.
    pub fn simplified_form(&self) -> String {
        if self.outside == 1 {
            format!("√{}", self.inside)
        } else {
            format!("{} · √{}", self.outside, self.inside)
        }
    }
}

/// Group an ascending factor list into `(prime, multiplicity)` runs.
///
/// Keeps first-appearance order explicitly instead of relying on map key
/// iteration.
fn tally(factors: &[u64]) -> Vec<(u64, u32)> {
    let mut counts: Vec<(u64, u32)> = Vec::new();
    for &p in factors {
        match counts.iter_mut().find(|(q, _)| *q == p) {
            Some((_, count)) => *count += 1,
            None => counts.push((p, 1)),
        }
    }
    counts
}

/// Simplify `√n` for `n >= 1`.
pub fn simplify_sqrt(n: u64) -> SqrtSimplification {
    let factors = prime_factors(n);

    let mut outside: u64 = 1;
    let mut inside: u64 = 1;
    let mut pair_breakdown = Vec::new();

    for (prime, multiplicity) in tally(&factors) {
        let pairs = multiplicity / 2;
        if pairs > 0 {
            // prime^pairs divides sqrt(n) <= u64::MAX^(1/2), so this cannot overflow
            let contribution = prime.pow(pairs);
            outside *= contribution;
            pair_breakdown.push(PairExtraction {
                prime,
                pairs,
                contribution,
            });
        }
        if multiplicity % 2 == 1 {
            inside *= prime;
        }
    }

    SqrtSimplification {
        radicand: n,
        outside,
        inside,
        pair_breakdown,
        factors,
    }
}
