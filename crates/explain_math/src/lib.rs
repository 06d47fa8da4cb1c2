//! Integer number theory used by the square-root explanations.

pub mod primes;
pub mod radicals;

pub use primes::{format_product, is_prime, prime_factors};
pub use radicals::{simplify_sqrt, PairExtraction, SqrtSimplification};
