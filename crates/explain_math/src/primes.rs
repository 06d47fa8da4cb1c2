/// Factorize `n` into its prime factors in non-decreasing order.
///
/// Trial division: 2 first, then odd divisors while `d² <= rest`. Whatever is
/// left above 1 after the loop is itself prime and goes last.
///
/// `prime_factors(1)` is empty. Passing 0 is a caller bug: zero has no
/// factorization, and radicands of 0 are handled before reaching here.
pub fn prime_factors(n: u64) -> Vec<u64> {
    assert!(n >= 1, "prime_factors called with {n}; radicand must be >= 1");

    let mut factors = Vec::new();
    let mut rest = n;

    while rest % 2 == 0 {
        factors.push(2);
        rest /= 2;
    }

    let mut d: u64 = 3;
    // d <= rest / d is d * d <= rest without the overflow near u64::MAX
    while d <= rest / d {
        while rest % d == 0 {
            factors.push(d);
            rest /= d;
        }
        d += 2;
    }

    if rest > 1 {
        factors.push(rest);
    }
    factors
}

/// Primality by trial division.
pub fn is_prime(n: u64) -> bool {
    match n {
        0 | 1 => false,
        2 | 3 => true,
        _ if n % 2 == 0 => false,
        _ => {
            let mut d: u64 = 3;
            while d <= n / d {
                if n % d == 0 {
                    return false;
                }
                d += 2;
            }
            true
        }
    }
}

/// Render factors as a product, e.g. `2 × 2 × 3`.
pub fn format_product(factors: &[u64]) -> String {
    factors
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(" × ")
}
