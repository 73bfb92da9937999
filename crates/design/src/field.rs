//! Finite-field arithmetic over GF(p^m) for small orders.
//!
//! Elements are the integers `0..order`, read as base-`p` digit vectors
//! (digit `i` is the coefficient of `x^i`). For a prime order this is exactly
//! arithmetic modulo `p`, so designs built on a prime order keep their plain
//! modular numbering.

/// Splits `n` into `(p, m)` with `n == p^m` and `p` prime.
pub fn prime_power(n: usize) -> Option<(usize, u32)> {
    if n < 2 {
        return None;
    }
    let prime = (2..)
        .take_while(|d| d * d <= n)
        .find(|d| n % d == 0)
        .unwrap_or(n);
    let mut rest = n;
    let mut degree = 0;
    while rest % prime == 0 {
        rest /= prime;
        degree += 1;
    }
    (rest == 1).then_some((prime, degree))
}

#[derive(Debug, Clone)]
pub struct GaloisField {
    order: usize,
    prime: usize,
    degree: u32,
    /// `exp[i] = g^i` for a generator `g`; only used when `degree > 1`.
    exp: Vec<usize>,
    log: Vec<usize>,
}

impl GaloisField {
    /// Builds the field of the given order.
    ///
    /// Order 1 yields the zero ring, which is all the two-symbol deck needs.
    /// Returns `None` when the order is not a prime power.
    pub fn new(order: usize) -> Option<Self> {
        if order == 1 {
            return Some(Self {
                order,
                prime: 1,
                degree: 1,
                exp: Vec::new(),
                log: Vec::new(),
            });
        }
        let (prime, degree) = prime_power(order)?;
        let mut field = Self {
            order,
            prime,
            degree,
            exp: Vec::new(),
            log: Vec::new(),
        };
        if degree > 1 {
            let modulus = field.find_primitive_polynomial()?;
            field.build_tables(&modulus);
        }
        Some(field)
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn characteristic(&self) -> usize {
        self.prime
    }

    pub fn add(&self, a: usize, b: usize) -> usize {
        if self.degree == 1 {
            return (a + b) % self.prime;
        }
        let summed: Vec<usize> = self
            .digits(a)
            .iter()
            .zip(self.digits(b))
            .map(|(x, y)| (x + y) % self.prime)
            .collect();
        self.from_digits(&summed)
    }

    pub fn mul(&self, a: usize, b: usize) -> usize {
        if self.degree == 1 {
            return (a * b) % self.prime;
        }
        if a == 0 || b == 0 {
            return 0;
        }
        let cycle = self.order - 1;
        self.exp[(self.log[a] + self.log[b]) % cycle]
    }

    fn digits(&self, mut value: usize) -> Vec<usize> {
        (0..self.degree)
            .map(|_| {
                let digit = value % self.prime;
                value /= self.prime;
                digit
            })
            .collect()
    }

    fn from_digits(&self, digits: &[usize]) -> usize {
        digits
            .iter()
            .rev()
            .fold(0, |acc, digit| acc * self.prime + digit)
    }

    /// Multiplies an element by `x`, reducing with the monic modulus
    /// `x^m + c[m-1] x^(m-1) + ... + c[0]`.
    fn times_x(&self, value: usize, modulus: &[usize]) -> usize {
        let digits = self.digits(value);
        let carry = digits[digits.len() - 1];
        let mut shifted = vec![0; digits.len()];
        shifted[1..].copy_from_slice(&digits[..digits.len() - 1]);
        for (digit, coefficient) in shifted.iter_mut().zip(modulus) {
            let reduction = (carry * coefficient) % self.prime;
            *digit = (*digit + self.prime - reduction) % self.prime;
        }
        self.from_digits(&shifted)
    }

    /// Searches for a modulus under which `x` generates every nonzero element.
    /// Such a polynomial is primitive and therefore irreducible.
    fn find_primitive_polynomial(&self) -> Option<Vec<usize>> {
        let cycle = self.order - 1;
        (0..self.order)
            .map(|tail| self.digits(tail))
            .filter(|modulus| modulus[0] != 0)
            .find(|modulus| {
                let mut power = 1;
                for step in 1..=cycle {
                    power = self.times_x(power, modulus);
                    if power == 1 {
                        return step == cycle;
                    }
                }
                false
            })
    }

    fn build_tables(&mut self, modulus: &[usize]) {
        let cycle = self.order - 1;
        let mut exp = Vec::with_capacity(cycle);
        let mut log = vec![0; self.order];
        let mut power = 1;
        for step in 0..cycle {
            exp.push(power);
            log[power] = step;
            power = self.times_x(power, modulus);
        }
        self.exp = exp;
        self.log = log;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_power_detection() {
        assert_eq!(prime_power(2), Some((2, 1)));
        assert_eq!(prime_power(7), Some((7, 1)));
        assert_eq!(prime_power(8), Some((2, 3)));
        assert_eq!(prime_power(9), Some((3, 2)));
        assert_eq!(prime_power(25), Some((5, 2)));
        assert_eq!(prime_power(6), None);
        assert_eq!(prime_power(12), None);
        assert_eq!(prime_power(1), None);
    }

    #[test]
    fn test_prime_field_is_modular_arithmetic() {
        let field = GaloisField::new(5).unwrap();
        for a in 0..5 {
            for b in 0..5 {
                assert_eq!(field.add(a, b), (a + b) % 5);
                assert_eq!(field.mul(a, b), (a * b) % 5);
            }
        }
    }

    #[test]
    fn test_unsupported_orders() {
        assert!(GaloisField::new(6).is_none());
        assert!(GaloisField::new(10).is_none());
        assert!(GaloisField::new(0).is_none());
    }

    fn assert_field_axioms(order: usize) {
        let field = GaloisField::new(order).unwrap();
        assert_eq!(field.order(), order);
        for a in 0..order {
            assert_eq!(field.add(a, 0), a);
            assert_eq!(field.mul(a, 1), a);
            assert_eq!(field.mul(a, 0), 0);
            // every element has exactly one additive inverse
            assert_eq!((0..order).filter(|&b| field.add(a, b) == 0).count(), 1);
            if a != 0 {
                // and every nonzero element one multiplicative inverse
                assert_eq!((0..order).filter(|&b| field.mul(a, b) == 1).count(), 1);
            }
            for b in 0..order {
                assert_eq!(field.add(a, b), field.add(b, a));
                assert_eq!(field.mul(a, b), field.mul(b, a));
                for c in 0..order {
                    assert_eq!(
                        field.mul(a, field.add(b, c)),
                        field.add(field.mul(a, b), field.mul(a, c))
                    );
                }
            }
        }
    }

    #[test]
    fn test_gf4_axioms() {
        assert_field_axioms(4);
    }

    #[test]
    fn test_gf8_axioms() {
        assert_field_axioms(8);
    }

    #[test]
    fn test_gf9_axioms() {
        let field = GaloisField::new(9).unwrap();
        assert_eq!(field.characteristic(), 3);
        assert_field_axioms(9);
    }

    #[test]
    fn test_gf4_has_no_zero_divisors() {
        let field = GaloisField::new(4).unwrap();
        // 2 * 2 == 0 modulo 4, but never in GF(4)
        assert_ne!(field.mul(2, 2), 0);
        assert_eq!(field.add(2, 2), 0);
    }

    #[test]
    fn test_trivial_field() {
        let field = GaloisField::new(1).unwrap();
        assert_eq!(field.add(0, 0), 0);
        assert_eq!(field.mul(0, 0), 0);
    }
}
