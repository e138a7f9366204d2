//! Stochastic content generators for test variations
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("CSSDECL_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }

    /// Geometric distribution: count until rand > alpha
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Poisson-like count (simplified)
    pub fn poisson(&mut self, lambda: f64) -> usize {
        let l = (-lambda).exp();
        let mut k = 0;
        let mut p = 1.0;
        loop {
            k += 1;
            p *= self.rng.gen::<f64>();
            if p <= l {
                break;
            }
        }
        k - 1
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Random property name: a letter, then letters, digits and hyphens
    pub fn property(&mut self) -> String {
        let len = 1 + self.geometric(0.8);
        let mut name = String::with_capacity(len);
        name.push(self.rng.gen_range(b'a'..=b'z') as char);
        let chars = b"abcdefghijklmnopqrstuvwxyz0123456789-";
        for _ in 1..len {
            name.push(chars[self.rng.gen_range(0..chars.len())] as char);
        }
        name
    }

    /// Random bare value with interior spaces but no delimiters
    pub fn value(&mut self) -> String {
        let words = 1 + self.geometric(0.3);
        let chars = b"abcdefghijklmnopqrstuvwxyz0123456789-_.#%,/";
        let mut out = String::new();
        for w in 0..words {
            if w > 0 {
                out.push(' ');
            }
            let len = 1 + self.geometric(0.7);
            for _ in 0..len {
                out.push(chars[self.rng.gen_range(0..chars.len())] as char);
            }
        }
        out
    }

    /// Random run of separator whitespace (possibly empty)
    pub fn whitespace(&mut self) -> String {
        let chars = [' ', ' ', ' ', '\t', '\n', '\r'];
        (0..self.geometric(0.6))
            .map(|_| chars[self.rng.gen_range(0..chars.len())])
            .collect()
    }

    /// Well-formed, `;`-terminated declarations with their expected pairs
    pub fn context(&mut self) -> (String, Vec<(String, String)>) {
        let mut text = String::new();
        let mut pairs = Vec::new();
        for _ in 0..1 + self.geometric(0.5) {
            let property = self.property();
            let value = self.value();
            text.push_str(&self.whitespace());
            text.push_str(&format!("{}:{}{}{};", property, self.whitespace(), value, self.whitespace()));
            pairs.push((property, value));
        }
        text.push('\n');
        (text, pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility() {
        let mut g1 = Gen::new(42);
        let mut g2 = Gen::new(42);

        for _ in 0..10 {
            assert_eq!(g1.property(), g2.property());
            assert_eq!(g1.context(), g2.context());
        }
    }
}
