//! SmallXXHash: a cut-down xxHash32 used to turn grid coordinates into
//! per-cell pseudo-random values.

pub const PRIME_A: u32 = 0b1001_1110_0011_0111_0111_1001_1011_0001; // 0x9E3779B1
pub const PRIME_B: u32 = 0b1000_0101_1110_1011_1100_1010_0111_0111; // 0x85EBCA77
pub const PRIME_C: u32 = 0b1100_0010_1011_0010_1010_1110_0011_1101; // 0xC2B2AE3D
pub const PRIME_D: u32 = 0b0010_0111_1101_0100_1110_1011_0010_1111; // 0x27D4EB2F
pub const PRIME_E: u32 = 0b0001_0110_0101_0110_0110_0111_1011_0001; // 0x165667B1

/// Streaming accumulator. Every `eat` returns a new value; nothing is
/// mutated in place, so a seeded hash can be shared freely across workers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct SmallXxHash { accumulator: u32 }

impl SmallXxHash {
    #[inline] pub const fn new(accumulator: u32) -> Self { Self { accumulator } }

    #[inline]
    pub const fn seed(seed: i32) -> Self {
        Self::new((seed as u32).wrapping_add(PRIME_E))
    }

    /// Folds one 32-bit integer into the accumulator.
    #[inline]
    pub const fn eat(self, data: i32) -> Self {
        Self::new(
            self.accumulator
                .wrapping_add((data as u32).wrapping_mul(PRIME_C))
                .rotate_left(17)
                .wrapping_mul(PRIME_D),
        )
    }

    /// Folds one byte. Uses its own prime pair and rotation, not the `eat` ones.
    #[inline]
    pub const fn eat_byte(self, data: u8) -> Self {
        Self::new(
            self.accumulator
                .wrapping_add((data as u32).wrapping_mul(PRIME_E))
                .rotate_left(11)
                .wrapping_mul(PRIME_A),
        )
    }

    #[inline]
    pub const fn finalize(self) -> u32 {
        let mut avalanche = self.accumulator;
        avalanche ^= avalanche >> 15;
        avalanche = avalanche.wrapping_mul(PRIME_B);
        avalanche ^= avalanche >> 13;
        avalanche = avalanche.wrapping_mul(PRIME_C);
        avalanche ^= avalanche >> 16;
        avalanche
    }

    #[inline] pub const fn accumulator(self) -> u32 { self.accumulator }
}

impl From<u32> for SmallXxHash {
    #[inline] fn from(accumulator: u32) -> Self { Self::new(accumulator) }
}

impl From<SmallXxHash> for u32 {
    #[inline] fn from(h: SmallXxHash) -> u32 { h.finalize() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn primes_are_xxhash32() {
        assert_eq!(PRIME_A, 0x9E37_79B1);
        assert_eq!(PRIME_B, 0x85EB_CA77);
        assert_eq!(PRIME_C, 0xC2B2_AE3D);
        assert_eq!(PRIME_D, 0x27D4_EB2F);
        assert_eq!(PRIME_E, 0x1656_67B1);
    }

    #[test] fn seed_adds_prime_e() {
        assert_eq!(SmallXxHash::seed(0).accumulator(), PRIME_E);
        // -1 wraps to u32::MAX, so the sum wraps too
        assert_eq!(SmallXxHash::seed(-1).accumulator(), PRIME_E.wrapping_sub(1));
    }

    #[test] fn known_vectors() {
        assert_eq!(SmallXxHash::seed(0).eat(0).eat(0).finalize(), 0xA5E2_B579);
        assert_eq!(SmallXxHash::seed(0).eat(1).eat(2).finalize(), 0xE355_C8CD);
        assert_eq!(SmallXxHash::seed(0).eat(2).eat(1).finalize(), 0xE54D_334F);
        assert_eq!(SmallXxHash::seed(-1).eat(3).eat(5).finalize(), 0x6752_E148);
        assert_eq!(SmallXxHash::seed(0).finalize(), 0x02CC_5D05);
    }

    #[test] fn byte_eat_known_vectors() {
        assert_eq!(SmallXxHash::seed(0).eat_byte(0).finalize(), 0x3670_5D21);
        assert_eq!(SmallXxHash::seed(7).eat_byte(0xAB).eat_byte(0x01).finalize(), 0x1F61_3CCA);
    }

    #[test] fn byte_and_int_eat_differ() {
        let h = SmallXxHash::seed(3);
        for d in 1u8..=255 {
            assert_ne!(h.eat(d as i32).accumulator(), h.eat_byte(d).accumulator());
        }
    }

    #[test] fn eat_order_matters() {
        let h = SmallXxHash::seed(0);
        for u in 0..16 {
            for v in 0..16 {
                if u == v { continue; }
                assert_ne!(h.eat(u).eat(v).finalize(), h.eat(v).eat(u).finalize(), "u={u} v={v}");
            }
        }
    }

    #[test] fn conversions_match_methods() {
        let h = SmallXxHash::from(0xDEAD_BEEF).eat(42);
        let x: u32 = h.into();
        assert_eq!(x, h.finalize());
        assert_eq!(SmallXxHash::from(PRIME_E), SmallXxHash::seed(0));
    }

    #[test] fn wraparound_is_not_an_error() {
        let h = SmallXxHash::new(u32::MAX).eat(i32::MIN).eat(i32::MAX).eat_byte(u8::MAX);
        let _ = h.finalize();
    }

    #[test] fn seed_avalanche() {
        // adjacent seeds should flip about half of the 32 output bits
        let mut flipped = 0u64;
        let n = 4096;
        for s in 0..n {
            let a = SmallXxHash::seed(s).eat(5).eat(9).finalize();
            let b = SmallXxHash::seed(s + 1).eat(5).eat(9).finalize();
            flipped += (a ^ b).count_ones() as u64;
        }
        let mean = flipped as f64 / n as f64;
        assert!((14.0..=18.0).contains(&mean), "mean flipped bits {mean}");
    }
}
