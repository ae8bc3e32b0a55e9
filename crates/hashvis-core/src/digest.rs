use blake3::Hasher;
use crate::HashGrid;

const DOMAIN: &[u8] = b"HASHGRIDv1\0";

/// Stable fingerprint: domain tag, resolution, seed, then every hash (LE) in
/// index order.
pub fn grid_digest(g: &HashGrid) -> [u8; 32] {
    let mut h = Hasher::new();
    h.update(DOMAIN);
    h.update(&g.resolution().to_le_bytes());
    h.update(&g.seed().to_le_bytes());
    for x in g.hashes() { h.update(&x.to_le_bytes()); }
    *h.finalize().as_bytes()
}

/// Lowercase hex of a 32-byte digest.
pub fn hex32(x: [u8; 32]) -> String {
    let mut s = String::with_capacity(64);
    for b in &x {
        use std::fmt::Write;
        let _ = write!(s, "{:02x}", b);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate;

    #[test] fn digest_tracks_config() {
        let a = grid_digest(&evaluate(16, 0).unwrap());
        assert_eq!(a, grid_digest(&evaluate(16, 0).unwrap()));
        assert_ne!(a, grid_digest(&evaluate(16, 1).unwrap()));
        assert_ne!(a, grid_digest(&evaluate(15, 0).unwrap()));
    }

    #[test] fn empty_grids_differ_by_seed() {
        assert_ne!(grid_digest(&evaluate(0, 0).unwrap()), grid_digest(&evaluate(0, 1).unwrap()));
    }

    #[test] fn hex_is_lowercase_64() {
        let mut d = [0u8; 32];
        d[0] = 0xAB; d[31] = 0x01;
        let s = hex32(d);
        assert_eq!(s.len(), 64);
        assert!(s.starts_with("ab00"));
        assert!(s.ends_with("01"));
    }
}
