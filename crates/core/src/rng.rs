//! RNG module - seeded piece sources
//!
//! The session draws every new piece from a [`PieceSource`]. The default
//! source picks uniformly among the seven kinds with a small LCG, so a seed
//! fully determines the piece sequence. [`PieceSequence`] replays a fixed list
//! for scripted sessions.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Where new pieces come from
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform draw over the seven kinds (with replacement)
#[derive(Debug, Clone)]
pub struct RandomPieces {
    seed: u32,
    rng: SimpleRng,
}

impl RandomPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// The seed this source was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for RandomPieces {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for RandomPieces {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// Cycles through a fixed list of kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSequence {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl PieceSequence {
    /// Returns None for an empty list.
    pub fn new(kinds: &[PieceKind]) -> Option<Self> {
        if kinds.is_empty() {
            return None;
        }
        Some(Self {
            kinds: kinds.to_vec(),
            index: 0,
        })
    }

    /// The same kind forever
    pub fn repeat(kind: PieceKind) -> Self {
        Self {
            kinds: vec![kind],
            index: 0,
        }
    }
}

impl PieceSource for PieceSequence {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_range() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_random_pieces_same_seed_same_sequence() {
        let mut a = RandomPieces::new(42);
        let mut b = RandomPieces::new(42);
        for _ in 0..50 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }

    #[test]
    fn test_random_pieces_cover_every_kind() {
        let mut source = RandomPieces::new(7);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            let kind = source.next_kind();
            let idx = PieceKind::ALL.iter().position(|k| *k == kind).unwrap();
            counts[idx] += 1;
        }
        // Roughly uniform: each kind near 1000 draws.
        for (kind, count) in PieceKind::ALL.iter().zip(counts) {
            assert!((700..1300).contains(&count), "{:?} drawn {} times", kind, count);
        }
    }

    #[test]
    fn test_piece_sequence_cycles() {
        let mut seq = PieceSequence::new(&[PieceKind::I, PieceKind::O]).unwrap();
        assert_eq!(seq.next_kind(), PieceKind::I);
        assert_eq!(seq.next_kind(), PieceKind::O);
        assert_eq!(seq.next_kind(), PieceKind::I);

        assert!(PieceSequence::new(&[]).is_none());
    }
}
