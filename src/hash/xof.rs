use super::Domain;
use crate::gf::{Gf2Construct, Gf2Vector};
use sha3::{Shake256, Shake256Reader, digest::{Update, ExtendableOutput, XofReader}};

pub(crate) struct Shake256Xof(Shake256Reader);

impl Shake256Xof {
    /// Stream keyed by `seed` and separated by `domain`.
    pub(crate) fn new(seed: &[u8], domain: Domain) -> Self {
        let mut s = Shake256::default();
        s.update(seed);
        s.update(domain.label());
        Self(s.finalize_xof())
    }

    pub(crate) fn get_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.0.read(&mut out);
        out
    }

    /// Next `n` bits of the stream as a vector.
    pub(crate) fn sample_vect(&mut self, n: usize) -> Gf2Vector {
        if n == 0 {
            return Gf2Vector::zero_with_len(0);
        }
        let bytes = self.get_bytes((n + 7) / 8);
        let mut words = vec![0u64; Gf2Vector::word_len(n)];
        for (wi, chunk) in bytes.chunks(8).enumerate() {
            let mut w = 0u64;
            for (j, &b) in chunk.iter().enumerate() {
                w |= (b as u64) << (8 * j);
            }
            words[wi] = w;
        }
        Gf2Vector::from_words(n, words)
    }
}
