//! Birthday (meet-in-the-middle) information-set decoding for the binary
//! syndrome decoding problem: given H, s and w, find e with |e| = w and H·e = s.

pub mod dataset;
pub mod gf;
pub(crate) mod hash;
pub mod isd;

pub use gf::*;
pub use isd::*;
