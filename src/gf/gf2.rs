/// Additive structure of GF(2)^n: addition and subtraction are both XOR.
pub trait Gf2: Sized + Clone + PartialEq + Eq {
    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self {
        self.add(other)
    }
    fn is_zero(&self) -> bool;
}

pub trait Gf2Construct {
    fn zero_with_len(n: usize) -> Self;
}
