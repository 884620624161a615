#[derive(Copy, Clone, Debug)]
pub(crate) enum Domain {
    ParityCheck,
    Syndrome,
}
impl Domain {
    #[inline]
    pub(crate) fn label(self) -> &'static [u8] {
        match self {
            Domain::ParityCheck => b"ISD-BIRTHDAY/H",
            Domain::Syndrome => b"ISD-BIRTHDAY/S",
        }
    }
}
