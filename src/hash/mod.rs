mod domain;
pub mod xof;

pub(crate) use domain::Domain;
