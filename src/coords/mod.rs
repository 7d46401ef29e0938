//! Integer hex-grid coordinate systems and the icosahedral projection.

pub(crate) mod face;
pub(crate) mod ijk;
