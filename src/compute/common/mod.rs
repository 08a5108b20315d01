//! Helpers shared between the layout algorithm modules (currently just flexbox, but kept
//! separate the way the reference crate separates `compute::common` from `compute::flexbox` so a
//! future second algorithm can reuse this arithmetic).

pub(crate) mod alignment;
pub(crate) mod axis;
