//! Helpers shared by the zone-core test modules.

pub(crate) mod testing;
