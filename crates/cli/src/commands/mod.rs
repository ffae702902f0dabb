pub(crate) mod seed;
pub(crate) mod serve;
pub(crate) mod trips;
