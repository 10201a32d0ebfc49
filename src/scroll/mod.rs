pub(crate) mod progress;
pub(crate) mod region;
pub(crate) mod signal;
pub(crate) mod visibility;
