pub(crate) mod intro;
pub(crate) mod runtime;
pub(crate) mod section;
pub(crate) mod trace;
