pub(crate) mod counter;
pub(crate) mod ease;
pub(crate) mod spring;
pub(crate) mod state;
pub(crate) mod timeline;
