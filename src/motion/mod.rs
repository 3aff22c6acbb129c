pub(crate) mod ease;
pub(crate) mod orchestrator;
pub(crate) mod tween;
pub(crate) mod viewport;
