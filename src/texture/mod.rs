pub(crate) mod bitmap;
pub(crate) mod cache;
pub(crate) mod code;
pub(crate) mod descriptor;
mod draw;
pub(crate) mod label;
mod profile;
pub(crate) mod synth;
mod text;
