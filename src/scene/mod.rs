pub(crate) mod assembler;
pub(crate) mod catalog;
pub(crate) mod hero;
pub(crate) mod lighting;
