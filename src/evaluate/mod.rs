pub mod formula;
pub mod source;
