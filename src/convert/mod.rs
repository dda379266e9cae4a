pub mod base;
pub mod digit;
pub mod parsefmt;
pub mod validate;

// every conversion goes base X -> Value -> base Y
pub type Value = u32;
