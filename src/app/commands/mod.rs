pub mod assemble;
pub mod validate;
