pub mod check;
pub mod generate;
pub mod shape;
pub mod validate;
