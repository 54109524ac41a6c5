pub mod random;
pub mod text;
pub mod token;
pub mod validation;
