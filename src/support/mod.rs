pub mod errors;
pub mod money;
pub mod serializations;
pub mod time;
