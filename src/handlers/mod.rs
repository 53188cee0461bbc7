pub mod availability;
pub mod submit;
