pub mod expense;
pub mod stats;
pub mod user;
