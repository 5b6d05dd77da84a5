//! Route handlers for the MoneyMap API.

pub mod admin;
pub mod auth;
pub mod expenses;
pub mod health;
