//! Data-access layer over the user-record store.

pub mod expenses;
pub mod registrations;
