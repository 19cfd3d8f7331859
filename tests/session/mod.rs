//! Explorer session tests

pub mod tests_session;
