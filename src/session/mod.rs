//! Interactive menu session.
//!
//! Owns the loaded collection for the lifetime of the program and dispatches
//! each menu choice to the ordering engine, re-prompting on invalid input.

mod controller;
mod menu;

pub(crate) use controller::run_session;
