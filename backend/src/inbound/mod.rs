//! Inbound adapters that translate external requests into domain port calls.
//!
//! Only HTTP is exposed; handlers live under [`http`].

pub mod http;
