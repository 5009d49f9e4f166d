#![forbid(unsafe_code)]

//! Terminal demo of the folio profile card.

pub mod app;
pub mod cli;
pub mod session;
pub mod view;
