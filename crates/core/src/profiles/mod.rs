//! Profile lifecycle controllers and ports

pub mod create;
pub mod list;
pub mod ports;
pub mod selection;
