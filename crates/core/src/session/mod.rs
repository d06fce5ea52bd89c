//! Session lifecycle: ports and service

pub mod ports;
pub mod service;
