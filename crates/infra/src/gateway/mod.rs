//! Remote profile service gateway

mod client;

pub use client::ApiGateway;
