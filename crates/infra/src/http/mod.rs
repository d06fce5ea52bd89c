//! HTTP plumbing shared by outbound clients

mod client;

pub use client::{HttpClient, HttpClientBuilder};
