mod client;
mod types;

#[cfg(test)]
mod tests;

pub use client::{ApiError, KMeansClient, DEFAULT_ENDPOINT};
pub use types::{InitMethod, KMeansRequest, KMeansResponse};
