//! JWT token issuing service.

mod service;

pub use service::TokenIssuer;

#[cfg(test)]
mod tests;
