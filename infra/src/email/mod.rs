//! Verification e-mail delivery.

pub mod http_email;
pub mod mock_email;

pub use http_email::HttpEmailSender;
pub use mock_email::MockEmailSender;
