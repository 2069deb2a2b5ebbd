//! SendGrid v3 `mail/send` client for hirewatch.

mod api;
mod provider;

pub use provider::SendGridMailer;
