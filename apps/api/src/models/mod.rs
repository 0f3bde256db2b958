pub mod candidate;
pub mod question;
