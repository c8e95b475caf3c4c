// Stateless helpers shared with the embedding shell

pub mod format;
pub mod password;
pub mod text;

pub use format::{format_currency, format_date};
pub use password::{check_password_strength, PasswordStrength};
