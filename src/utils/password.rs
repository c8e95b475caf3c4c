//! Password strength heuristic
//!
//! Five checks, one point each: length >= 8, a lowercase letter, an
//! uppercase letter, a digit, a special character. Feedback lists the
//! unmet checks in check order so the shell can render suggestions.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static LOWERCASE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("Invalid regex"));
static UPPERCASE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("Invalid regex"));
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("Invalid regex"));
static SPECIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").expect("Invalid regex"));

#[derive(Debug, Clone, Serialize)]
pub struct PasswordStrength {
    /// 0..=5
    pub score: u8,
    /// Unmet checks, in check order
    pub feedback: Vec<&'static str>,
    /// Display label ("Very Weak" .. "Strong")
    pub label: &'static str,
    /// Indicator color class for the shell
    pub color: &'static str,
}

pub fn check_password_strength(password: &str) -> PasswordStrength {
    let mut score = 0u8;
    let mut feedback = Vec::new();

    let checks: [(bool, &'static str); 5] = [
        (password.chars().count() >= 8, "At least 8 characters"),
        (LOWERCASE_RE.is_match(password), "Lowercase letter"),
        (UPPERCASE_RE.is_match(password), "Uppercase letter"),
        (DIGIT_RE.is_match(password), "Number"),
        (SPECIAL_RE.is_match(password), "Special character"),
    ];

    for (passed, suggestion) in checks {
        if passed {
            score += 1;
        } else {
            feedback.push(suggestion);
        }
    }

    PasswordStrength {
        score,
        feedback,
        label: strength_label(score),
        color: strength_color(score),
    }
}

fn strength_label(score: u8) -> &'static str {
    match score {
        0 | 1 => "Very Weak",
        2 => "Weak",
        3 => "Fair",
        4 => "Good",
        _ => "Strong",
    }
}

fn strength_color(score: u8) -> &'static str {
    match score {
        0 | 1 => "danger",
        2 => "warning",
        3 => "info",
        4 => "primary",
        _ => "success",
    }
}
