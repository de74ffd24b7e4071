//! Kenyan mobile number validation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Trunk prefix "0" or "+254", then a 1 or 7, then eight more digits.
    static ref KENYAN_MOBILE: Regex = Regex::new(r"^(\+254|0)[17][0-9]{8}$")
        .expect("KENYAN_MOBILE to have been built successfully");
}

/// Remove every whitespace character from an entered number.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whether `phone` is a valid local mobile number once whitespace is removed.
pub fn is_valid_phone(phone: &str) -> bool {
    KENYAN_MOBILE.is_match(&normalize_phone(phone))
}
