use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Everything that is not an ASCII digit. Used to reduce a display phone
    /// number ("+90 (541) 635 64 85") to the digits WhatsApp expects.
    pub static ref NON_DIGIT_REGEX: Regex = Regex::new(r"[^0-9]").unwrap();
}
