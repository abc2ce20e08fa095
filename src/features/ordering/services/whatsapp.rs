use crate::shared::validation::NON_DIGIT_REGEX;

const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

/// Keep only the digits of a display phone number
pub fn normalize_phone(phone: &str) -> String {
    NON_DIGIT_REGEX.replace_all(phone, "").into_owned()
}

/// Deep link that opens a WhatsApp chat with `message` prefilled
pub fn build_whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "{}?phone={}&text={}",
        WHATSAPP_SEND_URL,
        normalize_phone(phone),
        urlencoding::encode(message)
    )
}
