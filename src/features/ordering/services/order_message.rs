use rust_decimal::Decimal;

use crate::features::ordering::models::CartSummary;
use crate::shared::i18n::Dictionary;

/// Turkish price formatting: `.` between thousands, `,` before the decimals,
/// at most three fraction digits, then the currency.
///
/// `1234.5` becomes `1.234,5 TL`.
pub fn format_price(value: Decimal) -> String {
    let rounded = value.round_dp(3).normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(frac) => format!("{}{},{} TL", sign, grouped, frac),
        None => format!("{}{} TL", sign, grouped),
    }
}

/// Text prefilled into the WhatsApp chat.
///
/// An empty cart produces only the greeting.
pub fn build_order_message(dictionary: &Dictionary, summary: &CartSummary) -> String {
    let strings = &dictionary.order;
    if summary.is_empty() {
        return strings.greeting.clone();
    }

    let lines = summary
        .lines
        .iter()
        .map(|line| {
            format!(
                "- {} x{} ~ {}",
                line.name,
                line.quantity,
                format_price(line.line_total)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n{}\n{}\n{}: {}",
        strings.greeting,
        strings.items_header,
        lines,
        strings.approx_total,
        format_price(summary.total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ordering::models::CartLine;
    use crate::shared::i18n::{dictionary, Locale};
    use uuid::Uuid;

    fn line(name: &str, quantity: u32, total: i64) -> CartLine {
        CartLine {
            product_id: Uuid::new_v4(),
            name: name.to_string(),
            quantity,
            line_total: Decimal::new(total, 0),
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(250, 0)), "250 TL");
        assert_eq!(format_price(Decimal::new(12345, 1)), "1.234,5 TL");
        assert_eq!(format_price(Decimal::new(1234567, 0)), "1.234.567 TL");
        assert_eq!(format_price(Decimal::new(10000, 2)), "100 TL");
        assert_eq!(format_price(Decimal::new(123456, 5)), "1,235 TL");
        assert_eq!(format_price(Decimal::ZERO), "0 TL");
    }

    #[test]
    fn test_empty_cart_message_is_greeting() {
        let message = build_order_message(dictionary(Locale::En), &CartSummary::default());
        assert_eq!(message, "Hello, I would like to order from Tatlı Bahçe.");
    }

    #[test]
    fn test_message_lists_lines_and_total() {
        let summary = CartSummary {
            lines: vec![line("Köfte", 2, 200), line("Ayran", 1, 50)],
            total: Decimal::new(250, 0),
            item_count: 3,
        };

        let message = build_order_message(dictionary(Locale::Tr), &summary);

        assert_eq!(
            message,
            "Merhaba, Tatlı Bahçe'den sipariş vermek istiyorum.\n\n\
             Ürünler:\n\
             - Köfte x2 ~ 200 TL\n\
             - Ayran x1 ~ 50 TL\n\
             Toplam yaklaşık: 250 TL"
        );
    }

    #[test]
    fn test_english_labels() {
        let summary = CartSummary {
            lines: vec![line("Tea", 4, 1200)],
            total: Decimal::new(1200, 0),
            item_count: 4,
        };

        let message = build_order_message(dictionary(Locale::En), &summary);

        assert!(message.contains("Items:\n- Tea x4 ~ 1.200 TL"));
        assert!(message.ends_with("Approx. total: 1.200 TL"));
    }
}
