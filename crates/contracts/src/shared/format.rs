//! Утилиты форматирования чисел для карточек и ответов ассистента

/// Форматирует число с разделителем тысяч (запятая) и указанным количеством
/// знаков после запятой
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{grouped}.{d}"),
        None => grouped,
    }
}

/// Форматирует целое число с разделителем тысяч
pub fn format_count(value: u64) -> String {
    format_number_with_decimals(value as f64, 0)
}

/// Форматирует денежное значение без копеек, с разделителем тысяч
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(15847), "15,847");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(0), "0");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(234567.0), "234,567");
        assert_eq!(format_money(-1234.0), "-1,234");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(14.82, 2), "14.82");
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
    }
}
