//! Price formatting for the storefront.

/// Format a number with a thousands separator and the given decimals.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let mut parts = formatted.splitn(2, '.');
    let integer_part = parts.next().unwrap_or("0");
    let decimal_part = parts.next();

    // Insert a separator every 3 digits from the end of the integer part.
    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    let integer_grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", integer_grouped, d),
        None => integer_grouped,
    }
}

/// Price display used across catalog, cart, and order views.
pub fn format_price(value: f64) -> String {
    format!("${}", format_number_with_decimals(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_number_with_decimals(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-1234.5, 2), "-1,234.50");
    }

    #[test]
    fn test_price() {
        assert_eq!(format_price(45.0), "$45.00");
        assert_eq!(format_price(12500.0), "$12,500.00");
    }
}
