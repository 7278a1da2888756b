/// Utilities for display formatting
///
/// Keeps dates, areas and money consistent across the application.
use chrono::NaiveDate;

/// Format ISO date string to DD/MM/YYYY.
/// Example: "2024-11-05" -> "05/11/2024"
pub fn format_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Surface in hectares with two decimals.
pub fn format_area(area: f64) -> String {
    format!("{:.2} ha", area)
}

/// Money in es-AR style: thousands with '.', decimals with ','.
/// Example: 1234567.5 -> "$ 1.234.567,50"
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}$ {},{:02}", sign, grouped, frac)
}

/// Optional price; "-" when absent.
pub fn format_optional_money(amount: Option<f64>) -> String {
    amount.map(format_money).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-11-05"), "05/11/2024");
        assert_eq!(format_date("2024-01-31"), "31/01/2024");
    }

    #[test]
    fn test_invalid_date_passes_through() {
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(120.5), "120.50 ha");
    }

    #[test]
    fn test_format_money_groups_thousands() {
        assert_eq!(format_money(1234567.5), "$ 1.234.567,50");
        assert_eq!(format_money(950.0), "$ 950,00");
        assert_eq!(format_money(0.0), "$ 0,00");
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(-1500.25), "-$ 1.500,25");
    }

    #[test]
    fn test_optional_money() {
        assert_eq!(format_optional_money(None), "-");
        assert_eq!(format_optional_money(Some(10.0)), "$ 10,00");
    }
}
