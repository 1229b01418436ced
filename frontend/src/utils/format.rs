use chrono::{NaiveDate, NaiveDateTime};

pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        cents % 100
    )
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_datetime(value: Option<NaiveDateTime>) -> String {
    value
        .map(|v| v.format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn is_overdue(due: Option<NaiveDate>, today: NaiveDate) -> bool {
    due.map(|d| d < today).unwrap_or(false)
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn money_is_grouped_with_two_decimals() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_money(-45.678), "-$45.68");
    }

    #[wasm_bindgen_test]
    fn dates_fall_back_to_dash() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9);
        assert_eq!(format_date(date), "Jan 9, 2025");
        assert_eq!(format_date(None), "-");
        assert_eq!(or_dash(Some("  ")), "-");
    }

    #[wasm_bindgen_test]
    fn overdue_compares_against_today() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(is_overdue(NaiveDate::from_ymd_opt(2025, 2, 28), today));
        assert!(!is_overdue(Some(today), today));
        assert!(!is_overdue(None, today));
    }
}
