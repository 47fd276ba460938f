use chrono::{DateTime, Locale, Utc};

/// "15 mar 2021"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format_localized("%d %b %Y", Locale::pt_BR).to_string()
}

/// "* editado em 25 mar 2021, às 19:25"
pub fn format_edited_at(date: &DateTime<Utc>) -> String {
    format!(
        "* editado em {}, às {}",
        format_date(date),
        date.format("%H:%M")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_with_portuguese_month() {
        let date = Utc.with_ymd_and_hms(2021, 3, 5, 19, 25, 28).unwrap();
        assert_eq!(format_date(&date), "05 mar 2021");
    }

    #[test]
    fn formats_edit_line() {
        let date = Utc.with_ymd_and_hms(2021, 3, 25, 19, 5, 0).unwrap();
        assert_eq!(format_edited_at(&date), "* editado em 25 mar 2021, às 19:05");
    }
}
