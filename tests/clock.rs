#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use ponto::libs::clock::{parse_clock, ClockError};

    #[test]
    fn test_parse_valid_readings() {
        assert_eq!(parse_clock("09:00"), Ok(NaiveTime::from_hms_opt(9, 0, 0).unwrap()));
        assert_eq!(parse_clock("00:00"), Ok(NaiveTime::from_hms_opt(0, 0, 0).unwrap()));
        assert_eq!(parse_clock("23:59"), Ok(NaiveTime::from_hms_opt(23, 59, 0).unwrap()));
        assert_eq!(parse_clock("12:30"), Ok(NaiveTime::from_hms_opt(12, 30, 0).unwrap()));
    }

    #[test]
    fn test_parse_rejects_unpadded_fields() {
        assert_eq!(parse_clock("9:00"), Err(ClockError::MalformedTime("9:00".to_string())));
        assert_eq!(parse_clock("09:0"), Err(ClockError::MalformedTime("09:0".to_string())));
    }

    #[test]
    fn test_parse_rejects_out_of_range_values() {
        assert!(parse_clock("24:00").is_err());
        assert!(parse_clock("09:60").is_err());
        assert!(parse_clock("99:99").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(parse_clock("").is_err());
        assert!(parse_clock("0900").is_err());
        assert!(parse_clock("09-00").is_err());
        assert!(parse_clock("09:000").is_err());
        assert!(parse_clock("ab:cd").is_err());
        assert!(parse_clock("09 00").is_err());
    }
}
