#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use ponto::libs::timesheet::{accumulate_day, aggregate_week, ClockKind, DayRecord};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn moment(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_hms_opt(h, m, 0).unwrap()
    }

    fn day(date: NaiveDate, times: &[&str]) -> DayRecord {
        DayRecord::from_punches(times.iter().map(|t| (date, t.to_string())))
    }

    #[test]
    fn test_punch_tagging_alternates_in_out() {
        let record = day(date(2024, 3, 4), &["09:00", "12:00", "13:00", "18:00"]);
        let kinds: Vec<ClockKind> = record.events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![ClockKind::In, ClockKind::Out, ClockKind::In, ClockKind::Out]);
        assert_eq!(record.date(), Some(date(2024, 3, 4)));
    }

    #[test]
    fn test_paired_day_sums_intervals() {
        let record = day(date(2024, 3, 4), &["09:00", "12:00", "13:00", "18:00"]);
        let result = accumulate_day(&record, moment(date(2024, 3, 8), 19, 0));
        assert!(result.is_valid());
        assert_eq!(result.worked, Some(Duration::hours(8)));
        assert_eq!(result.worked_minutes(), 480);
    }

    #[test]
    fn test_long_single_shift() {
        let record = day(date(2024, 3, 5), &["01:00", "23:00"]);
        let result = accumulate_day(&record, moment(date(2024, 3, 8), 19, 0));
        assert_eq!(result.worked, Some(Duration::hours(22)));
    }

    #[test]
    fn test_negative_sum_wraps_like_wall_clock() {
        // A clock-out "before" the clock-in leaves a negative total; the
        // result is normalized within one day rather than going negative.
        let record = day(date(2024, 3, 5), &["23:00", "01:00"]);
        let result = accumulate_day(&record, moment(date(2024, 3, 8), 19, 0));
        assert_eq!(result.worked, Some(Duration::hours(2)));
    }

    #[test]
    fn test_open_shift_today_accrues_until_now() {
        let today = date(2024, 3, 8);
        let record = day(today, &["09:00"]);
        let result = accumulate_day(&record, moment(today, 14, 0));
        assert!(result.is_valid());
        assert_eq!(result.worked, Some(Duration::hours(5)));
    }

    #[test]
    fn test_open_shift_after_completed_pairs_today() {
        let today = date(2024, 3, 8);
        let record = day(today, &["09:00", "12:00", "13:00"]);
        let result = accumulate_day(&record, moment(today, 19, 0));
        // 3h paired in the morning plus 6h still running.
        assert_eq!(result.worked, Some(Duration::hours(9)));
    }

    #[test]
    fn test_single_clock_in_on_past_day_is_invalid() {
        let record = day(date(2024, 3, 4), &["09:00"]);
        let result = accumulate_day(&record, moment(date(2024, 3, 8), 19, 0));
        assert!(!result.is_valid());
        assert_eq!(result.worked, None);
        assert_eq!(result.worked_minutes(), 0);
    }

    #[test]
    fn test_odd_trailing_clock_in_on_past_day_is_invalid() {
        let record = day(date(2024, 3, 6), &["09:00", "12:00", "13:00"]);
        let result = accumulate_day(&record, moment(date(2024, 3, 8), 19, 0));
        assert!(!result.is_valid());
    }

    #[test]
    fn test_empty_day_is_valid_with_zero_worked() {
        let record = DayRecord::default();
        let result = accumulate_day(&record, moment(date(2024, 3, 8), 19, 0));
        assert!(result.is_valid());
        assert_eq!(result.worked, Some(Duration::zero()));
        assert_eq!(result.date, None);
    }

    #[test]
    fn test_malformed_reading_invalidates_day() {
        // Strict parsing: a bad record fails that day's computation instead
        // of silently counting as midnight.
        let record = day(date(2024, 3, 4), &["09:00", "12h30"]);
        let result = accumulate_day(&record, moment(date(2024, 3, 8), 19, 0));
        assert!(!result.is_valid());
    }

    #[test]
    fn test_week_total_sums_valid_days() {
        let now = moment(date(2024, 3, 8), 19, 0);
        let days = vec![
            day(date(2024, 3, 4), &["09:00", "12:00", "13:00", "18:00"]), // 08:00
            day(date(2024, 3, 5), &["01:00", "23:00"]),                   // 22:00
            day(date(2024, 3, 6), &["09:00", "12:00", "13:00", "19:00"]), // 09:00
        ];
        let report = aggregate_week(&days, now);
        assert_eq!(report.days.len(), 3);
        assert_eq!(report.total, Duration::minutes(39 * 60));
    }

    #[test]
    fn test_invalid_day_contributes_zero_to_week_total() {
        let now = moment(date(2024, 3, 8), 19, 0);
        let days = vec![
            day(date(2024, 3, 4), &["09:00", "12:00", "13:00", "18:00"]), // 08:00
            day(date(2024, 3, 5), &["09:00", "12:00", "13:00"]),          // invalid
        ];
        let report = aggregate_week(&days, now);
        assert!(!report.days[1].is_valid());
        assert_eq!(report.total, Duration::hours(8));
    }

    #[test]
    fn test_week_results_keep_input_order() {
        let now = moment(date(2024, 3, 8), 19, 0);
        let days = vec![
            day(date(2024, 3, 4), &["09:00", "10:00"]),
            day(date(2024, 3, 5), &["09:00", "11:00"]),
            day(date(2024, 3, 6), &["09:00", "12:00"]),
        ];
        let report = aggregate_week(&days, now);
        let dates: Vec<_> = report.days.iter().map(|r| r.date.unwrap()).collect();
        assert_eq!(dates, vec![date(2024, 3, 4), date(2024, 3, 5), date(2024, 3, 6)]);
    }
}
