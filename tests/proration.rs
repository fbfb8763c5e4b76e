#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use paydesk::libs::employee::{Employee, Leave, LeaveType, SalaryType, User};
    use paydesk::libs::error::PayrollError;
    use paydesk::libs::formatter::format_currency;
    use paydesk::libs::proration::{
        base_pay, daily_rate, leave_compensation, leave_days_in_period, prorate, PayFrequency,
    };

    const EPSILON: f64 = 1e-9;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee(salary_type: SalaryType, base_salary: f64) -> Employee {
        Employee {
            id: 1,
            user: User {
                id: 10,
                username: "jdoe".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: None,
            },
            salary_type,
            base_salary,
            department: None,
            is_active: true,
        }
    }

    fn leave(leave_type: LeaveType, start: NaiveDate, end: NaiveDate, is_approved: bool) -> Leave {
        Leave {
            id: 1,
            employee: 1,
            leave_type,
            details: String::new(),
            start_date: start,
            end_date: end,
            is_approved,
        }
    }

    #[test]
    fn test_prorate_uses_fixed_divisors() {
        assert!((prorate(4330.0, PayFrequency::Weekly) - 1000.0).abs() < EPSILON);
        assert!((prorate(2170.0, PayFrequency::Biweekly) - 1000.0).abs() < EPSILON);
        assert!((prorate(2000.0, PayFrequency::SemiMonthly) - 1000.0).abs() < EPSILON);
        assert_eq!(prorate(1234.5, PayFrequency::Monthly), 1234.5);
    }

    #[test]
    fn test_prorate_multiplies_back_to_monthly() {
        for monthly in [0.0, 1.0, 1500.0, 22000.0, 123456.78] {
            for frequency in [
                PayFrequency::Weekly,
                PayFrequency::Biweekly,
                PayFrequency::SemiMonthly,
                PayFrequency::Monthly,
            ] {
                let back = prorate(monthly, frequency) * frequency.divisor();
                assert!((back - monthly).abs() < 1e-6, "{} {}", monthly, frequency);
            }
        }
    }

    #[test]
    fn test_biweekly_salary_formats_to_cents() {
        let amount = prorate(22000.0, PayFrequency::Biweekly);
        assert_eq!(format!("{:.2}", amount), "10138.25");
        assert_eq!(format_currency(amount, "PHP"), "PHP 10,138.25");
    }

    #[test]
    fn test_hourly_base_pay_ignores_frequency() {
        let worker = employee(SalaryType::Hourly, 150.0);

        for frequency in [PayFrequency::Weekly, PayFrequency::Monthly] {
            let pay = base_pay(&worker, frequency, 40.0, 5.0, 5).unwrap();
            assert_eq!(pay, 6000.0);
        }
        // Working days are irrelevant for hourly pay.
        assert_eq!(base_pay(&worker, PayFrequency::Weekly, 8.0, 1.0, 0).unwrap(), 1200.0);
    }

    #[test]
    fn test_monthly_base_pay_is_scaled_by_days_worked() {
        let worker = employee(SalaryType::Monthly, 22000.0);

        let full = base_pay(&worker, PayFrequency::Monthly, 0.0, 22.0, 22).unwrap();
        assert!((full - 22000.0).abs() < EPSILON);

        let half = base_pay(&worker, PayFrequency::Monthly, 0.0, 11.0, 22).unwrap();
        assert!((half - 11000.0).abs() < EPSILON);

        let biweekly = base_pay(&worker, PayFrequency::Biweekly, 0.0, 10.0, 10).unwrap();
        assert!((biweekly - 22000.0 / 2.17).abs() < EPSILON);
    }

    #[test]
    fn test_semi_monthly_base_pay_uses_weekly_divisor() {
        let worker = employee(SalaryType::Monthly, 4330.0);

        let pay = base_pay(&worker, PayFrequency::SemiMonthly, 0.0, 10.0, 10).unwrap();
        assert!((pay - 1000.0).abs() < EPSILON);
        assert_eq!(PayFrequency::SemiMonthly.divisor(), 2.0);
        assert_eq!(PayFrequency::SemiMonthly.base_pay_divisor(), 4.33);
    }

    #[test]
    fn test_monthly_base_pay_requires_working_days() {
        let worker = employee(SalaryType::Monthly, 22000.0);

        assert_eq!(
            base_pay(&worker, PayFrequency::Monthly, 0.0, 10.0, 0),
            Err(PayrollError::InvalidWorkingDays(0))
        );
        assert_eq!(daily_rate(&worker, -3), Err(PayrollError::InvalidWorkingDays(-3)));
    }

    #[test]
    fn test_daily_rate() {
        assert_eq!(daily_rate(&employee(SalaryType::Hourly, 100.0), 22).unwrap(), 800.0);
        assert_eq!(daily_rate(&employee(SalaryType::Monthly, 22000.0), 22).unwrap(), 1000.0);
    }

    #[test]
    fn test_leave_days_counts_overlap_inclusively() {
        let start = date(2024, 3, 1);
        let end = date(2024, 3, 15);

        let inside = leave(LeaveType::PaidLeave, date(2024, 3, 4), date(2024, 3, 6), true);
        assert_eq!(leave_days_in_period(&inside, start, end), Some(3));

        let straddling = leave(LeaveType::PaidLeave, date(2024, 2, 27), date(2024, 3, 2), true);
        assert_eq!(leave_days_in_period(&straddling, start, end), Some(2));

        let single = leave(LeaveType::PaidLeave, date(2024, 3, 15), date(2024, 3, 15), true);
        assert_eq!(leave_days_in_period(&single, start, end), Some(1));

        let outside = leave(LeaveType::PaidLeave, date(2024, 3, 16), date(2024, 3, 20), true);
        assert_eq!(leave_days_in_period(&outside, start, end), None);
    }

    #[test]
    fn test_leave_compensation_rates() {
        let worker = employee(SalaryType::Monthly, 22000.0);
        let start = date(2024, 3, 1);
        let end = date(2024, 3, 31);

        let leaves = vec![
            // 2 days at 100%
            leave(LeaveType::PaidLeave, date(2024, 3, 4), date(2024, 3, 5), true),
            // 2 days at 50%
            leave(LeaveType::Sick, date(2024, 3, 11), date(2024, 3, 12), true),
            leave(LeaveType::Maternity, date(2024, 3, 13), date(2024, 3, 20), true),
            leave(LeaveType::WithoutPay, date(2024, 3, 21), date(2024, 3, 21), true),
            leave(LeaveType::PaidLeave, date(2024, 3, 25), date(2024, 3, 29), false),
        ];

        let compensation = leave_compensation(&worker, &leaves, start, end, 22).unwrap();
        assert!((compensation - 3000.0).abs() < EPSILON);
    }

    #[test]
    fn test_leave_compensation_for_hourly_employee() {
        let worker = employee(SalaryType::Hourly, 100.0);
        let leaves = vec![leave(LeaveType::Sick, date(2024, 3, 4), date(2024, 3, 4), true)];

        let compensation = leave_compensation(&worker, &leaves, date(2024, 3, 1), date(2024, 3, 15), 0).unwrap();
        assert_eq!(compensation, 400.0);
    }

    #[test]
    fn test_leave_compensation_without_leave_skips_working_days_check() {
        let worker = employee(SalaryType::Monthly, 22000.0);
        let unpaid = vec![leave(LeaveType::WithoutPay, date(2024, 3, 4), date(2024, 3, 4), true)];

        assert_eq!(leave_compensation(&worker, &[], date(2024, 3, 1), date(2024, 3, 15), 0), Ok(0.0));
        assert_eq!(leave_compensation(&worker, &unpaid, date(2024, 3, 1), date(2024, 3, 15), 0), Ok(0.0));
    }

    #[test]
    fn test_leave_compensation_with_zero_working_days_fails() {
        let worker = employee(SalaryType::Monthly, 22000.0);
        let leaves = vec![leave(LeaveType::PaidLeave, date(2024, 3, 4), date(2024, 3, 4), true)];

        assert_eq!(
            leave_compensation(&worker, &leaves, date(2024, 3, 1), date(2024, 3, 15), 0),
            Err(PayrollError::InvalidWorkingDays(0))
        );
    }

    #[test]
    fn test_frequency_parsing_and_labels() {
        assert_eq!("semi_monthly".parse::<PayFrequency>(), Ok(PayFrequency::SemiMonthly));
        assert_eq!("BIWEEKLY".parse::<PayFrequency>(), Ok(PayFrequency::Biweekly));
        assert_eq!(
            "daily".parse::<PayFrequency>(),
            Err(PayrollError::UnknownPayFrequency("daily".to_string()))
        );

        assert_eq!(PayFrequency::Biweekly.label(), "Bi-weekly");
        assert_eq!(PayFrequency::SemiMonthly.to_string(), "semi_monthly");
        assert_eq!(PayFrequency::default(), PayFrequency::Monthly);
    }

    #[test]
    fn test_frequency_wire_names() {
        let json = serde_json::to_string(&PayFrequency::SemiMonthly).unwrap();
        assert_eq!(json, "\"semi_monthly\"");

        let parsed: PayFrequency = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(parsed, PayFrequency::Weekly);
    }
}
