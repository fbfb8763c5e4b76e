#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use paydesk::libs::attendance::{DailyAttendance, WorkSession};
    use paydesk::libs::employee::{Employee, Payslip, PayslipStatus, SalaryType, User};
    use paydesk::libs::export::{ExportFormat, Exporter};
    use paydesk::libs::proration::PayFrequency;
    use paydesk::libs::status::AttendanceStatus;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee() -> Employee {
        Employee {
            id: 7,
            user: User {
                id: 70,
                username: "jdc".to_string(),
                first_name: "Juan".to_string(),
                last_name: "Dela Cruz".to_string(),
                email: None,
            },
            salary_type: SalaryType::Monthly,
            base_salary: 22000.0,
            department: None,
            is_active: true,
        }
    }

    fn attendance() -> Vec<DailyAttendance> {
        vec![
            DailyAttendance {
                employee_id: 7,
                employee: Some(employee()),
                date: date(2024, 3, 1),
                sessions: vec![WorkSession {
                    time_in: "2024-03-01T08:00:00".to_string(),
                    time_out: Some("2024-03-01T16:30:00".to_string()),
                    duration_minutes: Some(510),
                }],
                total_hours: 8.5,
                status: AttendanceStatus::Present,
                first_in: Some("2024-03-01T08:00:00".to_string()),
                last_out: Some("2024-03-01T16:30:00".to_string()),
            },
            DailyAttendance::absent(8, date(2024, 3, 1)),
        ]
    }

    fn payslip() -> Payslip {
        Payslip {
            id: 5,
            employee: employee(),
            total_working_days: 21,
            days_worked: 20.5,
            total_hours: 164.0,
            regular_hours: 164.0,
            gross_salary: 21476.19,
            net_salary: 19876.1,
            withholding_tax: 0.0,
            status: PayslipStatus::Approved,
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 31),
            generated_at: "2024-04-01T09:00:00Z".to_string(),
            approved_at: None,
            pay_frequency: Some(PayFrequency::Monthly),
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_attendance_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("attendance.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));

        exporter.export_attendance(&attendance()).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Employee ID,Employee,Date,First In,Last Out,Sessions,Total Hours,Status"
        );
        assert_eq!(lines[1], "7,Juan Dela Cruz,2024-03-01,8:00 AM,4:30 PM,1,8.50,Present");
        assert_eq!(lines[2], "8,#8,2024-03-01,,,0,0.00,Absent");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_attendance_json(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("attendance.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));

        exporter.export_attendance(&attendance()).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(rows.as_array().map(Vec::len), Some(2));
        assert_eq!(rows[0]["employee"], "Juan Dela Cruz");
        assert_eq!(rows[0]["total_hours"], "8.50");
        assert_eq!(rows[1]["status"], "Absent");
        assert_eq!(rows[1]["first_in"], "");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_payslips_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("payslips.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));

        exporter.export_payslips(&[payslip()]).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "ID,Employee,Start,End,Working Days,Days Worked,Gross,Net,Status");
        assert_eq!(lines[1], "5,Juan Dela Cruz,2024-03-01,2024-03-31,21,20.5,21476.19,19876.10,Approved");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_payslips_json(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("payslips.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));

        exporter.export_payslips(&[]).unwrap();

        assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "[]");
    }

    #[test]
    fn test_default_output_path() {
        let exporter = Exporter::new(ExportFormat::Json, None);
        let name = exporter.output_path().to_string_lossy().to_string();

        assert!(name.starts_with("paydesk_export_"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("missing").join("out.csv");

        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path));
        assert!(exporter.export_payslips(&[payslip()]).is_err());
    }
}
