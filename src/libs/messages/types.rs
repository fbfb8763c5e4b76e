/// Every user-facing text the command-line client prints.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIG ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleServer,
    ConfigModulePayroll,
    PromptSelectModules,
    PromptApiUrl,
    PromptDefaultPeriod,
    PromptDefaultFrequency,
    PromptCurrency,

    // === AUTH ===
    PromptUsername,
    PromptPassword,
    LoginSuccess(String),
    LoginFailed(String),
    LoggedOut,
    LogoutRequestFailed(String),
    SessionExpired,
    NotLoggedIn,
    SignedInAs {
        username: String,
        name: String,
        role: String,
    },

    // === ATTENDANCE ===
    AttendanceHeader(String),
    AttendanceSummary {
        total: usize,
        present: usize,
        checked_in: usize,
        on_break: usize,
        absent: usize,
    },
    NoAttendance(String),
    InvalidDateArgument(String),

    // === PERIODS AND PRORATION ===
    PeriodHeader(String),
    ProrationHeader(String),
    ProrationResult {
        monthly: String,
        frequency: String,
        amount: String,
    },

    // === PAYSLIPS ===
    PayslipsHeader,
    PayslipHeader(u64, String),
    NoPayslips,
    PayslipNotFound(u64),
    PayslipRequestFailed(u64),
    NoEmployeesToGenerate,
    WorkingDaysOverride(i64),
    GeneratingPayslips {
        count: usize,
        period: String,
    },
    PayslipsGenerated(usize),
    BulkGenerating(String),
    PayslipStatusUpdated(u64, String),
    PromptConfirmDelete(u64, String),
    PayslipDeleted(u64),
    DeleteCancelled,

    // === EMPLOYEES ===
    EmployeesHeader,
    NoEmployees,

    // === EXPORT ===
    ExportCompleted(String),
    ExportFailed(String),

    // === ERRORS ===
    FetchFailed(String),
}
