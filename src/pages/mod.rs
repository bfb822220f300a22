//! Screens
//!
//! One module per screen. Navigation is plain state in `AppContext`;
//! there are no URLs to deep-link into.

mod attendance;
mod attendance_filter;
mod dashboard;
mod fee_payments;
mod fee_structure;
mod fees;
mod fees_pending;
mod login;
mod results_create;
mod results_view;
mod student_add;
mod student_detail;
mod student_edit;
mod students;

pub use attendance::AttendancePage;
pub use attendance_filter::AttendanceFilterPage;
pub use dashboard::DashboardPage;
pub use fee_payments::FeePaymentsPage;
pub use fee_structure::FeeStructurePage;
pub use fees::FeesPage;
pub use fees_pending::FeesPendingPage;
pub use login::LoginPage;
pub use results_create::ResultsCreatePage;
pub use results_view::ResultsViewPage;
pub use student_add::StudentAddPage;
pub use student_detail::StudentDetailPage;
pub use student_edit::StudentEditPage;
pub use students::StudentsPage;
