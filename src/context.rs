//! Application Context
//!
//! Shared navigation state provided via Leptos Context API. Screens are
//! plain state; there is no URL router in this app.

use leptos::prelude::*;

/// Screens of the admin app
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Students,
    StudentAdd,
    StudentDetail(String),
    StudentEdit(String),
    Attendance,
    AttendanceFilter,
    Fees,
    FeeStructure,
    FeePayments,
    FeesPending,
    ResultsCreate,
    ResultsView,
}

/// Sidebar sections; sub-screens highlight their parent entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Dashboard,
    Students,
    Results,
    Fees,
    Attendance,
}

impl NavSection {
    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Dashboard => "Dashboard",
            NavSection::Students => "Students",
            NavSection::Results => "Results",
            NavSection::Fees => "Fees",
            NavSection::Attendance => "Attendance",
        }
    }
}

impl Screen {
    pub fn nav_section(&self) -> NavSection {
        match self {
            Screen::Dashboard => NavSection::Dashboard,
            Screen::Students
            | Screen::StudentAdd
            | Screen::StudentDetail(_)
            | Screen::StudentEdit(_) => NavSection::Students,
            Screen::ResultsCreate | Screen::ResultsView => NavSection::Results,
            Screen::Fees
            | Screen::FeeStructure
            | Screen::FeePayments
            | Screen::FeesPending => NavSection::Fees,
            Screen::Attendance | Screen::AttendanceFilter => NavSection::Attendance,
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed screen - read
    pub screen: ReadSignal<Screen>,
    /// Currently displayed screen - write
    set_screen: WriteSignal<Screen>,
    /// Sidebar drawer open state (small viewports) - read
    pub sidebar_open: ReadSignal<bool>,
    /// Sidebar drawer open state (small viewports) - write
    set_sidebar_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        sidebar_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
            sidebar_open: sidebar_open.0,
            set_sidebar_open: sidebar_open.1,
        }
    }

    /// Switch to another screen and close the mobile drawer
    pub fn navigate(&self, screen: Screen) {
        self.set_screen.set(screen);
        self.set_sidebar_open.set(false);
    }

    pub fn open_sidebar(&self) {
        self.set_sidebar_open.set(true);
    }

    pub fn close_sidebar(&self) {
        self.set_sidebar_open.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_section_mapping() {
        // Sub-screens highlight their parent sidebar entry
        assert_eq!(
            Screen::StudentDetail("x".to_string()).nav_section(),
            NavSection::Students
        );
        assert_eq!(Screen::FeePayments.nav_section(), NavSection::Fees);
        assert_eq!(Screen::AttendanceFilter.nav_section(), NavSection::Attendance);
        assert_eq!(Screen::ResultsView.nav_section(), NavSection::Results);
        assert_eq!(Screen::default().nav_section(), NavSection::Dashboard);
    }
}
