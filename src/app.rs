//! Nymph Classes Admin App
//!
//! Root component. Builds the session store and the API client once,
//! provides both through context, and gates every screen behind the
//! login. Navigation is a plain screen enum matched in the shell.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{Sidebar, Topbar};
use crate::context::{AppContext, Screen};
use crate::pages::{
    AttendanceFilterPage, AttendancePage, DashboardPage, FeePaymentsPage, FeeStructurePage,
    FeesPage, FeesPendingPage, LoginPage, ResultsCreatePage, ResultsViewPage, StudentAddPage,
    StudentDetailPage, StudentEditPage, StudentsPage,
};
use crate::store::{apply_theme_class, Session, SessionStore, SessionStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let session: SessionStore = Store::new(Session::load());
    let api = ApiClient::new(session);

    let (current_screen, set_screen) = signal(Screen::default());
    let (sidebar_open, set_sidebar_open) = signal(false);

    // Provide context to all children
    provide_context(session);
    provide_context(api);
    provide_context(AppContext::new(
        (current_screen, set_screen),
        (sidebar_open, set_sidebar_open),
    ));

    // Retag the document root before the first paint
    apply_theme_class(session.theme().get_untracked());

    view! {
        <Show
            when=move || session.token().get().is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <div class="app-shell">
                <Sidebar />
                <div class="content-column">
                    <Topbar />
                    <main class="page">
                        {move || match current_screen.get() {
                            Screen::Dashboard => view! { <DashboardPage /> }.into_any(),
                            Screen::Students => view! { <StudentsPage /> }.into_any(),
                            Screen::StudentAdd => view! { <StudentAddPage /> }.into_any(),
                            Screen::StudentDetail(id) => {
                                view! { <StudentDetailPage id=id /> }.into_any()
                            }
                            Screen::StudentEdit(id) => {
                                view! { <StudentEditPage id=id /> }.into_any()
                            }
                            Screen::Attendance => view! { <AttendancePage /> }.into_any(),
                            Screen::AttendanceFilter => {
                                view! { <AttendanceFilterPage /> }.into_any()
                            }
                            Screen::Fees => view! { <FeesPage /> }.into_any(),
                            Screen::FeeStructure => view! { <FeeStructurePage /> }.into_any(),
                            Screen::FeePayments => view! { <FeePaymentsPage /> }.into_any(),
                            Screen::FeesPending => view! { <FeesPendingPage /> }.into_any(),
                            Screen::ResultsCreate => view! { <ResultsCreatePage /> }.into_any(),
                            Screen::ResultsView => view! { <ResultsViewPage /> }.into_any(),
                        }}
                    </main>
                </div>
            </div>
        </Show>
    }
}
