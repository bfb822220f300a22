//! Add Student Screen
//!
//! Eight-field enrollment form. Address is the only optional field;
//! the rest rely on HTML `required`. The full record goes out as one
//! JSON body and the screen returns to the directory after the
//! success popup has been seen.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, StudentPayload};
use crate::components::{FormField, Popup, PopupState};
use crate::context::{AppContext, Screen};

#[component]
pub fn StudentAddPage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (roll_number, set_roll_number) = signal(String::new());
    let (standard, set_standard) = signal(String::new());
    let (section, set_section) = signal(String::new());
    let (father_name, set_father_name) = signal(String::new());
    let (mother_name, set_mother_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (popup, set_popup) = signal(None::<PopupState>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);
        let name = name.get();
        let roll_number = roll_number.get();
        let standard = standard.get();
        let section = section.get();
        let father_name = father_name.get();
        let mother_name = mother_name.get();
        let phone = phone.get();
        let address = address.get();
        spawn_local(async move {
            let payload = StudentPayload {
                name: &name,
                roll_number: &roll_number,
                standard: &standard,
                section: &section,
                father_name: &father_name,
                mother_name: &mother_name,
                phone: &phone,
                address: &address,
            };
            match api.create_student(&payload).await {
                Ok(()) => {
                    set_popup.set(Some(PopupState::success(
                        "Student Added",
                        "Student has been added successfully",
                    )));
                    TimeoutFuture::new(1200).await;
                    ctx.navigate(Screen::Students);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Students] Create error: {}", e).into());
                    set_popup.set(Some(PopupState::error("Error", "Failed to add student")));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page-body">
            <div class="page-head">
                <div>
                    <h2>"Add Student"</h2>
                    <p class="muted">"Enroll a new student"</p>
                </div>
                <button class="btn btn-ghost" on:click=move |_| ctx.navigate(Screen::Students)>
                    "← Back"
                </button>
            </div>

            <form class="form-card" on:submit=submit>
                <div class="form-grid">
                    <FormField label="Student Name" value=name set_value=set_name required=true />
                    <FormField label="Roll Number" value=roll_number set_value=set_roll_number required=true />
                    <FormField label="Standard" value=standard set_value=set_standard required=true />
                    <FormField label="Section" value=section set_value=set_section required=true />
                    <FormField label="Father Name" value=father_name set_value=set_father_name required=true />
                    <FormField label="Mother Name" value=mother_name set_value=set_mother_name required=true />
                    <FormField label="Phone Number" value=phone set_value=set_phone required=true />
                </div>

                <label class="form-field">
                    <span class="field-label">"Address"</span>
                    <textarea
                        rows="3"
                        prop:value=address
                        on:input=move |ev| set_address.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <div class="form-actions">
                    <button
                        type="button"
                        class="btn btn-ghost"
                        on:click=move |_| ctx.navigate(Screen::Students)
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=saving>
                        {move || if saving.get() { "Saving..." } else { "Save Student" }}
                    </button>
                </div>
            </form>

            <Popup popup=popup set_popup=set_popup />
        </div>
    }
}
