//! Edit Student Screen
//!
//! Same eight fields as the add form, prefilled from the record. The
//! whole record is sent back on save, not a diff.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, StudentPayload};
use crate::components::{FormField, Popup, PopupState};
use crate::context::{AppContext, Screen};

#[component]
pub fn StudentEditPage(id: String) -> impl IntoView {
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

    let load_id = id.clone();
    Effect::new(move |_| {
        let id = load_id.clone();
        spawn_local(async move {
            match api.get_student(&id).await {
                Ok(s) => {
                    set_name.set(s.name);
                    set_roll_number.set(s.roll_number);
                    set_standard.set(s.standard);
                    set_section.set(s.section);
                    set_father_name.set(s.father_name);
                    set_mother_name.set(s.mother_name);
                    set_phone.set(s.phone);
                    set_address.set(s.address);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Students] Load error: {}", e).into());
                }
            }
        });
    });

    let save_id = id.clone();
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);
        let id = save_id.clone();
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
            match api.update_student(&id, &payload).await {
                Ok(()) => {
                    set_popup.set(Some(PopupState::success(
                        "Updated",
                        "Student updated successfully!",
                    )));
                    TimeoutFuture::new(1200).await;
                    ctx.navigate(Screen::StudentDetail(id.clone()));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Students] Update error: {}", e).into());
                    set_popup.set(Some(PopupState::error("Error", "Error updating student")));
                }
            }
            set_saving.set(false);
        });
    };

    let back_id = id.clone();
    let back = move |_| ctx.navigate(Screen::StudentDetail(back_id.clone()));

    view! {
        <div class="page-body">
            <div class="page-head">
                <div>
                    <h2>"Edit Student"</h2>
                    <p class="muted">"Update the record"</p>
                </div>
                <button class="btn btn-ghost" on:click=back>
                    "← Back"
                </button>
            </div>

            <form class="form-card" on:submit=submit>
                <div class="form-grid">
                    <FormField label="Student Name" value=name set_value=set_name />
                    <FormField label="Roll Number" value=roll_number set_value=set_roll_number />
                    <FormField label="Standard" value=standard set_value=set_standard />
                    <FormField label="Section" value=section set_value=set_section />
                    <FormField label="Father Name" value=father_name set_value=set_father_name />
                    <FormField label="Mother Name" value=mother_name set_value=set_mother_name />
                    <FormField label="Phone Number" value=phone set_value=set_phone />
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
                    <button type="submit" class="btn btn-primary" disabled=saving>
                        {move || if saving.get() { "Updating..." } else { "Save Changes" }}
                    </button>
                </div>
            </form>

            <Popup popup=popup set_popup=set_popup />
        </div>
    }
}
