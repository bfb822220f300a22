#![allow(warnings)]
//! Nymph Classes Admin Frontend Entry Point

mod api;
mod app;
mod attendance_sheet;
mod charts;
mod components;
mod context;
mod fetch_guard;
mod marks;
mod models;
mod outcome;
mod pages;
mod search;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
