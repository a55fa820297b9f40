#![allow(warnings)]
//! TodoBoard Frontend Entry Point

mod models;
mod config;
mod services;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    if console_logger::init(LevelFilter::Info).is_err() {
        web_sys::console::warn_1(&"[APP] logger already installed".into());
    }
    mount_to_body(App);
}
