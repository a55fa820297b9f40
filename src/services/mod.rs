//! Browser Adapters
//!
//! localStorage and HTTP implementations of the core storage seams.

mod browser_storage;
mod http_source;

pub use browser_storage::BrowserStorage;
pub use http_source::HttpSource;

/// Milliseconds since the epoch, used to stamp new items
pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}
