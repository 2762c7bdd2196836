//! Page fetching
//!
//! [`BrowserSession`] owns the single Chrome instance used for a run. Everything that needs a
//! rendered page borrows a [`PageSource`], which lets tests and offline runs swap in
//! [`StaticPages`].

pub mod config;
pub mod session;
pub mod source;

pub use config::{ConnectionOptions, LaunchOptions};
pub use session::BrowserSession;
pub use source::{PageSource, StaticPages};
