//! Browser-independent behaviour of the portfolio page: the state machines
//! and formatting the wasm front end drives from DOM events and timers.

pub mod cage;
pub mod config;
pub mod contact;
pub mod counter;
pub mod matrix;
pub mod nav;
pub mod notify;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod typing;

pub use config::{ConfigError, SiteConfig};
pub use contact::{ContactError, ContactMessage};
pub use notify::NotificationKind;
