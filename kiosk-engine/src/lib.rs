//! SwiftCart kiosk engine
//!
//! Headless core for a smart shopping cart kiosk: static catalog, cart
//! ledger with SST pricing, timer-driven detection simulation, a keyword
//! matching assistant, and the session state machine that ties them
//! together. Rendering, dialogs, and QR image drawing live outside this
//! crate; the engine exposes typed operations and read-only snapshots.

pub mod cart;
pub mod catalog;
pub mod chatbot;
pub mod config;
pub mod detection;
pub mod navigation;
pub mod payment;
pub mod session;

// Re-exports
pub use cart::CartLedger;
pub use catalog::Catalog;
pub use config::Config;
pub use session::{Screen, SessionController};
