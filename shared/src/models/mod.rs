//! Domain models for the kiosk engine

pub mod cart;
pub mod item;
pub mod purchase;
pub mod user;

pub use cart::CartLine;
pub use item::{CatalogItem, Promotion, PromotionKind};
pub use purchase::PurchaseRecord;
pub use user::{validate_otp, validate_phone, UserIdentity};
