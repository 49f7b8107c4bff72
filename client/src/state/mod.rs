//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each model is a plain struct with synchronous mutators. `app.rs` wraps the
//! process-wide ones (`theme`, `notifications`, `layout`) in `RwSignal`s and
//! provides them through Leptos context; page-local models (`dashboard`) and
//! component-local ones (`navigation`, `layout::HeaderMenus`) live in signals
//! owned by the component that uses them.

pub mod dashboard;
pub mod layout;
pub mod navigation;
pub mod notifications;
pub mod theme;
