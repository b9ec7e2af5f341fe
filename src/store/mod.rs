//! In-memory state shared by all requests.
//!
//! Both stores are injected through `web::Data` at service start; nothing in
//! this crate keeps module-level state. The todo store is the mutable,
//! process-lifetime half; the user store is a fixed lookup seeded once.

pub mod todos;
pub mod users;

pub use todos::TodoStore;
pub use users::UserStore;
