//! Binding of the rule engine to a window-manager view.
//!
//! [`ViewAccess`] answers `app_id`, `title` and `role` reads and
//! [`ViewActions`] carries out the view actions. Both borrow a host
//! [`View`] and can be rebound between calls.

mod access;
mod actions;
mod memory;
mod snap;
mod subject;

pub use access::ViewAccess;
pub use actions::{ViewActions, MAX_ALPHA, MIN_ALPHA, MIN_HEIGHT, MIN_WIDTH};
pub use memory::{MemoryView, ViewRequest};
pub use snap::SnapSlot;
pub use subject::{Size, View, ViewRole};
