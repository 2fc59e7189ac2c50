//! UI Components
//!
//! Leptos components for the map page.

mod add_pin_dialog;
mod barangay_info;
mod delete_confirm_button;
mod floating_action_button;
mod map_view;
mod pin_list;
mod visit_logger;

pub use add_pin_dialog::{AddPinDialog, PinDraft};
pub use barangay_info::BarangayInfo;
pub use delete_confirm_button::DeleteConfirmButton;
pub use floating_action_button::FloatingActionButton;
pub use map_view::MapView;
pub use pin_list::PinList;
pub use visit_logger::VisitLogger;
