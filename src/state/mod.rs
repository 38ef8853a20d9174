pub mod confetti;
pub mod controller;
pub mod display;
pub mod input;
pub mod store;
pub mod toasts;

pub use controller::{ControllerCommand, ControllerViewModel};
pub use display::DisplayViewModel;
#[cfg(test)]
pub use store::MemoryStore;
pub use store::{KeyValueStore, LocalStore};
pub use toasts::{Toast, ToastAction, ToastQueue};
