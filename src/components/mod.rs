pub mod app;
pub mod challenge_list;
pub mod confetti;
pub mod controller_view;
pub mod display_view;
pub mod settings_modal;
pub mod stats_panel;
pub mod toaster;
