pub mod contact_panel;
pub mod main_window;
pub mod sections;
pub mod theme;
