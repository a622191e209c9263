//! Application layer.
//!
//! # Structure
//!
//! - `content.rs` - Static portfolio content (profile, sections, projects)
//! - `contact.rs` - Contact form state machine
//! - `mailer.rs` - Delivery to the EmailJS relay
//! - `scrollspy.rs` - Active-section tracking and one-way reveal
//! - `settings.rs` - Persisted theme preference
//! - `state.rs` - Main application coordinator

pub mod contact;
pub mod content;
pub mod error;
pub mod mailer;
pub mod messages;
pub mod platform;
pub mod scrollspy;
pub mod settings;
pub mod state;

// Re-exports for convenient external access
pub use contact::{ContactForm, FormPhase, Submission, SubmitOutcome};
pub use content::Section;
pub use error::{AppError, Result};
pub use messages::Message;
pub use platform::detect_system_dark_mode;
pub use settings::{AppSettings, ThemeChoice};
