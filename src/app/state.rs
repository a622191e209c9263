use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app::Sender, dialog, prelude::*};

use super::contact::{ContactForm, SubmitOutcome};
use super::content::Section;
use super::mailer::{self, RelayConfig};
use super::messages::Message;
use super::scrollspy::{self, RevealTracker};
use super::settings::{AppSettings, ThemeChoice};
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::Palette;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

/// Main application coordinator. Owns the widgets and every piece of
/// transient UI state: the active section, the theme flag and the contact
/// form phase. All mutation happens through the message handlers below.
pub struct AppState {
    widgets: MainWidgets,
    sender: Sender<Message>,
    settings: Rc<RefCell<AppSettings>>,
    pub dark_mode: bool,
    pub active_section: Section,
    pub form: ContactForm,
    reveals: RevealTracker,
    relay: RelayConfig,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
        dark_mode: bool,
    ) -> Self {
        let mut state = Self {
            widgets,
            sender,
            settings,
            dark_mode,
            active_section: Section::About,
            form: ContactForm::new(),
            reveals: RevealTracker::new(),
            relay: RelayConfig::bundled(),
        };

        // Sections start muted and light up once scrolled into view
        for (_, group) in &mut state.widgets.sections {
            group.deactivate();
        }
        state
    }

    /// Show the window and run the initial scroll pass so the first sections
    /// reveal themselves.
    pub fn show(&mut self) {
        self.widgets.wind.show();
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.widgets.wind, self.dark_mode);
        self.handle_scroll();
    }

    // --- Theme ---

    pub fn apply_theme(&mut self) {
        let palette = Palette::for_mode(self.dark_mode);
        palette.apply_global();
        self.widgets
            .nav
            .apply_palette(&palette, self.active_section, self.dark_mode);
        self.widgets.contact.apply_palette(&palette);
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.widgets.wind, self.dark_mode);
        self.widgets.wind.redraw();
    }

    /// Flip the theme, repaint, and persist the choice so the next visit
    /// starts where the user left off.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        {
            let mut settings = self.settings.borrow_mut();
            settings.theme = Some(ThemeChoice::for_dark_mode(self.dark_mode));
            if let Err(e) = settings.save() {
                eprintln!("Failed to save settings: {}", e);
            }
        }
        self.apply_theme();
    }

    // --- Navigation ---

    pub fn navigate_to(&mut self, section: Section) {
        let Some(span) = self
            .widgets
            .spans
            .iter()
            .find(|s| s.section == section)
            .copied()
        else {
            return;
        };

        let max_scroll = (self.widgets.content_height - self.widgets.scroll.h()).max(0);
        let target = span.top.min(max_scroll);
        self.widgets.scroll.scroll_to(0, target);
        self.handle_scroll();
    }

    /// Recompute the active section and sweep reveals from the current
    /// scroll position.
    pub fn handle_scroll(&mut self) {
        let pos = self.widgets.scroll.yposition();

        if let Some(active) = scrollspy::active_section(&self.widgets.spans, pos) {
            if active != self.active_section {
                self.active_section = active;
                let palette = Palette::for_mode(self.dark_mode);
                self.widgets.nav.apply_palette(&palette, active, self.dark_mode);
            }
        }

        let viewport = self.widgets.scroll.h();
        for section in self.reveals.sweep(&self.widgets.spans, pos, viewport) {
            if let Some((_, group)) = self
                .widgets
                .sections
                .iter_mut()
                .find(|(s, _)| *s == section)
            {
                group.activate();
                group.redraw();
            }
        }
    }

    pub fn open_link(&self, url: &str) {
        if let Err(e) = open::that(url) {
            eprintln!("Failed to open {}: {}", url, e);
        }
    }

    // --- Contact form ---

    pub fn submit_message(&mut self) {
        let fields = self.widgets.contact.values();
        match self.form.submit(fields) {
            SubmitOutcome::Started(payload) => {
                self.widgets.contact.set_busy(true);
                mailer::deliver_in_background(self.relay.clone(), payload, self.sender);
            }
            SubmitOutcome::MissingFields => {
                dialog::alert_default("Please fill in all fields before sending.");
            }
            SubmitOutcome::InFlight => {}
        }
    }

    pub fn delivery_finished(&mut self, result: Result<(), String>) {
        self.widgets.contact.set_busy(false);
        match result {
            Ok(()) => {
                self.form.delivery_succeeded();
                self.widgets.contact.clear_inputs();
                self.widgets.contact.show_submitted();
            }
            Err(e) => {
                // Diagnostics only; the user gets a generic retry message
                eprintln!("Delivery failed: {}", e);
                self.form.delivery_failed();
                dialog::alert_default(
                    "Failed to send message. Please try again or contact me directly.",
                );
            }
        }
    }

    pub fn compose_another(&mut self) {
        self.form.compose_another();
        self.widgets.contact.clear_inputs();
        self.widgets.contact.show_editing();
    }
}
