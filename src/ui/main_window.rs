use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Event, Font, FrameType},
    frame::Frame,
    group::{Group, Scroll, ScrollType},
    prelude::*,
    window::Window,
};

use crate::app::content::{Section, PROFILE};
use crate::app::messages::Message;
use crate::app::scrollspy::SectionSpan;
use super::contact_panel::ContactPanel;
use super::sections::build_sections;
use super::theme::Palette;

pub const WINDOW_W: i32 = 960;
pub const WINDOW_H: i32 = 680;
pub const NAV_H: i32 = 48;

/// The fixed navigation bar: brand, one button per section, theme toggle and
/// a resume link.
pub struct NavBar {
    bar: Group,
    section_buttons: Vec<(Section, Button)>,
    theme_btn: Button,
    resume_btn: Button,
    brand: Frame,
}

impl NavBar {
    fn new(sender: &Sender<Message>) -> Self {
        let mut bar = Group::new(0, 0, WINDOW_W, NAV_H, None);
        bar.set_frame(FrameType::FlatBox);

        let mut brand = Frame::new(12, 0, 150, NAV_H, None).with_label(PROFILE.name);
        brand.set_align(Align::Inside | Align::Left);
        brand.set_label_font(Font::HelveticaBold);
        brand.set_label_size(15);

        let mut section_buttons = Vec::new();
        let mut bx = 170;
        for &section in &Section::ALL {
            let mut btn =
                Button::new(bx, 8, 92, NAV_H - 16, None).with_label(section.label());
            btn.set_frame(FrameType::FlatBox);
            btn.set_label_size(11);
            btn.set_callback({
                let s = *sender;
                move |_| s.send(Message::NavigateTo(section))
            });
            section_buttons.push((section, btn));
            bx += 94;
        }

        let mut theme_btn = Button::new(WINDOW_W - 116, 8, 32, NAV_H - 16, None);
        theme_btn.set_frame(FrameType::FlatBox);
        theme_btn.set_tooltip("Toggle dark mode");
        theme_btn.set_callback({
            let s = *sender;
            move |_| s.send(Message::ToggleDarkMode)
        });

        let mut resume_btn =
            Button::new(WINDOW_W - 78, 8, 70, NAV_H - 16, None).with_label("Resume");
        resume_btn.set_label_size(11);
        resume_btn.set_callback({
            let s = *sender;
            move |_| s.send(Message::OpenLink(PROFILE.resume_url))
        });

        bar.end();

        Self {
            bar,
            section_buttons,
            theme_btn,
            resume_btn,
            brand,
        }
    }

    /// Recolor the bar for the palette and highlight the active section.
    pub fn apply_palette(&mut self, palette: &Palette, active: Section, dark: bool) {
        self.brand.set_label_color(palette.accent);
        self.theme_btn
            .set_label(if dark { "\u{2600}" } else { "\u{263e}" });
        self.theme_btn.set_label_color(palette.text);
        self.resume_btn.set_label_color(palette.text);
        for (section, btn) in &mut self.section_buttons {
            if *section == active {
                btn.set_label_color(palette.accent);
                btn.set_label_font(Font::HelveticaBold);
            } else {
                btn.set_label_color(palette.muted);
                btn.set_label_font(Font::Helvetica);
            }
        }
        self.bar.redraw();
    }
}

pub struct MainWidgets {
    pub wind: Window,
    pub nav: NavBar,
    pub scroll: Scroll,
    pub sections: Vec<(Section, Group)>,
    pub spans: Vec<SectionSpan>,
    pub contact: ContactPanel,
    pub content_height: i32,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_W, WINDOW_H, None)
        .with_label(&format!("{} - Folio", PROFILE.name));
    wind.set_xclass("Folio");

    let mut scroll = Scroll::new(0, NAV_H, WINDOW_W, WINDOW_H - NAV_H, None);
    scroll.set_type(ScrollType::Vertical);
    scroll.set_frame(FrameType::FlatBox);
    scroll.set_scrollbar_size(14);

    let built = build_sections(NAV_H, WINDOW_W - 14, sender);
    scroll.end();

    // The scrollbar drives the content directly and reports every move so the
    // scroll-spy can recompute the active section.
    let mut scrollbar = scroll.scrollbar();
    scrollbar.set_callback({
        let mut scroll = scroll.clone();
        let s = *sender;
        move |bar| {
            scroll.scroll_to(0, bar.value() as i32);
            s.send(Message::ScrollChanged);
        }
    });

    // Mouse-wheel and keyboard scrolling bypass the scrollbar callback
    scroll.handle({
        let s = *sender;
        move |_, event| {
            if matches!(event, Event::MouseWheel | Event::KeyUp | Event::Released) {
                s.send(Message::ScrollChanged);
            }
            false
        }
    });

    // Nav bar last so it stays above the scrolled content
    let nav = NavBar::new(sender);

    wind.end();

    // Closing the window goes through the same dispatch loop as everything else
    wind.set_callback({
        let s = *sender;
        move |_| {
            if fltk::app::event() == Event::Close {
                s.send(Message::Quit);
            }
        }
    });

    MainWidgets {
        wind,
        nav,
        scroll,
        sections: built.groups,
        spans: built.spans,
        contact: built.contact,
        content_height: built.content_height,
    }
}
