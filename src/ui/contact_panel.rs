use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    input::{Input, MultilineInput},
    prelude::*,
};

use crate::app::contact::Submission;
use crate::app::messages::Message;
use super::theme::Palette;

/// The contact form widgets: an editing view and a confirmation view that
/// occupy the same area, with exactly one shown at a time.
pub struct ContactPanel {
    form_group: Group,
    done_group: Group,
    name_input: Input,
    email_input: Input,
    message_input: MultilineInput,
    submit_btn: Button,
    done_heading: Frame,
    another_btn: Button,
}

impl ContactPanel {
    pub const HEIGHT: i32 = 370;

    pub fn new(x: i32, y: i32, w: i32, sender: &Sender<Message>) -> Self {
        let mut form_group = Group::new(x, y, w, Self::HEIGHT, None);
        form_group.set_frame(FrameType::BorderBox);
        form_group.set_color(fltk::enums::Color::BackGround2);

        let pad = 16;
        let inner_x = x + pad;
        let inner_w = w - 2 * pad;
        let mut cy = y + pad;

        field_label(inner_x, cy, inner_w, "Full Name");
        cy += 20;
        let mut name_input = Input::new(inner_x, cy, inner_w, 30, None);
        name_input.set_tooltip("Enter your full name");
        cy += 30 + 12;

        field_label(inner_x, cy, inner_w, "Email Address");
        cy += 20;
        let mut email_input = Input::new(inner_x, cy, inner_w, 30, None);
        email_input.set_tooltip("Enter your email address");
        cy += 30 + 12;

        field_label(inner_x, cy, inner_w, "Message");
        cy += 20;
        let mut message_input = MultilineInput::new(inner_x, cy, inner_w, 108, None);
        message_input.set_wrap(true);
        message_input.set_tooltip("Tell me about your project or just say hello...");
        cy += 108 + 14;

        let mut submit_btn = Button::new(inner_x, cy, inner_w, 38, None).with_label("Send Message");
        submit_btn.set_label_font(Font::HelveticaBold);
        submit_btn.set_callback({
            let s = *sender;
            move |_| s.send(Message::SubmitMessage)
        });
        cy += 38 + 8;

        let mut note = Frame::new(inner_x, cy, inner_w, 30, None).with_label(
            "Your message will be sent directly to my email.\nI typically respond within 24 hours.",
        );
        note.set_label_size(10);

        form_group.end();

        // Confirmation view, hidden until a delivery succeeds
        let mut done_group = Group::new(x, y, w, Self::HEIGHT, None);
        done_group.set_frame(FrameType::BorderBox);
        done_group.set_color(fltk::enums::Color::BackGround2);

        let mut done_heading = Frame::new(inner_x, y + 90, inner_w, 30, None)
            .with_label("Message Sent Successfully!");
        done_heading.set_label_font(Font::HelveticaBold);
        done_heading.set_label_size(17);

        let mut done_body = Frame::new(inner_x, y + 125, inner_w, 50, None).with_label(
            "Thank you for reaching out.\nI'll respond to your message as soon as possible.",
        );
        done_body.set_label_size(12);

        let mut another_btn = Button::new(x + w / 2 - 110, y + 195, 220, 36, None)
            .with_label("Send Another Message");
        another_btn.set_callback({
            let s = *sender;
            move |_| s.send(Message::ComposeAnother)
        });

        done_group.end();
        done_group.hide();

        Self {
            form_group,
            done_group,
            name_input,
            email_input,
            message_input,
            submit_btn,
            done_heading,
            another_btn,
        }
    }

    /// Current field values as entered by the user.
    pub fn values(&self) -> Submission {
        Submission {
            name: self.name_input.value(),
            email: self.email_input.value(),
            message: self.message_input.value(),
        }
    }

    pub fn clear_inputs(&mut self) {
        self.name_input.set_value("");
        self.email_input.set_value("");
        self.message_input.set_value("");
    }

    /// While a delivery is in flight the fields and the submit control are
    /// disabled; that is the only double-submit gate.
    pub fn set_busy(&mut self, busy: bool) {
        if busy {
            self.name_input.deactivate();
            self.email_input.deactivate();
            self.message_input.deactivate();
            self.submit_btn.deactivate();
            self.submit_btn.set_label("Sending...");
        } else {
            self.name_input.activate();
            self.email_input.activate();
            self.message_input.activate();
            self.submit_btn.activate();
            self.submit_btn.set_label("Send Message");
        }
        self.form_group.redraw();
    }

    pub fn show_submitted(&mut self) {
        self.form_group.hide();
        self.done_group.show();
        self.done_group.redraw();
    }

    pub fn show_editing(&mut self) {
        self.done_group.hide();
        self.form_group.show();
        self.form_group.redraw();
    }

    pub fn apply_palette(&mut self, palette: &Palette) {
        self.submit_btn.set_color(palette.accent);
        self.submit_btn.set_label_color(palette.accent_text);
        self.another_btn.set_label_color(palette.text);
        self.done_heading.set_label_color(palette.success);
        self.form_group.redraw();
        self.done_group.redraw();
    }
}

fn field_label(x: i32, y: i32, w: i32, text: &str) -> Frame {
    let mut label = Frame::new(x, y, w, 18, None).with_label(text);
    label.set_align(Align::Inside | Align::Left);
    label.set_label_size(12);
    label
}
