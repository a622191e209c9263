//! Builders for the scrolled content sections. Each section is one `Group`
//! with a fixed height derived from its content; the running offsets double
//! as the spans the scroll-spy works from.

use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::content::{
    self, Certification, EducationEntry, ExperienceEntry, Project, Section, SkillGroup, PROFILE,
};
use crate::app::messages::Message;
use crate::app::scrollspy::SectionSpan;
use super::contact_panel::ContactPanel;

const MARGIN: i32 = 32;
const HEADING_H: i32 = 78;
const GAP: i32 = 16;

pub struct BuiltSections {
    pub groups: Vec<(Section, Group)>,
    pub spans: Vec<SectionSpan>,
    pub contact: ContactPanel,
    /// Total height of the scrolled content, footer included.
    pub content_height: i32,
}

/// Build every section, in document order, starting at `origin_y` (the top of
/// the scroll area). `w` is the usable content width including margins.
pub fn build_sections(origin_y: i32, w: i32, sender: &Sender<Message>) -> BuiltSections {
    let x = MARGIN;
    let inner_w = w - 2 * MARGIN;

    let mut groups = Vec::new();
    let mut spans = Vec::new();
    let mut offset = 0;
    let mut contact = None;

    for &section in &Section::ALL {
        let y = origin_y + offset;
        let group = match section {
            Section::About => build_about(x, y, inner_w, sender),
            Section::Education => build_education(x, y, inner_w),
            Section::Experience => build_experience(x, y, inner_w),
            Section::Skills => build_skills(x, y, inner_w),
            Section::Projects => build_projects(x, y, inner_w, sender),
            Section::Certifications => build_certifications(x, y, inner_w),
            Section::Contact => {
                let (group, panel) = build_contact(x, y, inner_w, sender);
                contact = Some(panel);
                group
            }
        };
        spans.push(SectionSpan {
            section,
            top: offset,
            height: group.h(),
        });
        offset += group.h() + GAP;
        groups.push((section, group));
    }

    let footer = build_footer(x, origin_y + offset, inner_w, sender);
    offset += footer.h();

    BuiltSections {
        groups,
        spans,
        contact: contact.expect("contact section was built"),
        content_height: offset,
    }
}

fn heading(x: i32, y: i32, w: i32, title: &str, subtitle: &str) {
    let mut t = Frame::new(x, y, w, 40, None).with_label(title);
    t.set_label_font(Font::HelveticaBold);
    t.set_label_size(26);

    let mut s = Frame::new(x, y + 42, w, 24, None).with_label(subtitle);
    s.set_label_size(13);
}

fn card(x: i32, y: i32, w: i32, h: i32) -> Group {
    let mut g = Group::new(x, y, w, h, None);
    g.set_frame(FrameType::BorderBox);
    g.set_color(fltk::enums::Color::BackGround2);
    g
}

fn text(x: i32, y: i32, w: i32, h: i32, label: &str, size: i32, bold: bool) -> Frame {
    let mut f = Frame::new(x, y, w, h, None).with_label(label);
    f.set_align(Align::Inside | Align::Left | Align::Top | Align::Wrap);
    f.set_label_size(size);
    if bold {
        f.set_label_font(Font::HelveticaBold);
    }
    f
}

fn link_button(
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    label: &str,
    url: &'static str,
    sender: &Sender<Message>,
) -> Button {
    let mut btn = Button::new(x, y, w, h, None).with_label(label);
    btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::OpenLink(url))
    });
    btn
}

fn build_about(x: i32, y: i32, w: i32, sender: &Sender<Message>) -> Group {
    let h = 280;
    let group = Group::new(x, y, w, h, None);

    let mut hello = Frame::new(x, y + 16, w, 44, None)
        .with_label(&format!("Hi, I'm {}", PROFILE.name));
    hello.set_align(Align::Inside | Align::Left);
    hello.set_label_font(Font::HelveticaBold);
    hello.set_label_size(32);

    text(x, y + 68, w, 26, PROFILE.tagline, 15, false);
    text(x, y + 102, w, 44, PROFILE.bio, 12, false);

    let mut bx = x;
    let mut touch = Button::new(bx, y + 158, 150, 38, None).with_label("Get In Touch");
    touch.set_label_font(Font::HelveticaBold);
    touch.set_callback({
        let s = *sender;
        move |_| s.send(Message::NavigateTo(Section::Contact))
    });
    bx += 150 + 12;
    link_button(bx, y + 158, 150, 38, "Download CV", PROFILE.resume_url, sender);

    let mut sx = x;
    link_button(sx, y + 214, 110, 30, "GitHub", PROFILE.github_url, sender);
    sx += 110 + 12;
    link_button(sx, y + 214, 110, 30, "LinkedIn", PROFILE.linkedin_url, sender);
    sx += 110 + 20;
    let mut phone = Frame::new(sx, y + 214, 220, 30, None).with_label(PROFILE.phone);
    phone.set_align(Align::Inside | Align::Left);
    phone.set_label_size(12);

    group.end();
    group
}

fn education_card(x: i32, y: i32, w: i32, entry: &EducationEntry) -> Group {
    let h = 88;
    let group = card(x, y, w, h);
    text(x + 16, y + 12, w - 32, 22, entry.degree, 15, true);
    text(x + 16, y + 36, w - 32, 18, entry.institution, 12, false);
    text(x + 16, y + 58, w / 2, 18, entry.period, 11, false);
    let mut grade = Frame::new(x + w - 216, y + 58, 200, 18, None).with_label(entry.grade);
    grade.set_align(Align::Inside | Align::Right);
    grade.set_label_size(11);
    grade.set_label_font(Font::HelveticaBold);
    group.end();
    group
}

fn build_education(x: i32, y: i32, w: i32) -> Group {
    let card_h = 88;
    let h = HEADING_H + content::EDUCATION.len() as i32 * (card_h + GAP);
    let group = Group::new(x, y, w, h, None);
    heading(x, y, w, "Education", "My academic journey");
    let mut cy = y + HEADING_H;
    for entry in &content::EDUCATION {
        education_card(x, cy, w, entry);
        cy += card_h + GAP;
    }
    group.end();
    group
}

fn experience_card(x: i32, y: i32, w: i32, entry: &ExperienceEntry) -> Group {
    let h = 88;
    let group = card(x, y, w, h);
    text(x + 16, y + 12, w - 200, 22, entry.title, 15, true);
    text(x + 16, y + 36, w - 200, 18, entry.company, 12, false);
    text(x + 16, y + 58, w - 200, 18, entry.period, 11, false);

    let mut badge = Frame::new(x + w - 176, y + 12, 160, 26, None).with_label(entry.engagement);
    badge.set_frame(FrameType::BorderFrame);
    badge.set_label_size(11);
    group.end();
    group
}

fn build_experience(x: i32, y: i32, w: i32) -> Group {
    let card_h = 88;
    let h = HEADING_H + content::EXPERIENCE.len() as i32 * (card_h + GAP);
    let group = Group::new(x, y, w, h, None);
    heading(x, y, w, "Work Experience", "Professional journey and internships");
    let mut cy = y + HEADING_H;
    for entry in &content::EXPERIENCE {
        experience_card(x, cy, w, entry);
        cy += card_h + GAP;
    }
    group.end();
    group
}

fn skill_card(x: i32, y: i32, w: i32, group_data: &SkillGroup) -> Group {
    let h = 96;
    let group = card(x, y, w, h);
    text(x + 16, y + 12, w - 32, 20, group_data.category, 14, true);
    text(x + 16, y + 36, w - 32, 52, &group_data.skills.join("  \u{2022}  "), 11, false);
    group.end();
    group
}

fn build_skills(x: i32, y: i32, w: i32) -> Group {
    let card_h = 96;
    let col_w = (w - GAP) / 2;
    let rows = content::SKILL_GROUPS.len().div_ceil(2) as i32;
    let h = HEADING_H + rows * (card_h + GAP);
    let group = Group::new(x, y, w, h, None);
    heading(x, y, w, "Skills & Technologies", "Technologies I work with");
    for (i, skill_group) in content::SKILL_GROUPS.iter().enumerate() {
        let col = (i % 2) as i32;
        let row = (i / 2) as i32;
        let cx = x + col * (col_w + GAP);
        let cy = y + HEADING_H + row * (card_h + GAP);
        skill_card(cx, cy, col_w, skill_group);
    }
    group.end();
    group
}

fn project_card(x: i32, y: i32, w: i32, project: &Project, sender: &Sender<Message>) -> Group {
    let h = 248;
    let group = card(x, y, w, h);
    text(x + 16, y + 12, w - 32, 22, project.title, 15, true);
    text(x + 16, y + 36, w - 32, 16, project.period, 11, false);
    text(x + 16, y + 56, w - 32, 34, project.description, 12, false);

    text(x + 16, y + 94, w - 32, 16, "Tech Stack:", 11, true);
    text(x + 16, y + 112, w - 32, 18, &project.tech.join(", "), 11, false);

    text(x + 16, y + 134, w - 32, 16, "Features:", 11, true);
    let features = project
        .features
        .iter()
        .map(|f| format!("\u{2022} {}", f))
        .collect::<Vec<_>>()
        .join("\n");
    text(x + 16, y + 152, w - 32, 62, &features, 11, false);

    let mut links: Vec<(&str, &'static str)> = Vec::new();
    if let Some(url) = project.report_url {
        links.push(("View Report", url));
    }
    if let Some(url) = project.demo_url {
        links.push(("Live Demo", url));
    }
    for (i, (label, url)) in links.into_iter().enumerate() {
        link_button(x + 16 + i as i32 * 120, y + h - 34, 110, 26, label, url, sender);
    }
    group.end();
    group
}

fn build_projects(x: i32, y: i32, w: i32, sender: &Sender<Message>) -> Group {
    let card_h = 248;
    let col_w = (w - GAP) / 2;
    let rows = content::PROJECTS.len().div_ceil(2) as i32;
    let h = HEADING_H + rows * (card_h + GAP);
    let group = Group::new(x, y, w, h, None);
    heading(x, y, w, "Featured Projects", "Some of my recent work");
    for (i, project) in content::PROJECTS.iter().enumerate() {
        let col = (i % 2) as i32;
        let row = (i / 2) as i32;
        let cx = x + col * (col_w + GAP);
        let cy = y + HEADING_H + row * (card_h + GAP);
        project_card(cx, cy, col_w, project, sender);
    }
    group.end();
    group
}

fn certification_card(x: i32, y: i32, w: i32, cert: &Certification) -> Group {
    let h = 120;
    let group = card(x, y, w, h);
    text(x + 16, y + 12, w - 32, 36, cert.title, 14, true);
    text(x + 16, y + 50, w - 32, 18, cert.issuer, 12, false);
    if let Some(description) = cert.description {
        text(x + 16, y + 70, w - 32, 18, description, 11, false);
    }
    if cert.verified {
        text(x + 16, y + h - 26, w - 32, 18, "\u{2705} Verified Certificate", 11, false);
    }
    group.end();
    group
}

fn build_certifications(x: i32, y: i32, w: i32) -> Group {
    let card_h = 120;
    let col_w = (w - GAP) / 2;
    let rows = content::CERTIFICATIONS.len().div_ceil(2) as i32;
    let achievement_h = 84;
    let h = HEADING_H + rows * (card_h + GAP) + achievement_h;
    let group = Group::new(x, y, w, h, None);
    heading(x, y, w, "Certifications", "Professional certifications and achievements");
    for (i, cert) in content::CERTIFICATIONS.iter().enumerate() {
        let col = (i % 2) as i32;
        let row = (i / 2) as i32;
        let cx = x + col * (col_w + GAP);
        let cy = y + HEADING_H + row * (card_h + GAP);
        certification_card(cx, cy, col_w, cert);
    }

    let ay = y + HEADING_H + rows * (card_h + GAP);
    let achievement = card(x, ay, w, achievement_h);
    let mut title = Frame::new(x, ay + 14, w, 24, None).with_label("Scholarship Achievement");
    title.set_label_font(Font::HelveticaBold);
    title.set_label_size(16);
    let mut blurb = Frame::new(x + 16, ay + 42, w - 32, 30, None).with_label(content::ACHIEVEMENT);
    blurb.set_label_size(12);
    blurb.set_align(Align::Inside | Align::Wrap);
    achievement.end();

    group.end();
    group
}

fn build_contact(
    x: i32,
    y: i32,
    w: i32,
    sender: &Sender<Message>,
) -> (Group, ContactPanel) {
    let col_w = (w - 2 * GAP) / 2;
    let h = HEADING_H + ContactPanel::HEIGHT + GAP;
    let group = Group::new(x, y, w, h, None);
    heading(x, y, w, "Get In Touch", "Let's connect and work together");

    let cy = y + HEADING_H;
    text(x, cy, col_w, 24, "Let's discuss your project", 16, true);
    text(x, cy + 30, col_w, 60, PROFILE.bio, 12, false);

    let rows = [
        ("Email", PROFILE.email),
        ("Phone", PROFILE.phone),
        ("Location", PROFILE.location),
    ];
    let mut ry = cy + 100;
    for (label, value) in rows {
        text(x, ry, 90, 20, label, 12, true);
        text(x + 96, ry, col_w - 96, 20, value, 12, false);
        ry += 30;
    }

    link_button(x, ry + 14, 120, 34, "GitHub", PROFILE.github_url, sender);
    link_button(x + 132, ry + 14, 120, 34, "LinkedIn", PROFILE.linkedin_url, sender);

    let panel = ContactPanel::new(x + col_w + 2 * GAP, cy, w - col_w - 2 * GAP, sender);

    group.end();
    (group, panel)
}

fn build_footer(x: i32, y: i32, w: i32, sender: &Sender<Message>) -> Group {
    let h = 140;
    let group = Group::new(x, y, w, h, None);

    let mut name = Frame::new(x, y + 16, w, 26, None).with_label(PROFILE.name);
    name.set_label_font(Font::HelveticaBold);
    name.set_label_size(17);

    let mut line = Frame::new(x, y + 46, w, 20, None)
        .with_label("Computer Science Student \u{2022} Web Developer \u{2022} Data Enthusiast");
    line.set_label_size(12);

    link_button(x + w / 2 - 130, y + 76, 80, 26, "GitHub", PROFILE.github_url, sender);
    link_button(x + w / 2 - 40, y + 76, 80, 26, "LinkedIn", PROFILE.linkedin_url, sender);
    let mut mail = Button::new(x + w / 2 + 50, y + 76, 80, 26, None).with_label("Email");
    mail.set_callback(|_| {
        if let Err(e) = open::that(format!("mailto:{}", PROFILE.email)) {
            eprintln!("Failed to open mail client: {}", e);
        }
    });

    let mut copyright = Frame::new(x, y + 112, w, 18, None)
        .with_label(&format!("\u{a9} 2025 {}. Built with Rust & FLTK.", PROFILE.name));
    copyright.set_label_size(10);

    group.end();
    group
}
