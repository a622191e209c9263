use super::content::Section;

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    NavigateTo(Section),
    ScrollChanged,

    // Theme
    ToggleDarkMode,

    // External links (GitHub, LinkedIn, resume, project demos)
    OpenLink(&'static str),

    // Contact form
    SubmitMessage,
    DeliveryFinished(Result<(), String>),
    ComposeAnother,

    Quit,
}
