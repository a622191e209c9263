use std::cell::RefCell;
use std::rc::Rc;

use fltk::app;

use folio::app::settings::resolve_initial_dark_mode;
use folio::app::state::AppState;
use folio::app::{AppSettings, Message, detect_system_dark_mode};
use folio::ui::main_window::build_main_window;

fn main() {
    let fl_app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let settings = Rc::new(RefCell::new(AppSettings::load()));
    let dark_mode = resolve_initial_dark_mode(settings.borrow().theme, detect_system_dark_mode());

    let widgets = build_main_window(&sender);
    let mut state = AppState::new(widgets, sender, settings, dark_mode);
    state.apply_theme();
    state.show();

    while fl_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::NavigateTo(section) => state.navigate_to(section),
                Message::ScrollChanged => state.handle_scroll(),
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::OpenLink(url) => state.open_link(url),
                Message::SubmitMessage => state.submit_message(),
                Message::DeliveryFinished(result) => state.delivery_finished(result),
                Message::ComposeAnother => state.compose_another(),
                Message::Quit => fl_app.quit(),
            }
        }
    }
}
