use fltk::{app, enums::Color};

/// The handful of colors the app draws with. Most widgets use the symbolic
/// FLTK colors (BackGround, BackGround2, Foreground) and follow the global
/// remap; accent-colored widgets are recolored explicitly on theme change.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub window: Color,
    pub card: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_text: Color,
    pub success: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            window: Color::from_rgb(245, 245, 247),
            card: Color::from_rgb(255, 255, 255),
            text: Color::from_rgb(25, 25, 30),
            muted: Color::from_rgb(105, 105, 115),
            accent: Color::from_rgb(79, 70, 229),
            accent_text: Color::from_rgb(255, 255, 255),
            success: Color::from_rgb(22, 130, 70),
        }
    }

    pub fn dark() -> Self {
        Self {
            window: Color::from_rgb(24, 24, 28),
            card: Color::from_rgb(36, 36, 42),
            text: Color::from_rgb(225, 225, 230),
            muted: Color::from_rgb(150, 150, 160),
            accent: Color::from_rgb(129, 140, 248),
            accent_text: Color::from_rgb(20, 20, 25),
            success: Color::from_rgb(74, 200, 130),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    /// Remap the symbolic FLTK colors. Widgets colored with BackGround,
    /// BackGround2 or Foreground pick this up on the next redraw.
    pub fn apply_global(&self) {
        let (r, g, b) = self.window.to_rgb();
        app::set_background_color(r, g, b);
        let (r, g, b) = self.card.to_rgb();
        app::set_background2_color(r, g, b);
        let (r, g, b) = self.text.to_rgb();
        app::set_foreground_color(r, g, b);
    }
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &fltk::window::Window, is_dark: bool) {
    use fltk::prelude::WindowExt;
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
        let on: i32 = if is_dark { 1 } else { 0 };

        // Attribute 20 on current Windows, 19 on older Windows 10 builds
        for attr in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attr),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
