//! Host system color-scheme probe, consulted only when no theme choice has
//! been persisted yet.

pub fn detect_system_dark_mode() -> bool {
    // Windows: AppsUseLightTheme registry value (0 = dark, 1 = light)
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            if let Ok(value) = hkcu.get_value::<u32, _>("AppsUseLightTheme") {
                return value == 0;
            }
        }
    }

    // Linux: ask gsettings, covering both the GTK theme name and the
    // freedesktop color-scheme key
    #[cfg(target_os = "linux")]
    {
        if gsettings_contains(&["get", "org.gnome.desktop.interface", "gtk-theme"], "dark") {
            return true;
        }
        if gsettings_contains(
            &["get", "org.gnome.desktop.interface", "color-scheme"],
            "prefer-dark",
        ) {
            return true;
        }
    }

    // macOS: AppleInterfaceStyle is only set when dark mode is on
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success() {
                let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
                if style.contains("dark") {
                    return true;
                }
            }
        }
    }

    // Default to light mode if detection fails
    false
}

#[cfg(target_os = "linux")]
fn gsettings_contains(args: &[&str], needle: &str) -> bool {
    use std::process::Command;

    Command::new("gsettings")
        .args(args)
        .output()
        .map(|output| String::from_utf8_lossy(&output.stdout).to_lowercase().contains(needle))
        .unwrap_or(false)
}
