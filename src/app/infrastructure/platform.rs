pub fn detect_system_dark_mode() -> bool {
    // Windows: Check registry for dark mode preference
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            // AppsUseLightTheme: 0 = dark mode, 1 = light mode
            if let Ok(value) = hkcu.get_value::<u32, _>("AppsUseLightTheme") {
                return value == 0;
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(theme) = gsettings_interface("gtk-theme") {
            if theme.to_lowercase().contains("dark") {
                return true;
            }
        }

        // Newer GNOME keeps the preference separately from the theme name
        if let Some(scheme) = gsettings_interface("color-scheme") {
            if scheme.contains("prefer-dark") {
                return true;
            }
        }
    }

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

/// Name of the desktop's active icon theme, if the platform exposes one.
pub fn detect_icon_theme() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        if let Some(theme) = gsettings_interface("icon-theme") {
            let theme = unquote(&theme);
            if !theme.is_empty() {
                return Some(theme.to_string());
            }
        }
    }

    None
}

#[cfg(target_os = "linux")]
fn gsettings_interface(key: &str) -> Option<String> {
    use std::process::Command;

    let output = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// gsettings prints strings as GVariant literals: `'Adwaita'`
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn unquote(value: &str) -> &str {
    let value = value.trim();
    value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .unwrap_or(value)
}
