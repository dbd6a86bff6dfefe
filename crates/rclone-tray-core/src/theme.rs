/// Light or dark color scheme, recomputed on every icon resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light scheme; needs the dark-on-light icon variant.
    Light,
    /// Dark scheme; the base icon. Also the fallback for any probe failure.
    Dark,
}

impl ThemeMode {
    /// Interpret a theme string reported by the host.
    ///
    /// Only an explicit `"light"` selects [`ThemeMode::Light`]; empty, unknown
    /// and `"dark"` values all map to [`ThemeMode::Dark`].
    pub fn from_host_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("light") {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Lowercase name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}
