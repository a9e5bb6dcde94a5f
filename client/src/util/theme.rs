//! Brand palette exposed as CSS custom properties.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub main: &'static str,
    pub light: Option<&'static str>,
    pub dark: Option<&'static str>,
}

impl Shade {
    const fn solid(main: &'static str) -> Self {
        Self { main, light: None, dark: None }
    }

    const fn ranged(main: &'static str, light: &'static str, dark: &'static str) -> Self {
        Self { main, light: Some(light), dark: Some(dark) }
    }
}

pub const PALETTE: [(&str, Shade); 8] = [
    ("primary", Shade::ranged("#FF0048", "#FF5B72", "#C9002C")),
    ("secondary", Shade::ranged("#FFB900", "#FFE259", "#C78B00")),
    ("surface", Shade::solid("#F7F7F7")),
    ("error", Shade::solid("#D32F2F")),
    ("warning", Shade::solid("#FFC107")),
    ("info", Shade::solid("#1976D2")),
    ("success", Shade::solid("#4CAF50")),
    ("background", Shade::solid("#dddddd")),
];

/// Color used for rows of firing alerts.
pub const FIRING_COLOR: &str = "#D32F2F";

/// `:root` rule declaring `--color-<name>[-light|-dark]` for every palette entry.
pub fn css_variables() -> String {
    let mut css = String::from(":root {\n");
    for (name, shade) in PALETTE {
        css.push_str(&format!("  --color-{name}: {};\n", shade.main));
        if let Some(light) = shade.light {
            css.push_str(&format!("  --color-{name}-light: {light};\n"));
        }
        if let Some(dark) = shade.dark {
            css.push_str(&format!("  --color-{name}-dark: {dark};\n"));
        }
    }
    css.push('}');
    css
}
