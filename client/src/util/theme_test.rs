use super::*;

#[test]
fn css_variables_declares_primary_range() {
    let css = css_variables();
    assert!(css.starts_with(":root {"));
    assert!(css.contains("--color-primary: #FF0048;"));
    assert!(css.contains("--color-primary-light: #FF5B72;"));
    assert!(css.contains("--color-primary-dark: #C9002C;"));
}

#[test]
fn solid_shades_have_no_light_or_dark_variant() {
    let css = css_variables();
    assert!(css.contains("--color-background: #dddddd;"));
    assert!(!css.contains("--color-error-light"));
}

#[test]
fn firing_color_matches_error_shade() {
    let error = PALETTE.iter().find(|(name, _)| *name == "error").map(|(_, s)| s.main);
    assert_eq!(error, Some(FIRING_COLOR));
}
