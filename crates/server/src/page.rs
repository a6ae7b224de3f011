use specled_core::ControlForm;

const PANEL_TEMPLATE: &str = include_str!("static/panel.html");

/// Render the control panel with slider defaults reflecting the submitted
/// form. Pure templating; the page never reads device state back, it only
/// echoes the last submission.
pub fn render_panel(form: &ControlForm) -> String {
    PANEL_TEMPLATE
        .replace("{{gain}}", form.gain())
        .replace("{{bright}}", form.brightness())
}
