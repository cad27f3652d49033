//! Seam to the embedded rendering widget.

/// Operations the browser core needs from a rendering widget. One instance
/// per tab. Page loading, history and script execution live behind this
/// trait; the widget reports back through `Browser::on_url_changed`,
/// `Browser::on_load_finished` and `Browser::on_title_changed`.
pub trait WebView {
    /// Load an HTML document as if it had been fetched from `base_url`.
    fn load_html(&mut self, html: &str, base_url: &str);

    /// Navigate to an external address.
    fn navigate(&mut self, url: &str);

    /// Run a script in the currently loaded document.
    fn run_script(&mut self, script: &str);

    fn back(&mut self);

    fn forward(&mut self);

    fn reload(&mut self);

    /// Show a transient message to the user (status bar, toast, dialog).
    fn show_notice(&mut self, text: &str);
}
