//! A page widget that renders nothing and remembers what it was asked to do.

use navi_core::browser::WebView;

/// One request the browser core made of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Load { base_url: String, html: String },
    Navigate(String),
    Script(String),
    Notice(String),
    Back,
    Forward,
    Reload,
}

#[derive(Debug, Default)]
pub struct HeadlessView {
    events: Vec<ViewEvent>,
}

impl HeadlessView {
    /// Drain the recorded events.
    pub fn take_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }
}

impl WebView for HeadlessView {
    fn load_html(&mut self, html: &str, base_url: &str) {
        self.events.push(ViewEvent::Load {
            base_url: base_url.to_string(),
            html: html.to_string(),
        });
    }

    fn navigate(&mut self, url: &str) {
        self.events.push(ViewEvent::Navigate(url.to_string()));
    }

    fn run_script(&mut self, script: &str) {
        self.events.push(ViewEvent::Script(script.to_string()));
    }

    fn back(&mut self) {
        self.events.push(ViewEvent::Back);
    }

    fn forward(&mut self) {
        self.events.push(ViewEvent::Forward);
    }

    fn reload(&mut self) {
        self.events.push(ViewEvent::Reload);
    }

    fn show_notice(&mut self, text: &str) {
        self.events.push(ViewEvent::Notice(text.to_string()));
    }
}
