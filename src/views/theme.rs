/// Dark palette and typography shared by all views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background_default: &'static str,
    pub background_paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub font_family: &'static str,
    /// Surface of the landing page.
    pub page_background: &'static str,
    pub page_foreground: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            primary: "#90caf9",
            secondary: "#f48fb1",
            background_default: "#121212",
            background_paper: "#1e1e1e",
            text_primary: "#ffffff",
            text_secondary: "#b0b0c5",
            font_family: "Roboto, Arial, sans-serif",
            page_background: "#333",
            page_foreground: "#c1c1c1",
        }
    }
}
