use ratatui::style::{Color, Modifier, Style};

/// Nord palette, trimmed to what the picker draws.
pub struct NordTheme {
    // Polar Night
    pub nord0: Color, // #2E3440 background
    pub nord1: Color, // #3B4252 secondary background, selected row
    pub nord3: Color, // #4C566A muted text, hints

    // Snow Storm
    pub nord4: Color, // #D8DEE9 text
    pub nord6: Color, // #ECEFF4 cursor

    // Frost
    pub nord8: Color,  // #88C0D0 prompt, selected marker
    pub nord10: Color, // #5E81AC cursor block

    // Aurora
    pub nord13: Color, // #EBCB8B matched text, key names
    pub nord14: Color, // #A3BE8C dropdown border
}

impl Default for NordTheme {
    fn default() -> Self {
        Self {
            nord0: Color::Rgb(46, 52, 64),
            nord1: Color::Rgb(59, 66, 82),
            nord3: Color::Rgb(76, 86, 106),
            nord4: Color::Rgb(216, 222, 233),
            nord6: Color::Rgb(236, 239, 244),
            nord8: Color::Rgb(136, 192, 208),
            nord10: Color::Rgb(94, 129, 172),
            nord13: Color::Rgb(235, 203, 139),
            nord14: Color::Rgb(163, 190, 140),
        }
    }
}

impl NordTheme {
    // Semantic aliases
    pub fn bg(&self) -> Color {
        self.nord0
    }
    pub fn bg_secondary(&self) -> Color {
        self.nord1
    }
    pub fn muted(&self) -> Color {
        self.nord3
    }
    pub fn fg(&self) -> Color {
        self.nord4
    }
    pub fn fg_white(&self) -> Color {
        self.nord6
    }
    pub fn frost_ice(&self) -> Color {
        self.nord8
    }
    pub fn frost_dark(&self) -> Color {
        self.nord10
    }
    pub fn yellow(&self) -> Color {
        self.nord13
    }
    pub fn green(&self) -> Color {
        self.nord14
    }

    // Logic aliases
    pub fn cursor_style(&self) -> Style {
        Style::default().bg(self.frost_dark()).fg(self.fg_white())
    }
    pub fn match_style(&self) -> Style {
        Style::default().fg(self.yellow()).add_modifier(Modifier::BOLD)
    }
    pub fn selected_row_style(&self) -> Style {
        Style::default().bg(self.bg_secondary()).fg(self.fg_white())
    }
    pub fn dropdown_border(&self) -> Color {
        self.green()
    }
}
