use colored::{Color, ColoredString, Colorize};

/// Palette for terminal output. Disabled schemes return the text unstyled.
pub struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        Self { enabled: use_colors }
    }

    fn paint(&self, text: &str, color: Color) -> ColoredString {
        if self.enabled {
            text.color(color)
        } else {
            text.normal()
        }
    }

    pub fn artist_name(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Yellow)
    }

    pub fn weight(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Cyan)
    }

    pub fn success(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Green)
    }

    pub fn warning(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Magenta)
    }

    pub fn error(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Red)
    }

    /// Position of an edge in the heaviest-collaborations list
    pub fn rank(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Blue)
    }

    pub fn number(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Green)
    }

    pub fn heading(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Blue).bold()
    }
}
