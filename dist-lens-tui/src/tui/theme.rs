use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub highlight: Color,
    pub bar: Color,
    pub axis: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            highlight: Color::Yellow,
            bar: Color::Cyan,
            axis: Color::DarkGray,
            error: Color::Red,
            success: Color::LightGreen,
        }
    }
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            highlight: Color::Blue,
            bar: Color::DarkGray,
            axis: Color::Gray,
            error: Color::Red,
            success: Color::Green,
        }
    }
    pub fn nord() -> Self {
        Self {
            fg: Color::Rgb(216, 222, 233),
            highlight: Color::Rgb(136, 192, 208),
            bar: Color::Rgb(129, 161, 193),
            axis: Color::Rgb(76, 86, 106),
            error: Color::Rgb(191, 97, 106),
            success: Color::Rgb(163, 190, 140),
        }
    }
    pub fn catppuccin() -> Self {
        Self {
            fg: Color::Rgb(205, 214, 244),
            highlight: Color::Rgb(137, 180, 250),
            bar: Color::Rgb(137, 220, 235),
            axis: Color::Rgb(88, 91, 112),
            error: Color::Rgb(243, 139, 168),
            success: Color::Rgb(166, 227, 161),
        }
    }
    pub fn colorblind() -> Self {
        Self {
            fg: Color::White,
            highlight: Color::Yellow,
            bar: Color::Cyan,
            axis: Color::DarkGray,
            error: Color::Rgb(0xFF, 0x8C, 0x00), // orange instead of red
            success: Color::Rgb(0x00, 0x80, 0xFF), // blue instead of green
        }
    }
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "nord" => Self::nord(),
            "catppuccin" => Self::catppuccin(),
            "colorblind" => Self::colorblind(),
            _ => Self::dark(),
        }
    }
}
