use crossterm::style::Color as TerminalColor;
use macroquad::prelude::Color;
use strum::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Palette {
    Black,
    White,
    Red,
}

impl Palette {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Palette::Black => (0, 0, 0),
            Palette::White => (255, 255, 255),
            Palette::Red => (255, 0, 0),
        }
    }

    pub fn color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::from_rgba(r, g, b, 255)
    }

    pub fn terminal_color(self) -> TerminalColor {
        match self {
            Palette::Black => TerminalColor::Black,
            Palette::White => TerminalColor::White,
            Palette::Red => TerminalColor::Red,
        }
    }
}
