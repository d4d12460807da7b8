use crossterm::style::Color;

/// Design tokens for the menutree CLI.
pub mod colors {
    use super::Color;

    /// Selected item
    pub const SELECTED: Color = Color::Cyan;
    /// Branch markers
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";
    pub const LEAF: &str = " ";
    pub const POINTER: &str = "←";
}

pub mod icons_ascii {
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";
    pub const LEAF: &str = "   ";
    pub const POINTER: &str = "<";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub expand: &'static str,
    pub collapse: &'static str,
    pub leaf: &'static str,
    pub pointer: &'static str,
}

impl Icons {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                expand: icons::EXPAND,
                collapse: icons::COLLAPSE,
                leaf: icons::LEAF,
                pointer: icons::POINTER,
            }
        } else {
            Self {
                expand: icons_ascii::EXPAND,
                collapse: icons_ascii::COLLAPSE,
                leaf: icons_ascii::LEAF,
                pointer: icons_ascii::POINTER,
            }
        }
    }
}
