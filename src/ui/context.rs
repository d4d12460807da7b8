use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme::Icons;
use menutree::config::{ColorMode, Config};
use menutree::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
    pub indent: usize,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, cli_ascii: bool, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, cli_color, cli_ascii, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        cli_ascii: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = !cli_ascii && config.render.unicode && caps.supports_unicode;

        let color = !json
            && match cli_color {
                Some(ColorWhen::Never) => false,
                Some(ColorWhen::Always) => true,
                Some(ColorWhen::Auto) | None => match config.render.color {
                    ColorMode::Never => false,
                    ColorMode::Always => true,
                    ColorMode::Auto => caps.supports_color && !caps.is_ci,
                },
            };

        Self {
            json,
            color,
            unicode,
            indent: config.render.indent,
        }
    }

    pub fn icons(&self) -> Icons {
        Icons::new(self.unicode)
    }
}
