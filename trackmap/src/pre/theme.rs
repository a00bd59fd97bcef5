use crate::core::surface::RgbColor;
use crate::pre::read_map_pars::ThemePars;
use anyhow::Context;

/// Theme holds the resolved semantic display colors. Drawing code only ever refers to these four
/// slots.
#[derive(Debug, Clone)]
pub struct Theme {
    pub line: RgbColor,
    pub accent: RgbColor,
    pub muted: RgbColor,
    pub background: RgbColor,
}

impl Theme {
    /// from_pars resolves the configured CSS color strings into rgb colors.
    pub fn from_pars(theme_pars: &ThemePars) -> anyhow::Result<Theme> {
        Ok(Theme {
            line: parse_color(&theme_pars.line)?,
            accent: parse_color(&theme_pars.accent)?,
            muted: parse_color(&theme_pars.muted)?,
            background: parse_color(&theme_pars.background)?,
        })
    }
}

impl Default for Theme {
    /// The default colors match the palette shipped in the example parameter file.
    fn default() -> Self {
        Theme {
            line: RgbColor {
                r: 138,
                g: 212,
                b: 255,
            },
            accent: RgbColor {
                r: 246,
                g: 189,
                b: 96,
            },
            muted: RgbColor {
                r: 150,
                g: 166,
                b: 180,
            },
            background: RgbColor {
                r: 16,
                g: 20,
                b: 24,
            },
        }
    }
}

/// parse_color converts a CSS color string to an rgb color.
fn parse_color(raw: &str) -> anyhow::Result<RgbColor> {
    let tmp_color = raw
        .parse::<css_color_parser::Color>()
        .context(format!("Could not parse theme color {}!", raw))?;

    Ok(RgbColor {
        r: tmp_color.r,
        g: tmp_color.g,
        b: tmp_color.b,
    })
}
