use ratatui::style::Color;

/// Brightness band of a palette shade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    /// 50..=400
    Light,
    /// 500..=600, or no shade given
    Base,
    /// 700..=900
    Dark,
}

impl Tone {
    fn of(shade: Option<u16>) -> Self {
        match shade {
            Some(s) if s < 500 => Self::Light,
            Some(s) if s >= 700 => Self::Dark,
            _ => Self::Base,
        }
    }
}

/// Convert a utility-class palette name and shade to a terminal color.
///
/// Shades follow the 50..=900 scale of the class vocabulary. Light shades map
/// onto the terminal's light variants, base shades onto the named colors and
/// dark shades onto RGB values, so a `focus:` shade two steps darker always
/// differs from its base. Returns `None` for unknown palette names.
#[must_use]
pub fn palette_color(name: &str, shade: Option<u16>) -> Option<Color> {
    let tone = Tone::of(shade);
    let color = match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "white" => Color::White,
        "gray" | "grey" | "slate" => pick(tone, Color::Gray, Color::DarkGray, Color::Rgb(55, 65, 81)),
        "red" => pick(tone, Color::LightRed, Color::Red, Color::Rgb(153, 27, 27)),
        "green" | "emerald" => pick(tone, Color::LightGreen, Color::Green, Color::Rgb(22, 101, 52)),
        "yellow" | "amber" => pick(tone, Color::LightYellow, Color::Yellow, Color::Rgb(133, 77, 14)),
        "blue" | "indigo" => pick(tone, Color::LightBlue, Color::Blue, Color::Rgb(30, 64, 175)),
        "cyan" | "teal" | "sky" => pick(tone, Color::LightCyan, Color::Cyan, Color::Rgb(21, 94, 117)),
        "magenta" | "purple" | "pink" | "violet" => {
            pick(tone, Color::LightMagenta, Color::Magenta, Color::Rgb(107, 33, 168))
        }
        "orange" => pick(tone, Color::Rgb(251, 146, 60), Color::Rgb(234, 88, 12), Color::Rgb(154, 52, 18)),
        _ => return None,
    };
    Some(color)
}

fn pick(tone: Tone, light: Color, base: Color, dark: Color) -> Color {
    match tone {
        Tone::Light => light,
        Tone::Base => base,
        Tone::Dark => dark,
    }
}
