//! Dashboard color themes.
//!
//! Daytime gets the light palette, night (or an unresolvable moment) the
//! dark one.

use skycast_weather::Moment;

/// Color palette for the dashboard card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background_color: &'static str,
    pub foreground_color: &'static str,
    pub box_shadow: &'static str,
    pub title_color: &'static str,
    pub temperature_color: &'static str,
    pub text_color: &'static str,
}

pub const LIGHT: Theme = Theme {
    name: "light",
    background_color: "#ededed",
    foreground_color: "#f9f9f9",
    box_shadow: "0 1px 3px 0 #999999",
    title_color: "#212121",
    temperature_color: "#757575",
    text_color: "#828282",
};

pub const DARK: Theme = Theme {
    name: "dark",
    background_color: "#1F2022",
    foreground_color: "#121416",
    box_shadow: "0 1px 4px 0 rgba(12, 12, 13, 0.2), 0 0 0 1px rgba(0, 0, 0, 0.15)",
    title_color: "#f9f9fa",
    temperature_color: "#dddddd",
    text_color: "#cccccc",
};

impl Theme {
    /// Pick the palette for the current moment.
    pub fn for_moment(moment: Option<Moment>) -> &'static Theme {
        match moment {
            Some(Moment::Day) => &LIGHT,
            Some(Moment::Night) | None => &DARK,
        }
    }
}
