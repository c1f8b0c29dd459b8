use iced::widget::svg;

pub(crate) const HOUSE: &[u8] = include_bytes!("../assets/svg/house.svg");
pub(crate) const GEAR: &[u8] = include_bytes!("../assets/svg/gear.svg");
pub(crate) const PERSON: &[u8] = include_bytes!("../assets/svg/person.svg");
pub(crate) const STAR: &[u8] = include_bytes!("../assets/svg/star.svg");
pub(crate) const BELL: &[u8] = include_bytes!("../assets/svg/bell.svg");
pub(crate) const INFO: &[u8] = include_bytes!("../assets/svg/info.svg");

/// Built-in icon bytes for a symbolic icon name.
pub(crate) fn builtin(name: &str) -> Option<&'static [u8]> {
    match name {
        "house" | "home" => Some(HOUSE),
        "gear" | "settings" => Some(GEAR),
        "person" | "profile" => Some(PERSON),
        "star" => Some(STAR),
        "bell" => Some(BELL),
        "info" | "info.circle" => Some(INFO),
        _ => None,
    }
}

/// Resolve an icon name against the built-in set.
pub fn builtin_icon(name: &str) -> Option<svg::Handle> {
    builtin(name).map(svg::Handle::from_memory)
}
