use feed_core::NavItem;

pub const MENU_GLYPH: &str = "⋮";
pub const PAID_BADGE: &str = "[paid]";
/// Character width the description is wrapped to.
pub const DESCRIPTION_WIDTH: usize = 48;
pub const ROW_SEPARATOR: &str = "────────────────────────────────────────────────";

pub fn nav_glyph(item: NavItem) -> &'static str {
    match item {
        NavItem::Home => "⌂",
        NavItem::Videos => "▶",
        NavItem::Create => "+",
        NavItem::Search => "⌕",
        NavItem::Profile => "☺",
    }
}
