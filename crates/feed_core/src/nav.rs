/// Entries of the bottom navigation bar, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItem {
    Home,
    Videos,
    Create,
    Search,
    Profile,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::Home,
        NavItem::Videos,
        NavItem::Create,
        NavItem::Search,
        NavItem::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Videos => "Videos",
            NavItem::Create => "Create",
            NavItem::Search => "Search",
            NavItem::Profile => "Profile",
        }
    }
}
