//! In-page navigation targets and the collapsible mobile menu.

/// Sections reachable from the navigation bar, in display order.
///
/// The labels and their `#fragment` targets are matched by section ids in the
/// page markup and must not change.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::Display, strum::IntoStaticStr)]
pub enum NavAnchor {
    Dashboard,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl NavAnchor {
    pub const ALL: [NavAnchor; 6] = [
        NavAnchor::Dashboard,
        NavAnchor::About,
        NavAnchor::Skills,
        NavAnchor::Experience,
        NavAnchor::Projects,
        NavAnchor::Contact,
    ];

    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Id of the section element this anchor scrolls to.
    pub fn section_id(self) -> &'static str {
        match self {
            NavAnchor::Dashboard => "top",
            NavAnchor::About => "about",
            NavAnchor::Skills => "skills",
            NavAnchor::Experience => "experience",
            NavAnchor::Projects => "projects",
            NavAnchor::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.section_id())
    }
}

pub fn toggle(state: bool) -> bool {
    !state
}

pub fn close() -> bool {
    false
}

/// Whether the mobile menu is expanded. Never persisted; starts closed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MenuState(bool);

impl MenuState {
    pub fn is_open(self) -> bool {
        self.0
    }

    pub fn toggle(&mut self) {
        self.0 = toggle(self.0);
    }

    pub fn close(&mut self) {
        self.0 = close();
    }

    /// Following any navigation link collapses the menu.
    pub fn select(&mut self, anchor: NavAnchor) -> NavAnchor {
        self.close();
        anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_negates() {
        assert!(!toggle(true));
        assert!(toggle(false));

        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn close_is_unconditional() {
        assert!(!close());
        let mut menu = MenuState::default();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn selecting_any_anchor_closes() {
        for anchor in NavAnchor::ALL {
            let mut menu = MenuState::default();
            menu.toggle();
            assert_eq!(menu.select(anchor), anchor);
            assert!(!menu.is_open(), "{anchor} left the menu open");
        }
    }

    #[test]
    fn anchor_order_and_targets() {
        let pairs: Vec<(&str, String)> = NavAnchor::ALL
            .iter()
            .map(|a| (a.label(), a.href()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Dashboard", "#top".to_owned()),
                ("About", "#about".to_owned()),
                ("Skills", "#skills".to_owned()),
                ("Experience", "#experience".to_owned()),
                ("Projects", "#projects".to_owned()),
                ("Contact", "#contact".to_owned()),
            ]
        );
    }

    #[test]
    fn non_dashboard_ids_are_lowercase_labels() {
        for anchor in &NavAnchor::ALL[1..] {
            assert_eq!(anchor.section_id(), anchor.label().to_lowercase());
        }
    }
}
