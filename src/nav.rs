use serde::Serialize;

/// Id of the element that owns the features submenu.
pub const FEATURES_MENU_ID: &str = "featuresMenu";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavGroup {
    Top,
    Features,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub entry_id: String,
    pub section_id: String,
    pub label: String,
    pub group: NavGroup,
}

/// Declared sections plus the entry -> section mapping used by the sidebar.
#[derive(Debug, Clone)]
pub struct NavMap {
    sections: Vec<String>,
    entries: Vec<NavEntry>,
}

impl NavMap {
    pub fn new(sections: Vec<String>, entries: Vec<NavEntry>) -> Self {
        Self { sections, entries }
    }

    pub fn standard() -> Self {
        const LAYOUT: [(&str, &str, NavGroup); 6] = [
            ("home", "Home", NavGroup::Top),
            ("classifier", "AI Classifier", NavGroup::Features),
            ("guide", "Recycling Guide", NavGroup::Features),
            ("soil", "Soil Analysis", NavGroup::Features),
            ("footprint", "Carbon Footprint", NavGroup::Features),
            ("nearby", "Nearby Centers", NavGroup::Features),
        ];

        let sections = LAYOUT.iter().map(|(id, _, _)| id.to_string()).collect();
        let entries = LAYOUT
            .iter()
            .map(|(id, label, group)| NavEntry {
                entry_id: format!("nav-{id}"),
                section_id: id.to_string(),
                label: label.to_string(),
                group: *group,
            })
            .collect();
        Self::new(sections, entries)
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn has_section(&self, section_id: &str) -> bool {
        self.sections.iter().any(|id| id == section_id)
    }

    /// First declared entry pointing at `section_id`.
    pub fn entry_for(&self, section_id: &str) -> Option<&NavEntry> {
        self.entries
            .iter()
            .find(|entry| entry.section_id == section_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Container,
    Descendant,
}

impl ClickTarget {
    pub fn from_element_id(id: &str) -> Self {
        if id == FEATURES_MENU_ID {
            Self::Container
        } else {
            Self::Descendant
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UiState {
    pub active_section: Option<String>,
    pub sidebar_open: bool,
    pub submenu_open: bool,
}

impl UiState {
    /// Starts on the first declared section with sidebar and submenu closed.
    pub fn initial(nav: &NavMap) -> Self {
        Self {
            active_section: nav.sections().first().cloned(),
            ..Self::default()
        }
    }

    pub fn toggle_sidebar(self) -> Self {
        Self {
            sidebar_open: !self.sidebar_open,
            ..self
        }
    }

    pub fn toggle_features_submenu(self, target: ClickTarget) -> Self {
        match target {
            ClickTarget::Container => Self {
                submenu_open: !self.submenu_open,
                ..self
            },
            ClickTarget::Descendant => self,
        }
    }

    /// Undeclared ids clear the active section instead of failing.
    pub fn show_section(self, nav: &NavMap, section_id: &str) -> Self {
        let active_section = nav
            .has_section(section_id)
            .then(|| section_id.to_string());
        Self {
            active_section,
            ..self
        }
    }

    pub fn is_section_active(&self, section_id: &str) -> bool {
        self.active_section.as_deref() == Some(section_id)
    }

    pub fn active_entry<'a>(&self, nav: &'a NavMap) -> Option<&'a NavEntry> {
        self.active_section
            .as_deref()
            .and_then(|section| nav.entry_for(section))
    }

    pub fn is_entry_active(&self, nav: &NavMap, entry_id: &str) -> bool {
        self.active_entry(nav)
            .is_some_and(|entry| entry.entry_id == entry_id)
    }
}
