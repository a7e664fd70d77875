use crate::guide::search_material;
use crate::models::{FootprintForm, NearbyForm, PageSnapshot, SoilForm};
use crate::nav::{ClickTarget, NavMap, UiState};
use crate::panels::Panel;
use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Classifier,
    Soil,
    Footprint,
    Nearby,
}

impl PanelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classifier => "classifier",
            Self::Soil => "soil",
            Self::Footprint => "footprint",
            Self::Nearby => "nearby",
        }
    }
}

/// Everything the portal page shows, rendered fresh on every request.
#[derive(Debug, Clone)]
pub struct Page {
    nav: NavMap,
    pub ui: UiState,
    pub guide_query: String,
    pub guide_list: Vec<String>,
    pub classifier: Panel,
    pub soil: Panel,
    pub footprint: Panel,
    pub nearby: Panel,
    pub soil_form: SoilForm,
    pub footprint_form: FootprintForm,
    pub nearby_form: NearbyForm,
}

impl Page {
    pub fn new(nav: NavMap) -> Self {
        Self {
            ui: UiState::initial(&nav),
            nav,
            guide_query: String::new(),
            guide_list: Vec::new(),
            classifier: Panel::default(),
            soil: Panel::default(),
            footprint: Panel::default(),
            nearby: Panel::default(),
            soil_form: SoilForm::default(),
            footprint_form: FootprintForm::default(),
            nearby_form: NearbyForm::default(),
        }
    }

    pub fn nav(&self) -> &NavMap {
        &self.nav
    }

    pub fn panel_mut(&mut self, kind: PanelKind) -> &mut Panel {
        match kind {
            PanelKind::Classifier => &mut self.classifier,
            PanelKind::Soil => &mut self.soil,
            PanelKind::Footprint => &mut self.footprint,
            PanelKind::Nearby => &mut self.nearby,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.ui = mem::take(&mut self.ui).toggle_sidebar();
    }

    pub fn toggle_features_submenu(&mut self, target_id: &str) {
        let target = ClickTarget::from_element_id(target_id);
        self.ui = mem::take(&mut self.ui).toggle_features_submenu(target);
    }

    pub fn show_section(&mut self, section_id: &str) {
        self.ui = mem::take(&mut self.ui).show_section(&self.nav, section_id);
    }

    pub fn search_material(&mut self, query: &str) {
        self.guide_query = query.to_string();
        self.guide_list = search_material(query);
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            ui: self.ui.clone(),
            active_entry: self
                .ui
                .active_entry(&self.nav)
                .map(|entry| entry.entry_id.clone()),
            entries: self.nav.entries().to_vec(),
            guide_query: self.guide_query.clone(),
            guide_list: self.guide_list.clone(),
            result: self.classifier.output().clone(),
            soil_result: self.soil.output().clone(),
            footprint_result: self.footprint.output().clone(),
            nearby_result: self.nearby.output().clone(),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(NavMap::standard())
    }
}
