use crate::api::Id;

/// Cross-section selection: which event and which user are "open". Owned by
/// the app above all sections so a jump from one section survives the switch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Navigation {
    selected_event_id: Option<Id>,
    selected_user_id: Option<Id>,
}

impl Navigation {
    pub fn selected_event_id(&self) -> Option<&Id> {
        self.selected_event_id.as_ref()
    }

    pub fn set_selected_event_id(&mut self, id: Option<Id>) {
        self.selected_event_id = id;
    }

    pub fn selected_user_id(&self) -> Option<&Id> {
        self.selected_user_id.as_ref()
    }

    pub fn set_selected_user_id(&mut self, id: Option<Id>) {
        self.selected_user_id = id;
    }

    pub fn clear(&mut self) {
        self.selected_event_id = None;
        self.selected_user_id = None;
    }
}
