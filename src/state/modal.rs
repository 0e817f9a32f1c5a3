use crate::api::Id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

/// The four dialog variants, each carrying only what it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalKind {
    Alert,
    Confirm,
    Input { label: String, placeholder: String },
    Select { label: String, options: Vec<SelectOption> },
}

/// What to run once the operator confirms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    Dismiss,
    Quit,
    SetSession,
    JoinEvent(Id),
    ArchiveEvent(Id),
    RelinkEvent(Id),
    CreateCustomEvent,
    PickConfigValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub message: String,
    pub kind: ModalKind,
    pub confirm_label: String,
    pub cancel_label: String,
    pub action: ModalAction,
    pub default_value: String,
    value: String,
    selected: usize,
}

impl Modal {
    fn new(title: impl Into<String>, message: impl Into<String>, kind: ModalKind, action: ModalAction) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            confirm_label: "OK".to_string(),
            cancel_label: "Cancel".to_string(),
            action,
            default_value: String::new(),
            value: String::new(),
            selected: 0,
        }
    }

    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, ModalKind::Alert, ModalAction::Dismiss)
    }

    pub fn confirm(title: impl Into<String>, message: impl Into<String>, action: ModalAction) -> Self {
        Self::new(title, message, ModalKind::Confirm, action)
    }

    pub fn input(
        title: impl Into<String>,
        message: impl Into<String>,
        label: impl Into<String>,
        placeholder: impl Into<String>,
        default_value: impl Into<String>,
        action: ModalAction,
    ) -> Self {
        let kind = ModalKind::Input { label: label.into(), placeholder: placeholder.into() };
        Self::new(title, message, kind, action).with_default(default_value)
    }

    pub fn select(
        title: impl Into<String>,
        message: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
        default_value: impl Into<String>,
        action: ModalAction,
    ) -> Self {
        let kind = ModalKind::Select { label: label.into(), options };
        Self::new(title, message, kind, action).with_default(default_value)
    }

    pub fn with_labels(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.confirm_label = confirm.into();
        self.cancel_label = cancel.into();
        self
    }

    fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    /// Back to the default value; run every time the dialog opens.
    fn reset(&mut self) {
        self.value = self.default_value.clone();
        self.selected = match &self.kind {
            ModalKind::Select { options, .. } => options
                .iter()
                .position(|o| o.value == self.default_value)
                .unwrap_or(0),
            _ => 0,
        };
        if let ModalKind::Select { options, .. } = &self.kind {
            if let Some(option) = options.get(self.selected) {
                self.value = option.value.clone();
            }
        }
    }

    pub fn message_lines(&self) -> Vec<&str> {
        self.message.split('\n').collect()
    }

    pub fn can_cancel(&self) -> bool {
        !matches!(self.kind, ModalKind::Alert)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn push_char(&mut self, c: char) {
        if matches!(self.kind, ModalKind::Input { .. }) {
            self.value.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if matches!(self.kind, ModalKind::Input { .. }) {
            self.value.pop();
        }
    }

    pub fn select_offset(&mut self, delta: isize) {
        if let ModalKind::Select { options, .. } = &self.kind {
            if options.is_empty() {
                return;
            }
            let len = options.len() as isize;
            let next = (self.selected as isize + delta).rem_euclid(len) as usize;
            self.selected = next;
            self.value = options[next].value.clone();
        }
    }

    /// Value handed to the confirm action: the text or picked option for
    /// input/select dialogs, nothing for alert/confirm.
    fn confirmed_value(&self) -> Option<String> {
        match self.kind {
            ModalKind::Input { .. } | ModalKind::Select { .. } => Some(self.value.clone()),
            ModalKind::Alert | ModalKind::Confirm => None,
        }
    }
}

/// The single dialog slot shared by every section.
#[derive(Debug, Default)]
pub struct ModalState {
    current: Option<Modal>,
}

impl ModalState {
    pub fn open(&mut self, mut modal: Modal) {
        modal.reset();
        self.current = Some(modal);
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Modal> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut Modal> {
        self.current.as_mut()
    }

    /// Closes the dialog and returns its action with the entered value.
    pub fn confirm(&mut self) -> Option<(ModalAction, Option<String>)> {
        let modal = self.current.take()?;
        let value = modal.confirmed_value();
        Some((modal.action, value))
    }

    /// Closes the dialog without running anything. Alerts cannot be cancelled.
    pub fn cancel(&mut self) -> bool {
        match &self.current {
            Some(modal) if modal.can_cancel() => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> Modal {
        Modal::select(
            "Relink",
            "Pick a channel",
            "Channel",
            vec![SelectOption::new("general (1)", "1"), SelectOption::new("ctf (2)", "2")],
            "2",
            ModalAction::RelinkEvent(Id::Num(9)),
        )
    }

    #[test]
    fn test_message_splits_on_newlines() {
        let modal = Modal::alert("Failed", "bad value\n{\n  \"x\": 1\n}");
        assert_eq!(modal.message_lines().len(), 4);
    }

    #[test]
    fn test_alert_cannot_be_cancelled() {
        let mut state = ModalState::default();
        state.open(Modal::alert("Success", "Config updated"));
        assert!(!state.cancel());
        assert!(state.is_open());
        assert_eq!(state.confirm(), Some((ModalAction::Dismiss, None)));
        assert!(!state.is_open());
    }

    #[test]
    fn test_confirm_returns_no_value() {
        let mut state = ModalState::default();
        state.open(Modal::confirm("Join", "Join?", ModalAction::JoinEvent(Id::Num(1))));
        assert_eq!(state.confirm(), Some((ModalAction::JoinEvent(Id::Num(1)), None)));
    }

    #[test]
    fn test_select_starts_on_default_and_wraps() {
        let mut state = ModalState::default();
        state.open(picker());
        let modal = state.current_mut().unwrap();
        assert_eq!(modal.value(), "2");
        modal.select_offset(1);
        assert_eq!(modal.value(), "1");
        modal.select_offset(-1);
        assert_eq!(modal.selected_index(), 1);
        assert_eq!(state.confirm().unwrap().1.as_deref(), Some("2"));
    }

    #[test]
    fn test_value_resets_when_reopened() {
        let mut state = ModalState::default();
        let modal = Modal::input("New", "Title?", "Title", "", "draft", ModalAction::CreateCustomEvent);
        state.open(modal.clone());
        state.current_mut().unwrap().push_char('!');
        assert_eq!(state.current().unwrap().value(), "draft!");
        assert!(state.cancel());

        state.open(modal);
        assert_eq!(state.current().unwrap().value(), "draft");
    }

    #[test]
    fn test_cancel_discards_action() {
        let mut state = ModalState::default();
        state.open(picker());
        assert!(state.cancel());
        assert_eq!(state.confirm(), None);
    }
}
