pub mod config;
pub mod events;
pub mod me;
pub mod modal;
pub mod navigation;
pub mod session;
pub mod ui;
pub mod users;

pub use config::{ConfigEntry, ConfigKind, ConfigState};
pub use events::{EventAction, EventsFocus, EventsState, LoadPhase};
pub use me::{MeFocus, MeState};
pub use modal::{Modal, ModalAction, ModalKind, ModalState, SelectOption};
pub use navigation::Navigation;
pub use session::{Route, SessionState};
pub use ui::{Section, UiState};
pub use users::{UsersFocus, UsersState};
