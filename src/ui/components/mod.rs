//! Reusable UI components

// Building blocks
pub mod dialogs;
pub mod multi_select;
pub mod searchable_select;
pub mod select_option;
pub mod text_input;

// Components
pub mod button;
pub mod footer;
pub mod image_component;
pub mod multi_select_assignee;
pub mod notification_dialog;
pub mod project_selector;
pub mod reason_modal;

// Component exports
pub use button::Button;
pub use footer::Footer;
pub use image_component::ImageComponent;
pub use multi_select_assignee::{assignee_style, AssigneeStyle, MultiSelectAssignee};
pub use notification_dialog::{DialogKind, NotificationDialog};
pub use project_selector::{FormData, ProjectRecord, ProjectSelector};
pub use reason_modal::ReasonModal;
pub use select_option::SelectOption;
