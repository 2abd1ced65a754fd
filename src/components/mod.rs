pub mod footer;
pub mod form_field;
pub mod layout;
pub mod sport_picker;
