pub mod contact_form;
pub mod footer;
pub mod nav;
pub mod progress_bar;
pub mod reveal;
