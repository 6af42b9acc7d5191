pub mod appeal_form;
pub mod confirm_dialog;
pub mod message_dialog;
pub mod processing_modal;
pub mod results_view;
pub mod step_indicator;
