pub mod file_card;
pub mod kind_filter_bar;
pub mod upload_form;
