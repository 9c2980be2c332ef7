pub mod home_page;
pub mod library_page;
pub mod upload_page;
pub mod view_worksheet_page;
