pub mod url_param;
pub mod viewer_control;
