use common::file_library::FileKind;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::library_page::LibraryPage;
use crate::pages::upload_page::UploadPage;
use crate::pages::view_worksheet_page::ViewWorksheetPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/library/:kind_filter")]
    LibraryPage { kind_filter: UrlParam<Option<FileKind>> },


    #[route("/upload")]
    UploadPage {},


    #[route("/worksheet/:file_id")]
    ViewWorksheetPage { file_id: String },

}

impl Route {
    pub fn library_page(kind_filter: Option<FileKind>) -> Self {
        Self::LibraryPage { kind_filter: UrlParam::from(kind_filter) }
    }

    pub fn worksheet_page(file_id: impl Into<String>) -> Self {
        Self::ViewWorksheetPage { file_id: file_id.into() }
    }
}
