use std::fmt;

use super::{CreateView, DisplayOptions};
use crate::presentation::view_models::DocumentViewModel;

/// Document text, verbatim
pub struct DocumentView<'a> {
    data: &'a DocumentViewModel,
}

impl<'a> DocumentView<'a> {
    pub fn new(data: &'a DocumentViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for DocumentView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data.text)
    }
}

impl CreateView for DocumentViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(DocumentView::new(self))
    }
}
