use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DocumentViewModel {
    pub id: String,
    pub resource: String,
    pub text: String,
}
