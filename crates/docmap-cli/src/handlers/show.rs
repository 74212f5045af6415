use anyhow::Result;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::CommandResultViewModel;
use docmap_runtime::DataLoader;
use docmap_types::DocumentId;

pub fn handle(loader: &DataLoader, ctx: &HandlerContext, file: String) -> Result<()> {
    let id = DocumentId::new(file);
    let text = loader.load_document_text(&id)?;
    let resource = loader.resources().content_path(id.as_str());

    ctx.render(CommandResultViewModel::new(presenters::present_document(
        &id, resource, text,
    )))
}
