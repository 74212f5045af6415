use anyhow::Result;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::CommandResultViewModel;
use docmap_engine::ClusterListView;
use docmap_runtime::DataLoader;

pub fn handle(loader: &DataLoader, ctx: &HandlerContext) -> Result<()> {
    let set = loader.load_cluster_set()?;

    let mut list = ClusterListView::new();
    list.render(&set);

    let view_model = CommandResultViewModel::new(presenters::present_clusters(&list))
        .with_suggestions(presenters::cluster_set_guidance(&set));
    ctx.render(view_model)
}
