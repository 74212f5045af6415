use anyhow::Result;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use docmap_engine::{ClusterListView, ScatterplotView};
use docmap_runtime::{Config, DataLoader};

/// Cluster set first, then points, the same order the explorer loads them.
pub fn handle(loader: &DataLoader, config: &Config, ctx: &HandlerContext) -> Result<()> {
    let set = loader.load_cluster_set()?;
    let mut list = ClusterListView::new();
    list.render(&set);

    let points = loader.load_points()?;
    let mut scatter = ScatterplotView::new(config.scatterplot.clone());
    scatter.render(&points);

    ctx.render(presenters::present_points(&scatter, &points, &list))
}
