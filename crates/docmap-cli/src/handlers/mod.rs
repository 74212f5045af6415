mod context;

pub mod clusters;
pub mod explore;
pub mod points;
pub mod show;

pub use context::HandlerContext;
