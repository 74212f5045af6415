pub mod app;
pub mod hit;

pub use app::{ExplorerApp, Focus};
pub use hit::{Hit, HitMap};
