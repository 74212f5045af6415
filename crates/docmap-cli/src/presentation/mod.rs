//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(json)==> serde_json
//!                                                                         ==(plain)==> View (Display)
//!
//! [ explore ] --> [ TuiRenderer ] <--> [ ExplorerApp ] --> [ views::tui widgets ]
//!                       ^                   |
//!                       |                   v UiEvent
//!                  [ Fetcher ] <-Effect-- [ Explorer ]
//! ```
//!
//! View models hold raw data (numbers, ids), never formatted strings, since
//! `--format json` serializes them as-is. Views own layout and colour.

pub mod presenters;
pub mod renderers;
pub mod tui;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, Guidance};
