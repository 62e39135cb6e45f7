#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod input;
pub mod page;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod store;
pub mod util;
pub mod widgets;
pub mod zoom;

pub use app::CanvasApp;
pub use command::Command;
pub use config::EditorConfig;
pub use document::Document;
pub use element::{Element, ElementId, ElementKind, Shape};
pub use error::{ConfigError, EditorError};
pub use page::{Page, PageId};
pub use renderer::CanvasRenderer;
pub use state::{EditorContext, EditorState};
pub use zoom::{ZoomController, ZoomGesture};
