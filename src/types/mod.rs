// GitBrowser widget shared type definitions
// Each submodule defines types used across both widgets.

pub mod color;
pub mod errors;
pub mod favorite;
pub mod stats;
pub mod timeline;
pub mod widget;
