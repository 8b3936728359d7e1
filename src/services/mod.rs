// GitBrowser widget services
// Services read shared data, encode favicons, lay out grids, and render views.

pub mod favicon_codec;
pub mod favorites_reader;
pub mod layout_engine;
pub mod stats_registry;
pub mod view_renderer;
pub mod widget_config;
