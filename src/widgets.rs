//! Widget registrations — the static metadata each widget declares to the host.

use crate::types::timeline::SurfaceSize;
use crate::types::widget::WidgetDescriptor;

pub static FAVORITES_WIDGET: WidgetDescriptor = WidgetDescriptor {
    kind: "FavoritesWidget",
    display_name: "Favorites",
    description: "Quickly access your favorite websites.",
    supported_sizes: &[SurfaceSize::Medium, SurfaceSize::Large],
};

pub static STATS_WIDGET: WidgetDescriptor = WidgetDescriptor {
    kind: "ShieldsStatWidget",
    display_name: "Privacy Stats",
    description: "A summary of what GitBrowser Shields has blocked.",
    supported_sizes: &[SurfaceSize::Small],
};

/// Every widget the extension bundles, in registration order.
pub fn all() -> [&'static WidgetDescriptor; 2] {
    [&FAVORITES_WIDGET, &STATS_WIDGET]
}
