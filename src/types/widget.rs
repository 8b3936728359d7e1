use serde::Serialize;

use super::timeline::SurfaceSize;

/// Static registration metadata a widget declares to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetDescriptor {
    pub kind: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub supported_sizes: &'static [SurfaceSize],
}

impl WidgetDescriptor {
    pub fn supports(&self, surface: SurfaceSize) -> bool {
        self.supported_sizes.contains(&surface)
    }
}
