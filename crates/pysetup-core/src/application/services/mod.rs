pub mod preset_service;
pub mod render_service;
pub mod scaffold_service;

pub use preset_service::{PresetInfo, PresetService};
pub use render_service::RenderService;
pub use scaffold_service::{ScaffoldService, WriteReport};
