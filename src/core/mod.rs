pub mod choreo;
pub mod mesh;
pub mod overlay;
pub mod scroll;

pub use choreo::*;
pub use mesh::*;
pub use overlay::*;
pub use scroll::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
