/// Software rendering of the terrain wireframe and minimap overlay
pub mod framebuffer;
pub mod overlay;
pub mod wireframe;

pub use framebuffer::{rgb_to_u32, FrameSlice, Framebuffer};
pub use overlay::MinimapOverlay;
pub use wireframe::{unique_edges, ScreenVertex, WireframeRenderer};

use crate::scene::Scene;

pub const CLEAR_COLOR: u32 = rgb_to_u32(26, 26, 26);

/// Full frame: clear, terrain pass, then the overlay on top.
/// Returns the number of terrain pixels written.
pub fn render_frame(
    framebuffer: &mut Framebuffer,
    scene: &Scene,
    wireframe: &WireframeRenderer,
    overlay: &MinimapOverlay,
) -> usize {
    framebuffer.clear(CLEAR_COLOR);
    let written = wireframe.render(framebuffer, scene.mesh(), &scene.model_view_projection());
    overlay.draw(framebuffer, scene);
    written
}
