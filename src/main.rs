/// Main application entry point
/// Handles window creation, input, and render loop
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};
use terrain_viewer::perf::FpsCounter;
use terrain_viewer::render::render_frame;
use terrain_viewer::*;
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowBuilder},
};

type Surface = softbuffer::Surface<Arc<Window>, Arc<Window>>;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(ViewerConfig::default()) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run(config: ViewerConfig) -> Result<(), ViewerError> {
    log::info!("Controls: WASD move, click + mouse look, ESC release mouse / exit");

    let mut scene = Scene::new(&config)?;
    let wireframe = WireframeRenderer::new(scene.mesh());
    let overlay = MinimapOverlay::new(config.minimap_size, config.minimap_margin);
    log::info!(
        "terrain {}x{}: {} triangles, {} edges",
        scene.mesh().width(),
        scene.mesh().depth(),
        scene.mesh().triangle_count(),
        wireframe.edge_count()
    );

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Terrain Viewer")
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .build(&event_loop)?,
    );

    let context = softbuffer::Context::new(window.clone())?;
    let mut surface = softbuffer::Surface::new(&context, window.clone())?;

    let size = window.inner_size();
    let mut framebuffer = Framebuffer::new(size.width as usize, size.height as usize);
    scene
        .camera
        .set_aspect_ratio(size.width as f32 / size.height.max(1) as f32);

    let mut controller = CameraController::new();
    let mut mouse_captured = false;
    let mut last_mouse_pos: Option<(f64, f64)> = None;
    let mut last_frame = Instant::now();
    let mut fps = FpsCounter::new(Duration::from_secs(1));

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(new_size) => {
                    framebuffer.resize(new_size.width as usize, new_size.height as usize);
                    scene
                        .camera
                        .set_aspect_ratio(new_size.width as f32 / new_size.height.max(1) as f32);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    let pressed = event.state == ElementState::Pressed;
                    if let PhysicalKey::Code(keycode) = event.physical_key {
                        match keycode {
                            KeyCode::KeyW => controller.forward_pressed = pressed,
                            KeyCode::KeyS => controller.backward_pressed = pressed,
                            KeyCode::KeyA => controller.left_pressed = pressed,
                            KeyCode::KeyD => controller.right_pressed = pressed,
                            KeyCode::Escape if pressed => {
                                if mouse_captured {
                                    mouse_captured = false;
                                    last_mouse_pos = None;
                                    window.set_cursor_visible(true);
                                } else {
                                    elwt.exit();
                                }
                            }
                            _ => {}
                        }
                    }
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if button == MouseButton::Left && state == ElementState::Pressed {
                        mouse_captured = true;
                        window.set_cursor_visible(false);
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if mouse_captured {
                        if let Some((last_x, last_y)) = last_mouse_pos {
                            // Window y grows downward; moving the mouse up looks up.
                            scene
                                .camera
                                .rotate((position.x - last_x) as f32, (last_y - position.y) as f32);
                        }
                        last_mouse_pos = Some((position.x, position.y));
                    }
                }
                WindowEvent::RedrawRequested => {
                    let now = Instant::now();
                    let dt = (now - last_frame).as_secs_f32();
                    last_frame = now;

                    controller.update_camera(&mut scene.camera, dt);
                    scene.update();

                    if let Err(err) = present(&mut surface, &mut framebuffer, &scene, &wireframe, &overlay)
                    {
                        log::error!("{err}");
                        elwt.exit();
                        return;
                    }

                    if let Some(rate) = fps.tick(Instant::now()) {
                        log::info!(
                            "FPS: {:.0} | trace points: {}",
                            rate,
                            scene.path_trace().len()
                        );
                    }
                }
                _ => {}
            },
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        }
    })?;

    Ok(())
}

/// Render into the framebuffer and copy it to the window surface.
/// A minimised window has no pixels and skips the frame.
fn present(
    surface: &mut Surface,
    framebuffer: &mut Framebuffer,
    scene: &Scene,
    wireframe: &WireframeRenderer,
    overlay: &MinimapOverlay,
) -> Result<(), ViewerError> {
    let (Some(width), Some(height)) = (
        NonZeroU32::new(framebuffer.width as u32),
        NonZeroU32::new(framebuffer.height as u32),
    ) else {
        return Ok(());
    };

    render_frame(framebuffer, scene, wireframe, overlay);

    surface.resize(width, height)?;
    let mut buffer = surface.buffer_mut()?;
    buffer.copy_from_slice(framebuffer.color_buffer_slice());
    buffer.present()?;
    Ok(())
}
