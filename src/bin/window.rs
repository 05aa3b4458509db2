//! 窗口运行器 - 指针移动与滚轮驱动的圆相交可视化

use lens_render::{render_frame, Canvas, InteractionState, TextRenderer};
use std::num::NonZeroU32;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

const LOGICAL_WIDTH: u32 = 800;
const LOGICAL_HEIGHT: u32 = 600;

struct LensWindow {
    window: Option<Arc<Window>>,
    surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    canvas: Option<Canvas>,
    text_renderer: Option<TextRenderer>,
    state: InteractionState,
}

impl LensWindow {
    fn new() -> Self {
        Self {
            window: None,
            surface: None,
            canvas: None,
            text_renderer: None,
            state: InteractionState::new(),
        }
    }

    /// 画布始终和窗口物理尺寸一致，指针坐标可以直接使用
    fn setup_canvas(&mut self) {
        if let Some(window) = &self.window {
            let size = window.inner_size();
            if size.width > 0 && size.height > 0 {
                self.canvas = Some(Canvas::new(size.width, size.height));
            }
        }
    }

    fn redraw(&mut self) {
        let canvas = match &mut self.canvas {
            Some(c) => c,
            None => return,
        };

        render_frame(canvas, self.text_renderer.as_ref(), &self.state);

        if let (Some(window), Some(surface)) = (&self.window, &mut self.surface) {
            let size = window.inner_size();
            if let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
                surface.resize(width, height).ok();

                if let Ok(mut buffer) = surface.buffer_mut() {
                    present_to_buffer(&mut buffer, size.width, size.height, canvas);
                    buffer.present().ok();
                }
            }
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// 将画布像素打包进窗口的 0RGB u32 缓冲区
fn present_to_buffer(buffer: &mut [u32], buffer_width: u32, buffer_height: u32, canvas: &Canvas) {
    let pixels = canvas.pixels();
    let canvas_width = canvas.width();
    let canvas_height = canvas.height();

    for y in 0..buffer_height.min(canvas_height) {
        for x in 0..buffer_width.min(canvas_width) {
            let src_idx = (y * canvas_width + x) as usize;
            let dst_idx = (y * buffer_width + x) as usize;
            if src_idx < pixels.len() && dst_idx < buffer.len() {
                buffer[dst_idx] = pixels[src_idx].to_0rgb();
            }
        }
    }
}

impl ApplicationHandler for LensWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = WindowAttributes::default()
                .with_title("Circle Lens")
                .with_inner_size(winit::dpi::LogicalSize::new(LOGICAL_WIDTH, LOGICAL_HEIGHT));

            let window = Arc::new(event_loop.create_window(window_attrs).unwrap());

            let context = softbuffer::Context::new(window.clone()).unwrap();
            let surface = softbuffer::Surface::new(&context, window.clone()).unwrap();

            self.window = Some(window);
            self.surface = Some(surface);
            self.setup_canvas();

            self.text_renderer = match TextRenderer::load_system_font() {
                Ok(renderer) => Some(renderer),
                Err(e) => {
                    eprintln!("⚠️ {} - 标签将不显示", e);
                    None
                }
            };

            self.redraw();
            println!("🎮 Ready! 移动鼠标拖动圆，滚轮调整半径");
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape)
                {
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(_) => {
                self.setup_canvas();
                self.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                // winit 的坐标已经是窗口本地的物理像素
                self.state.pointer_moved(position.x as f32, position.y as f32);
                self.request_redraw();
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * 20.0,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                self.state.wheel_scrolled(delta_y);
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
            }

            _ => {}
        }
    }
}

fn main() {
    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = LensWindow::new();
    if let Err(e) = event_loop.run_app(&mut app) {
        eprintln!("❌ Event loop error: {}", e);
    }
}
