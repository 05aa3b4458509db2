//! Lens Render - 交互式圆相交可视化
//! 固定圆在画布中心，另一个圆跟随指针，实时高亮两圆重叠的透镜区域

mod canvas;
mod color;
mod paint;
mod path;

pub mod geometry;
pub mod render;
pub mod scene;
pub mod text;

pub use canvas::Canvas;
pub use color::Color;
pub use geometry::{circle_intersections, project_toward, Circle, Point};
pub use paint::Paint;
pub use path::{Path, PathCommand};
pub use scene::{render_frame, InteractionState};
pub use text::TextRenderer;

// 单元测试
#[cfg(test)]
mod tests;
