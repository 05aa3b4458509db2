//! 画笔模块
//!
//! 每次绘制调用都携带完整的 `Paint`，调用之间不保留任何样式状态，
//! 不会像 2D canvas 的全局 strokeStyle 那样在图元之间串色。

use crate::Color;

/// 画笔
#[derive(Debug, Clone, Copy)]
pub struct Paint {
    pub color: Color,
    pub stroke_width: f32,
    /// 虚线模式：[实段长, 空段长]。`None` 为实线
    pub dash: Option<[f32; 2]>,
    pub anti_alias: bool,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            stroke_width: 1.0,
            dash: None,
            anti_alias: true,
        }
    }
}

impl Paint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_dash(mut self, on: f32, off: f32) -> Self {
        self.dash = Some([on, off]);
        self
    }

    pub fn with_anti_alias(mut self, aa: bool) -> Self {
        self.anti_alias = aa;
        self
    }
}
