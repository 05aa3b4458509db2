//! 场景合成 - 每个输入事件重绘一整帧

use crate::geometry::{circle_intersections, project_toward, Circle, Point};
use crate::render::{draw_disc, draw_segment, fill_lens_region};
use crate::text::TextRenderer;
use crate::{Canvas, Color};

/// 初始半径
pub const INITIAL_RADIUS: f32 = 50.0;
/// 滚轮增量到半径增量的换算
pub const WHEEL_DIVISOR: f32 = 30.0;
/// 交点标记的半径
const MARKER_RADIUS: f32 = 5.0;
/// 辅助线宽度
const LINE_WIDTH: f32 = 2.0;
/// 背景色
const BACKGROUND: Color = Color::from_hex(0x1E1E1E);

/// 交互状态：滚轮控制半径，指针控制移动圆的圆心
///
/// 单线程单实例：输入适配器写，render_frame 读，不需要加锁。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    pub radius: f32,
    pub pointer: Point,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            radius: INITIAL_RADIUS,
            pointer: Point::new(0.0, 0.0),
        }
    }
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指针移动到画布本地坐标 (x, y)
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Point::new(x, y);
    }

    /// 滚轮事件：半径随 delta_y / 30 调整。
    /// 持续向下滚会让半径变得很小甚至为负，几何层对此必须保持安全。
    pub fn wheel_scrolled(&mut self, delta_y: f32) {
        self.radius += delta_y / WHEEL_DIVISOR;
    }
}

/// 渲染一帧：给定不变的状态，两次调用产生完全相同的像素
pub fn render_frame(canvas: &mut Canvas, text: Option<&TextRenderer>, state: &InteractionState) {
    canvas.clear(BACKGROUND);

    let fixed_center = Point::new(canvas.width() as f32 / 2.0, canvas.height() as f32 / 2.0);
    let pointer = state.pointer;
    let radius = state.radius;

    // 两个主圆
    draw_disc(canvas, fixed_center, radius, Color::GREEN);
    draw_disc(canvas, pointer, radius, Color::RED);

    // 相交时标出交点并填充重叠透镜
    let fixed_circle = Circle::new(fixed_center, radius);
    let pointer_circle = Circle::new(pointer, radius);
    if let Some((p1, p2)) = circle_intersections(fixed_circle, pointer_circle) {
        draw_disc(canvas, p1, MARKER_RADIUS, Color::YELLOW);
        draw_disc(canvas, p2, MARKER_RADIUS, Color::YELLOW);
        fill_lens_region(canvas, fixed_center, pointer, radius, p1, p2);
    }

    // 指针到固定圆心的连线，带坐标标签
    let label = format!("from: {:.0}, {:.0}", pointer.x, pointer.y);
    draw_segment(canvas, text, pointer, fixed_center, &label, Color::RED, LINE_WIDTH, false);

    // 先竖后横的 L 形虚线
    let corner = Point::new(fixed_center.x, pointer.y);
    draw_segment(canvas, text, fixed_center, corner, "", Color::WHITE, LINE_WIDTH, true);
    draw_segment(canvas, text, corner, pointer, "", Color::WHITE, LINE_WIDTH, true);

    // 两条半径指示线
    let fixed_edge = project_toward(fixed_center, pointer, radius);
    draw_segment(canvas, text, fixed_center, fixed_edge, "", Color::BLACK, LINE_WIDTH, false);
    let pointer_edge = project_toward(pointer, fixed_center, radius);
    draw_segment(canvas, text, pointer, pointer_edge, "", Color::WHITE, LINE_WIDTH, false);
}
