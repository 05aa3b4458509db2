//! 图元渲染 - 圆盘、线段、透镜区域
//!
//! 所有函数都是无状态的：样式通过参数完整传入，调用之间不共享任何绘制状态。

use crate::geometry::Point;
use crate::text::TextRenderer;
use crate::{Canvas, Color, Paint, Path};

/// 虚线模式：15 实 / 10 空
pub const DASH_PATTERN: [f32; 2] = [15.0, 10.0];
/// 标签字号
pub const LABEL_FONT_SIZE: f32 = 24.0;
/// 标签相对线段中点的上移量
pub const LABEL_OFFSET_Y: f32 = 20.0;

/// 绘制填充圆盘
pub fn draw_disc(canvas: &mut Canvas, center: Point, radius: f32, fill: Color) {
    let paint = Paint::new().with_color(fill);
    canvas.fill_circle(center.x, center.y, radius, &paint);
}

/// 绘制线段，可选虚线与居中标签
///
/// 标签画在线段中点上方 20 个单位处，黄色等宽字体。
/// 没有可用字体时跳过标签，线段照常绘制。
pub fn draw_segment(
    canvas: &mut Canvas,
    text: Option<&TextRenderer>,
    from: Point,
    to: Point,
    label: &str,
    color: Color,
    width: f32,
    dashed: bool,
) {
    let mut paint = Paint::new().with_color(color).with_stroke_width(width);
    if dashed {
        paint = paint.with_dash(DASH_PATTERN[0], DASH_PATTERN[1]);
    }
    canvas.draw_line(from.x, from.y, to.x, to.y, &paint);

    if label.is_empty() {
        return;
    }
    if let Some(renderer) = text {
        let mid = from.midpoint(&to);
        let text_width = renderer.measure_text(label, LABEL_FONT_SIZE);
        let label_paint = Paint::new().with_color(Color::YELLOW);
        renderer.draw_text(
            canvas,
            label,
            mid.x - text_width / 2.0,
            mid.y - LABEL_OFFSET_Y,
            LABEL_FONT_SIZE,
            &label_paint,
        );
    }
}

/// 填充两圆重叠的透镜区域
///
/// 路径由两段圆弧围成：圆 1 边界从 p1 扫到 p2，圆 2 边界从 p2 扫回 p1，
/// 角度用 atan2 相对各自圆心计算，扫描方向始终取角度增大方向。
/// 这只对本场景中两个大小相近、部分重叠的圆成立，不是通用的圆布尔运算。
pub fn fill_lens_region(
    canvas: &mut Canvas,
    center1: Point,
    center2: Point,
    radius: f32,
    p1: Point,
    p2: Point,
) {
    let mut path = Path::new();
    path.move_to(p1.x, p1.y);
    path.arc(
        center1.x,
        center1.y,
        radius,
        (p1.y - center1.y).atan2(p1.x - center1.x),
        (p2.y - center1.y).atan2(p2.x - center1.x),
    );
    path.line_to(p2.x, p2.y);
    path.arc(
        center2.x,
        center2.y,
        radius,
        (p2.y - center2.y).atan2(p2.x - center2.x),
        (p1.y - center2.y).atan2(p1.x - center2.x),
    );
    path.close();

    let paint = Paint::new().with_color(Color::BLUE);
    canvas.fill_path(&path, &paint);
}
