//! 图元渲染单元测试

use crate::geometry::Point;
use crate::render::{draw_disc, draw_segment, fill_lens_region};
use crate::{Canvas, Color, Paint, Path};

fn create_test_canvas() -> Canvas {
    let mut canvas = Canvas::new(200, 200);
    canvas.clear(Color::BLACK);
    canvas
}

/// 测试填充圆盘：圆心像素被着色，圆外像素不受影响
#[test]
fn test_draw_disc() {
    let mut canvas = create_test_canvas();
    draw_disc(&mut canvas, Point::new(100.0, 100.0), 20.0, Color::RED);

    assert_eq!(canvas.get_pixel(100, 100), Color::RED);
    assert_eq!(canvas.get_pixel(100, 150), Color::BLACK);
}

/// 测试零半径与负半径圆盘：不崩溃也不着色
#[test]
fn test_draw_disc_degenerate_radius() {
    let mut canvas = create_test_canvas();
    draw_disc(&mut canvas, Point::new(100.0, 100.0), 0.0, Color::RED);
    draw_disc(&mut canvas, Point::new(100.0, 100.0), -5.0, Color::RED);

    assert_eq!(canvas.get_pixel(100, 100), Color::BLACK);
}

/// 测试实线线段
#[test]
fn test_draw_segment_solid() {
    let mut canvas = create_test_canvas();
    draw_segment(
        &mut canvas,
        None,
        Point::new(10.0, 50.0),
        Point::new(190.0, 50.0),
        "",
        Color::WHITE,
        2.0,
        false,
    );

    // 线段中部的像素被点亮
    assert_ne!(canvas.get_pixel(100, 50), Color::BLACK);
    // 远离线段的区域保持背景色
    assert_eq!(canvas.get_pixel(100, 120), Color::BLACK);
}

/// 测试虚线线段：实段被点亮，空段保持背景色
#[test]
fn test_draw_segment_dashed() {
    let mut canvas = create_test_canvas();
    // 水平虚线，样式 15 实 / 10 空：实段 [0,15] [25,40]…，空段 (15,25) (40,50)…
    let paint = Paint::new()
        .with_color(Color::WHITE)
        .with_stroke_width(1.0)
        .with_dash(15.0, 10.0);
    canvas.draw_line(0.0, 10.0, 199.0, 10.0, &paint);

    assert_eq!(canvas.get_pixel(5, 10), Color::WHITE);
    assert_eq!(canvas.get_pixel(20, 10), Color::BLACK);
    assert_eq!(canvas.get_pixel(30, 10), Color::WHITE);
    assert_eq!(canvas.get_pixel(45, 10), Color::BLACK);
}

/// 测试标签缺少字体时线段照常绘制
#[test]
fn test_draw_segment_label_without_font() {
    let mut canvas = create_test_canvas();
    draw_segment(
        &mut canvas,
        None,
        Point::new(50.0, 100.0),
        Point::new(150.0, 100.0),
        "from: 150, 100",
        Color::RED,
        2.0,
        false,
    );

    assert_ne!(canvas.get_pixel(100, 100), Color::BLACK);
}

/// 测试透镜填充：两圆重叠区中心为蓝色，重叠区外不是
#[test]
fn test_fill_lens_region() {
    let mut canvas = create_test_canvas();
    let c1 = Point::new(80.0, 100.0);
    let c2 = Point::new(140.0, 100.0);
    // r=50, d=60 的标准相交：交点在 (110, 100±40)
    let p1 = Point::new(110.0, 60.0);
    let p2 = Point::new(110.0, 140.0);

    fill_lens_region(&mut canvas, c1, c2, 50.0, p1, p2);

    assert_eq!(canvas.get_pixel(110, 100), Color::BLUE);
    assert_eq!(canvas.get_pixel(80, 100), Color::BLACK);
    assert_eq!(canvas.get_pixel(140, 100), Color::BLACK);
}

/// 测试圆弧展平：起点落在起始角上，终点落在终止角上
#[test]
fn test_path_arc_flatten() {
    let mut path = Path::new();
    path.move_to(110.0, 100.0);
    path.arc(100.0, 100.0, 10.0, 0.0, std::f32::consts::FRAC_PI_2);

    let contours = path.flatten(1.0);
    assert_eq!(contours.len(), 1);

    let contour = &contours[0];
    let first = contour[1]; // [0] 是 move_to 的起点
    let last = contour[contour.len() - 1];
    assert!((first.x - 110.0).abs() < 0.01 && (first.y - 100.0).abs() < 0.01);
    assert!((last.x - 100.0).abs() < 0.01 && (last.y - 110.0).abs() < 0.01);
}

/// 测试圆弧展平跨 2π：终止角小于起始角时沿角度增大方向绕过去
#[test]
fn test_path_arc_wraps_forward() {
    let mut path = Path::new();
    path.arc(0.0, 0.0, 10.0, std::f32::consts::FRAC_PI_2, 0.0);

    let contours = path.flatten(1.0);
    let contour = &contours[0];
    // 3/2 π 的扫描应该经过角度 π 处的 (-10, 0)
    let passes_through_pi = contour
        .iter()
        .any(|p| (p.x + 10.0).abs() < 0.5 && p.y.abs() < 0.5);
    assert!(passes_through_pi);
}

/// 测试画布清空
#[test]
fn test_canvas_clear() {
    let mut canvas = Canvas::new(10, 10);
    canvas.clear(Color::GREEN);
    assert_eq!(canvas.get_pixel(0, 0), Color::GREEN);
    assert_eq!(canvas.get_pixel(9, 9), Color::GREEN);
}

/// 测试越界像素访问安全
#[test]
fn test_canvas_out_of_bounds() {
    let mut canvas = Canvas::new(10, 10);
    canvas.set_pixel(-1, -1, Color::RED);
    canvas.set_pixel(100, 100, Color::RED);
    assert_eq!(canvas.get_pixel(100, 100), Color::TRANSPARENT);
}
