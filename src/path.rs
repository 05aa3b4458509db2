//! 路径模块 - 直线段与圆弧组成的路径

use crate::geometry::Point;

/// 路径命令
#[derive(Debug, Clone)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// 圆弧：圆心、半径、起始角、终止角（弧度）
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    Close,
}

/// 路径
#[derive(Debug, Clone, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// 添加圆弧，从 start_angle 沿角度增大方向扫到 end_angle。
    /// end_angle 小于 start_angle 时跨过 2π 继续，与 2D canvas 的
    /// `arc(..., startAngle, endAngle)` 默认方向一致。
    pub fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32) -> &mut Self {
        self.commands.push(PathCommand::Arc {
            center: Point::new(cx, cy),
            radius,
            start_angle,
            end_angle,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// 将路径展平为点序列轮廓（用于光栅化）
    pub fn flatten(&self, tolerance: f32) -> Vec<Vec<Point>> {
        let mut contours = Vec::new();
        let mut current_contour: Vec<Point> = Vec::new();
        let mut start = Point::default();

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => {
                    if !current_contour.is_empty() {
                        contours.push(std::mem::take(&mut current_contour));
                    }
                    start = *p;
                    current_contour.push(*p);
                }
                PathCommand::LineTo(p) => {
                    current_contour.push(*p);
                }
                PathCommand::Arc { center, radius, start_angle, end_angle } => {
                    flatten_arc(center, *radius, *start_angle, *end_angle, tolerance, &mut current_contour);
                }
                PathCommand::Close => {
                    if current_contour.last() != Some(&start) {
                        current_contour.push(start);
                    }
                }
            }
        }

        if !current_contour.is_empty() {
            contours.push(current_contour);
        }

        contours
    }
}

/// 圆弧展平
fn flatten_arc(center: &Point, radius: f32, start_angle: f32, end_angle: f32, tolerance: f32, out: &mut Vec<Point>) {
    let mut sweep = end_angle - start_angle;
    if sweep < 0.0 {
        sweep += 2.0 * std::f32::consts::PI;
    }

    let arc_len = radius.abs() * sweep;
    let steps = (arc_len / tolerance).ceil() as usize;
    let steps = steps.clamp(2, 100);

    for i in 0..=steps {
        let angle = start_angle + sweep * i as f32 / steps as f32;
        out.push(Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
}
