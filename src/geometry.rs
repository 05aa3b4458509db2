//! 几何模块 - 圆与圆的相交计算

/// 2D 点
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// 圆
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// 计算两圆边界的交点
///
/// 相离（d > r1 + r2）、内含（d < |r1 - r2|）或圆心重合时返回 `None`。
/// 相切时两个交点近似重合，不做特殊处理。
/// 半径为零或负数时两圆不可能相交，自然落入 `None` 分支。
pub fn circle_intersections(c1: Circle, c2: Circle) -> Option<(Point, Point)> {
    let d = c1.center.distance(&c2.center);

    // 圆心重合：同心圆没有离散交点
    if d == 0.0 {
        return None;
    }
    if d > c1.radius + c2.radius || d < (c1.radius - c2.radius).abs() {
        return None;
    }

    let r1 = c1.radius;
    let r2 = c2.radius;

    // a: 圆心连线上到弦中点的有向距离
    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    // h: 弦的半长。临近相切时浮点误差可能让根号内出现极小的负数
    let h = (r1 * r1 - a * a).max(0.0).sqrt();

    let ux = (c2.center.x - c1.center.x) / d;
    let uy = (c2.center.y - c1.center.y) / d;

    // 弦中点
    let mid = Point::new(c1.center.x + a * ux, c1.center.y + a * uy);

    // 沿垂直方向 (uy, -ux) 偏移 h 得到两个交点
    let p1 = Point::new(mid.x + h * uy, mid.y - h * ux);
    let p2 = Point::new(mid.x - h * uy, mid.y + h * ux);

    Some((p1, p2))
}

/// 沿 `from` 指向 `to` 的射线方向前进 `distance` 得到的点
///
/// `from == to` 时方向不确定，返回 `from` 本身。
pub fn project_toward(from: Point, to: Point, distance: f32) -> Point {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = (dx * dx + dy * dy).sqrt();

    if len == 0.0 {
        return from;
    }

    Point::new(from.x + dx / len * distance, from.y + dy / len * distance)
}
