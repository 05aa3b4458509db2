//! Canvas 画布模块 - 软件光栅化

use crate::{Color, Paint, Path};

/// 画布 - 像素缓冲区与基础光栅化
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// 清空画布
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// 获取像素
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            Color::TRANSPARENT
        }
    }

    /// 设置像素（带 alpha 混合）
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }

        let idx = (y as u32 * self.width + x as u32) as usize;
        if color.a == 255 {
            self.pixels[idx] = color;
        } else if color.a > 0 {
            self.pixels[idx] = color.blend(&self.pixels[idx]);
        }
    }

    /// 设置像素（带抗锯齿 coverage）
    fn set_pixel_aa(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if coverage <= 0.0 {
            return;
        }
        let a = (color.a as f32 * coverage.min(1.0)) as u8;
        self.set_pixel(x, y, Color::new(color.r, color.g, color.b, a));
    }

    /// 绘制填充圆
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        if radius <= 0.0 {
            return;
        }

        let r2 = radius * radius;
        let x0 = (cx - radius - 1.0).max(0.0) as i32;
        let y0 = (cy - radius - 1.0).max(0.0) as i32;
        let x1 = (cx + radius + 1.0).min(self.width as f32) as i32;
        let y1 = (cy + radius + 1.0).min(self.height as f32) as i32;

        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let d2 = dx * dx + dy * dy;

                if paint.anti_alias {
                    let d = d2.sqrt();
                    if d <= radius + 0.5 {
                        let coverage = (radius + 0.5 - d).min(1.0);
                        self.set_pixel_aa(x, y, paint.color, coverage);
                    }
                } else if d2 <= r2 {
                    self.set_pixel(x, y, paint.color);
                }
            }
        }
    }

    /// 绘制线段，按 paint.dash 处理虚线
    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint) {
        match paint.dash {
            Some([on, off]) => self.draw_dashed_line(x0, y0, x1, y1, on, off, paint),
            None => self.draw_solid_line(x0, y0, x1, y1, paint),
        }
    }

    fn draw_solid_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint) {
        if paint.stroke_width > 1.5 {
            self.draw_thick_line(x0, y0, x1, y1, paint);
        } else if paint.anti_alias {
            self.draw_line_aa(x0, y0, x1, y1, paint);
        } else {
            self.draw_line_bresenham(x0 as i32, y0 as i32, x1 as i32, y1 as i32, paint);
        }
    }

    /// 虚线：沿线段按 [on, off] 步进，逐段画实线
    fn draw_dashed_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, on: f32, off: f32, paint: &Paint) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let len = (dx * dx + dy * dy).sqrt();

        if len == 0.0 || on <= 0.0 {
            return;
        }

        let ux = dx / len;
        let uy = dy / len;
        let mut t = 0.0;

        while t < len {
            let seg_end = (t + on).min(len);
            self.draw_solid_line(
                x0 + ux * t,
                y0 + uy * t,
                x0 + ux * seg_end,
                y0 + uy * seg_end,
                paint,
            );
            t = seg_end + off.max(0.0);
        }
    }

    /// 粗线：在法线方向铺开多条单像素线
    fn draw_thick_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let len = (dx * dx + dy * dy).sqrt();

        if len == 0.0 {
            self.fill_circle(x0, y0, paint.stroke_width / 2.0, paint);
            return;
        }

        let nx = -dy / len;
        let ny = dx / len;
        let half = paint.stroke_width / 2.0;

        let passes = paint.stroke_width.ceil() as i32;
        for i in 0..passes {
            let offset = -half + 0.5 + i as f32 * paint.stroke_width / passes as f32;
            let ox = nx * offset;
            let oy = ny * offset;
            if paint.anti_alias {
                self.draw_line_aa(x0 + ox, y0 + oy, x1 + ox, y1 + oy, paint);
            } else {
                self.draw_line_bresenham(
                    (x0 + ox) as i32,
                    (y0 + oy) as i32,
                    (x1 + ox) as i32,
                    (y1 + oy) as i32,
                    paint,
                );
            }
        }
    }

    /// Bresenham 直线算法
    fn draw_line_bresenham(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, paint: &Paint) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x0, y0, paint.color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// 抗锯齿直线 (Wu's algorithm)
    fn draw_line_aa(&mut self, mut x0: f32, mut y0: f32, mut x1: f32, mut y1: f32, paint: &Paint) {
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = y1 - y0;
        let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

        let xend = x0.round();
        let yend = y0 + gradient * (xend - x0);
        let xpxl1 = xend as i32;
        let mut intery = yend + gradient;

        let xend = x1.round();
        let xpxl2 = xend as i32;

        for x in xpxl1..=xpxl2 {
            let y = intery.floor() as i32;
            let frac = intery - intery.floor();

            if steep {
                self.set_pixel_aa(y, x, paint.color, 1.0 - frac);
                self.set_pixel_aa(y + 1, x, paint.color, frac);
            } else {
                self.set_pixel_aa(x, y, paint.color, 1.0 - frac);
                self.set_pixel_aa(x, y + 1, paint.color, frac);
            }
            intery += gradient;
        }
    }

    /// 填充路径（扫描线算法）
    pub fn fill_path(&mut self, path: &Path, paint: &Paint) {
        let contours = path.flatten(1.0);
        if contours.is_empty() {
            return;
        }

        let mut min_y = f32::MAX;
        let mut max_y = f32::MIN;
        for contour in &contours {
            for p in contour {
                min_y = min_y.min(p.y);
                max_y = max_y.max(p.y);
            }
        }

        let y0 = (min_y - 1.0).floor() as i32;
        let y1 = (max_y + 1.0).ceil() as i32;

        for y in y0..=y1 {
            let scan_y = y as f32 + 0.5;
            let mut intersections = Vec::new();

            for contour in &contours {
                for i in 0..contour.len() {
                    let p0 = &contour[i];
                    let p1 = &contour[(i + 1) % contour.len()];

                    if (p0.y <= scan_y && p1.y > scan_y) || (p1.y <= scan_y && p0.y > scan_y) {
                        let t = (scan_y - p0.y) / (p1.y - p0.y);
                        intersections.push(p0.x + t * (p1.x - p0.x));
                    }
                }
            }

            intersections.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            for pair in intersections.chunks(2) {
                if pair.len() == 2 {
                    let x0 = pair[0].round() as i32;
                    let x1 = pair[1].round() as i32;
                    for x in x0..=x1 {
                        self.set_pixel(x, y, paint.color);
                    }
                }
            }
        }
    }

    /// 导出为 RGBA 字节数组
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity((self.width * self.height * 4) as usize);
        for pixel in &self.pixels {
            data.push(pixel.r);
            data.push(pixel.g);
            data.push(pixel.b);
            data.push(pixel.a);
        }
        data
    }

    /// 保存为 PNG
    pub fn save_png(&self, path: &str) -> Result<(), String> {
        use image::{ImageBuffer, Rgba};

        let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(
            self.width,
            self.height,
            self.to_rgba(),
        ).ok_or("Failed to create image buffer")?;

        img.save(path).map_err(|e| e.to_string())
    }
}
