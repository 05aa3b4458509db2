//! 文本渲染模块 - 等宽字体标签

use crate::{Canvas, Color, Paint};
use fontdue::{Font, FontSettings, Metrics};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// 文本渲染器
pub struct TextRenderer {
    font: Font,
    /// 字形缓存 (char, size_u32) -> (Metrics, Bitmap)
    /// draw 方法是 &self，用 Mutex 实现内部可变性
    cache: Mutex<HashMap<(char, u32), (Metrics, Vec<u8>)>>,
}

impl TextRenderer {
    /// 从字体数据创建
    pub fn from_bytes(font_data: &[u8]) -> Result<Self, String> {
        let settings = FontSettings {
            scale: 40.0,
            ..Default::default()
        };
        let font = Font::from_bytes(font_data, settings).map_err(|e| e.to_string())?;
        Ok(Self {
            font,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// 从文件路径加载字体
    pub fn from_file(path: &str) -> Result<Self, String> {
        let font_data = std::fs::read(path)
            .map_err(|e| format!("Failed to read font file: {}", e))?;
        Self::from_bytes(&font_data)
    }

    /// 加载系统等宽字体（macOS / Linux）
    pub fn load_system_font() -> Result<Self, String> {
        let font_paths = [
            "/System/Library/Fonts/Menlo.ttc",
            "/System/Library/Fonts/Monaco.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
            "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
            "/usr/share/fonts/liberation/LiberationMono-Regular.ttf",
        ];

        for path in &font_paths {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(renderer) => {
                        println!("✅ Monospace font: {}", path);
                        return Ok(renderer);
                    }
                    Err(_) => continue,
                }
            }
        }

        Err("No monospace font found".to_string())
    }

    /// 渲染文本到画布，(x, y) 为基线左端
    pub fn draw_text(&self, canvas: &mut Canvas, text: &str, x: f32, y: f32, size: f32, paint: &Paint) {
        let mut cursor_x = x;
        // size 转成整数 key，保留 1 位小数精度
        let size_key = (size * 10.0) as u32;

        for ch in text.chars() {
            let cached = {
                let cache = self.cache.lock().unwrap();
                cache.get(&(ch, size_key)).cloned()
            };

            let (metrics, bitmap) = match cached {
                Some(data) => data,
                None => {
                    let (metrics, bitmap) = self.font.rasterize(ch, size);
                    let mut cache = self.cache.lock().unwrap();
                    cache.insert((ch, size_key), (metrics, bitmap.clone()));
                    (metrics, bitmap)
                }
            };

            if metrics.width == 0 || metrics.height == 0 {
                cursor_x += metrics.advance_width;
                continue;
            }

            let glyph_x = cursor_x + metrics.xmin as f32;
            let glyph_y = y - metrics.height as f32 - metrics.ymin as f32;

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let coverage = bitmap[gy * metrics.width + gx] as f32 / 255.0;
                    if coverage > 0.001 {
                        let px = (glyph_x + gx as f32).round() as i32;
                        let py = (glyph_y + gy as f32).round() as i32;
                        let alpha = (paint.color.a as f32 * coverage) as u8;
                        if alpha > 0 {
                            let color = Color::new(paint.color.r, paint.color.g, paint.color.b, alpha);
                            canvas.set_pixel(px, py, color);
                        }
                    }
                }
            }

            cursor_x += metrics.advance_width;
        }
    }

    /// 测量文本宽度
    pub fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, size).advance_width)
            .sum()
    }
}
