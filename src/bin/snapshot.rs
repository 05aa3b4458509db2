//! 离屏渲染示例 - 渲染一帧并保存为 PNG

use lens_render::{render_frame, Canvas, InteractionState, TextRenderer};

fn main() {
    let mut canvas = Canvas::new(800, 600);

    let text_renderer = TextRenderer::load_system_font().ok();
    if text_renderer.is_none() {
        eprintln!("⚠️ 未找到等宽字体，标签将不显示");
    }

    // 指针放在中心右上方，让两圆明显相交
    let mut state = InteractionState::new();
    state.pointer_moved(470.0, 250.0);
    state.wheel_scrolled(300.0); // 半径 50 + 10

    render_frame(&mut canvas, text_renderer.as_ref(), &state);

    match canvas.save_png("lens.png") {
        Ok(_) => println!("✅ 渲染完成！已保存到 lens.png"),
        Err(e) => eprintln!("❌ 保存失败: {}", e),
    }
}
