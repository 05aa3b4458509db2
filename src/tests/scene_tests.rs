//! 场景合成单元测试

use crate::scene::{render_frame, InteractionState};
use crate::{Canvas, Color};

fn render_to_canvas(width: u32, height: u32, state: &InteractionState) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    render_frame(&mut canvas, None, state);
    canvas
}

/// 测试初始状态
#[test]
fn test_initial_state() {
    let state = InteractionState::new();
    assert_eq!(state.radius, 50.0);
    assert_eq!(state.pointer.x, 0.0);
    assert_eq!(state.pointer.y, 0.0);
}

/// 测试滚轮换算：deltaY = 30 恰好让半径 +1.0
#[test]
fn test_wheel_delta() {
    let mut state = InteractionState::new();
    state.wheel_scrolled(30.0);
    assert_eq!(state.radius, 51.0);
}

/// 测试累计滚轮：十次 deltaY = 30 恰好 +10.0
#[test]
fn test_wheel_delta_accumulates() {
    let mut state = InteractionState::new();
    for _ in 0..10 {
        state.wheel_scrolled(30.0);
    }
    assert_eq!(state.radius, 60.0);
}

/// 测试反向滚轮缩小半径
#[test]
fn test_wheel_delta_negative() {
    let mut state = InteractionState::new();
    state.wheel_scrolled(-30.0);
    assert_eq!(state.radius, 49.0);
}

/// 测试指针移动精确落到画布本地坐标
#[test]
fn test_pointer_moved() {
    let mut state = InteractionState::new();
    state.pointer_moved(50.0, 60.0);
    assert_eq!(state.pointer.x, 50.0);
    assert_eq!(state.pointer.y, 60.0);
}

/// 测试渲染幂等：状态不变，两次渲染产生完全相同的像素
#[test]
fn test_render_idempotent() {
    let mut state = InteractionState::new();
    state.pointer_moved(130.0, 80.0);

    let first = render_to_canvas(200, 200, &state);
    let second = render_to_canvas(200, 200, &state);

    assert_eq!(first.pixels(), second.pixels());
}

/// 测试相交的两圆画出蓝色透镜区域
#[test]
fn test_overlap_fills_lens() {
    let mut state = InteractionState::new();
    // 固定圆心在 (100,100)，指针圆 (160,100)，d=60 < 2r=100
    state.pointer_moved(160.0, 100.0);

    let canvas = render_to_canvas(200, 200, &state);

    // 两圆心连线的中点在透镜内，避开 y=100 上的辅助线取样
    assert_eq!(canvas.get_pixel(130, 85), Color::BLUE);
}

/// 测试相离的两圆没有任何蓝色像素
#[test]
fn test_no_lens_when_separate() {
    let mut state = InteractionState::new();
    state.pointer_moved(450.0, 450.0);

    let canvas = render_to_canvas(500, 500, &state);

    let has_blue = (0..canvas.height())
        .any(|y| (0..canvas.width()).any(|x| canvas.get_pixel(x, y) == Color::BLUE));
    assert!(!has_blue);
}

/// 测试相交时画出黄色交点标记
#[test]
fn test_intersection_markers() {
    let mut state = InteractionState::new();
    state.pointer_moved(160.0, 100.0);

    let canvas = render_to_canvas(200, 200, &state);

    // d=60, r=50：交点在 (130, 100±40)，标记半径 5
    let near_marker = |cx: i32, cy: i32| {
        (-1..=1).any(|dy| {
            (-1..=1).any(|dx| {
                canvas.get_pixel((cx + dx) as u32, (cy + dy) as u32) == Color::YELLOW
            })
        })
    };
    assert!(near_marker(130, 58));
    assert!(near_marker(130, 142));
}

/// 测试指针与固定圆心重合时不崩溃
#[test]
fn test_pointer_at_center() {
    let mut state = InteractionState::new();
    state.pointer_moved(100.0, 100.0);

    let canvas = render_to_canvas(200, 200, &state);
    assert_eq!(canvas.width(), 200);
}

/// 测试半径为零或负数时整帧渲染不崩溃
#[test]
fn test_degenerate_radius_render() {
    let mut state = InteractionState::new();
    state.pointer_moved(120.0, 120.0);

    // 狂滚到负半径
    while state.radius > -10.0 {
        state.wheel_scrolled(-300.0);
    }
    assert!(state.radius < 0.0);

    let canvas = render_to_canvas(200, 200, &state);

    let has_blue = (0..canvas.height())
        .any(|y| (0..canvas.width()).any(|x| canvas.get_pixel(x, y) == Color::BLUE));
    assert!(!has_blue);
}
