//! 单元测试模块
//! 覆盖几何计算、图元渲染、场景合成

pub mod render_tests;
pub mod scene_tests;
