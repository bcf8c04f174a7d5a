#![forbid(unsafe_code)]

// 纯逻辑 crate：面向关卡网格数据结构与编辑操作。
//
// 不含渲染、UI、文件 IO（这些都在上层：编辑器 / 游戏加载器）。
// 提供：
// - 网格本体与按坐标查改：LevelGrid
// - 单格数据：TileRecord + 类型/材质枚举
// - 存档文档形状通过 `serde` feature 暴露（编码/解码在 level_format）

mod error;
mod grid;
mod tiles;

pub use error::GridError;
pub use grid::LevelGrid;
pub use tiles::{TileMaterial, TileRecord, TileType};
