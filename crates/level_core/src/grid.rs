#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::tiles::{TileMaterial, TileRecord, TileType};

/// 一关的 tile 网格。
///
/// - 构造后 `tiles.len() == width * height`，只原地改格子，不增删。
/// - 字段私有：外部一律走 `set_tile` / `fill_all` 等操作改格子，
///   保证每个坐标恰好一条记录。
/// - serde 表示即存档文档形状（levelName / levelWidth / levelHeight / levelTiles）。
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelGrid {
    #[cfg_attr(feature = "serde", serde(rename = "levelName"))]
    name: String,
    #[cfg_attr(feature = "serde", serde(rename = "levelWidth"))]
    width: u32,
    #[cfg_attr(feature = "serde", serde(rename = "levelHeight"))]
    height: u32,
    #[cfg_attr(feature = "serde", serde(rename = "levelTiles"))]
    tiles: Vec<TileRecord>,
}

impl LevelGrid {
    /// 建一张全空网格（所有格子 Empty/Empty，layer/order 为 0）。
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::new_named(width, height, "")
    }

    pub fn new_named(
        width: u32,
        height: u32,
        name: impl Into<String>,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidSize { width, height });
        }

        // 坐标枚举沿用既有存档的约定：x 走 0..height，y 走 0..width。
        // 读档按存档里的逐格坐标回放，两边必须保持同一约定。
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for x in 0..height {
            for y in 0..width {
                tiles.push(TileRecord {
                    x,
                    y,
                    ..TileRecord::default()
                });
            }
        }

        Ok(Self {
            name: name.into(),
            width,
            height,
            tiles,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// 全部格子的只读视图，按存储顺序。
    pub fn tiles(&self) -> &[TileRecord] {
        &self.tiles
    }

    /// 按坐标查格子。线性查找唯一匹配的记录，查不到返回 `TileNotFound`。
    pub fn tile(&self, x: u32, y: u32) -> Result<&TileRecord, GridError> {
        self.tiles
            .iter()
            .find(|t| t.x == x && t.y == y)
            .ok_or(GridError::TileNotFound { x, y })
    }

    fn tile_mut(&mut self, x: u32, y: u32) -> Result<&mut TileRecord, GridError> {
        self.tiles
            .iter_mut()
            .find(|t| t.x == x && t.y == y)
            .ok_or(GridError::TileNotFound { x, y })
    }

    /// 改一个格子的类型与材质。layer/order 不动；查找失败时网格不变。
    pub fn set_tile(
        &mut self,
        x: u32,
        y: u32,
        tile_type: TileType,
        material: TileMaterial,
    ) -> Result<(), GridError> {
        let record = self.tile_mut(x, y)?;
        record.tile_type = tile_type;
        record.material = material;
        Ok(())
    }

    /// 改一个格子的渲染层与层内顺序。类型/材质不动。
    pub fn set_tile_layering(
        &mut self,
        x: u32,
        y: u32,
        layer: i32,
        order: i32,
    ) -> Result<(), GridError> {
        let record = self.tile_mut(x, y)?;
        record.layer = layer;
        record.order = order;
        Ok(())
    }

    /// 把所有格子刷成同一类型与材质。layer/order 不动。幂等。
    pub fn fill_all(&mut self, tile_type: TileType, material: TileMaterial) {
        for record in &mut self.tiles {
            record.tile_type = tile_type;
            record.material = material;
        }
    }
}
