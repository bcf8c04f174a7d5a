#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// tile 的玩法类型（能否站立/阻挡/可破坏）。
///
/// 存档里按整数编码存储：0=Empty，1=Walkable，2=Walls，3=Damageable。
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "u8", try_from = "u8")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileType {
    Empty,
    Walkable,
    Walls,
    Damageable,
}

impl Default for TileType {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<TileType> for u8 {
    fn from(tile_type: TileType) -> Self {
        match tile_type {
            TileType::Empty => 0,
            TileType::Walkable => 1,
            TileType::Walls => 2,
            TileType::Damageable => 3,
        }
    }
}

impl TryFrom<u8> for TileType {
    type Error = GridError;

    fn try_from(code: u8) -> Result<Self, GridError> {
        match code {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Walkable),
            2 => Ok(Self::Walls),
            3 => Ok(Self::Damageable),
            other => Err(GridError::UnknownTileType(other)),
        }
    }
}

/// tile 的表面材质，与玩法类型正交。
///
/// 编码：0=Empty，1=Filler，2=Grass，3=Bricks。
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "u8", try_from = "u8")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileMaterial {
    Empty,
    Filler,
    Grass,
    Bricks,
}

impl Default for TileMaterial {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<TileMaterial> for u8 {
    fn from(material: TileMaterial) -> Self {
        match material {
            TileMaterial::Empty => 0,
            TileMaterial::Filler => 1,
            TileMaterial::Grass => 2,
            TileMaterial::Bricks => 3,
        }
    }
}

impl TryFrom<u8> for TileMaterial {
    type Error = GridError;

    fn try_from(code: u8) -> Result<Self, GridError> {
        match code {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Filler),
            2 => Ok(Self::Grass),
            3 => Ok(Self::Bricks),
            other => Err(GridError::UnknownMaterial(other)),
        }
    }
}

/// 单个格子的数据。纯值类型，没有行为。
///
/// `layer`/`order` 是渲染层与层内绘制顺序的提示，网格只存不解释。
/// serde 字段名即存档 JSON 里的字段名。
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TileRecord {
    #[cfg_attr(feature = "serde", serde(rename = "coordX"))]
    pub x: u32,
    #[cfg_attr(feature = "serde", serde(rename = "coordY"))]
    pub y: u32,
    #[cfg_attr(feature = "serde", serde(rename = "tileType"))]
    pub tile_type: TileType,
    #[cfg_attr(feature = "serde", serde(rename = "tileMaterialType"))]
    pub material: TileMaterial,
    #[cfg_attr(feature = "serde", serde(rename = "tileLayer"))]
    pub layer: i32,
    #[cfg_attr(feature = "serde", serde(rename = "tileOrder"))]
    pub order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_type_codes_round_trip() {
        for tile_type in [
            TileType::Empty,
            TileType::Walkable,
            TileType::Walls,
            TileType::Damageable,
        ] {
            let code = u8::from(tile_type);
            assert_eq!(TileType::try_from(code), Ok(tile_type));
        }
    }

    #[test]
    fn material_codes_round_trip() {
        for material in [
            TileMaterial::Empty,
            TileMaterial::Filler,
            TileMaterial::Grass,
            TileMaterial::Bricks,
        ] {
            let code = u8::from(material);
            assert_eq!(TileMaterial::try_from(code), Ok(material));
        }
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        assert_eq!(TileType::try_from(4), Err(GridError::UnknownTileType(4)));
        assert_eq!(
            TileMaterial::try_from(200),
            Err(GridError::UnknownMaterial(200))
        );
    }

    #[test]
    fn default_record_is_an_empty_tile() {
        let record = TileRecord::default();
        assert_eq!(record.tile_type, TileType::Empty);
        assert_eq!(record.material, TileMaterial::Empty);
        assert_eq!(record.layer, 0);
        assert_eq!(record.order, 0);
    }
}
