#![forbid(unsafe_code)]

//! tile 配置库：材质/类型 → 可视化配置（贴图路径等）。
//!
//! 编辑器和关卡构建器用它把选中的配置解析成 (类型, 材质)，
//! 再去调核心网格的 `set_tile` / `fill_all`。核心不依赖本 crate。
//! 当前选中项、滚动位置这类编辑器状态留在调用方，不进库。

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use level_core::{TileMaterial, TileType};

pub const DEFAULT_TILE_LIBRARY_PATH: &str = "config/tiles/library.json";

/// 一种材质的可视化配置。贴图按资源相对路径引用，例如 `tiles/bricks.png`。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TileMaterialConfig {
    pub material: TileMaterial,
    pub sprite_path: String,
}

/// 一个可刷的 tile 配置：玩法类型 + 材质配置。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TileConfig {
    pub tile_type: TileType,
    pub material_config: TileMaterialConfig,
}

impl TileConfig {
    /// 解析成可直接喂给网格编辑操作的 (类型, 材质)。
    pub fn paint(&self) -> (TileType, TileMaterial) {
        (self.tile_type, self.material_config.material)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TileConfigLibrary {
    pub configs: Vec<TileConfig>,
}

impl TileConfigLibrary {
    pub fn config_by_tile_type(&self, tile_type: TileType) -> Option<&TileConfig> {
        self.configs.iter().find(|c| c.tile_type == tile_type)
    }

    pub fn config_by_material(&self, material: TileMaterial) -> Option<&TileConfig> {
        self.configs
            .iter()
            .find(|c| c.material_config.material == material)
    }
}

pub fn save_tile_library_to_file(lib: &TileConfigLibrary, path: &str) -> Result<(), String> {
    let path = PathBuf::from(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }

    let text = serde_json::to_string_pretty(lib).map_err(|e| e.to_string())?;
    std::fs::write(path, text).map_err(|e| e.to_string())?;
    Ok(())
}

pub fn load_tile_library_from_file(path: &str) -> Result<TileConfigLibrary, String> {
    let path = PathBuf::from(path);
    if !path.exists() {
        return Ok(TileConfigLibrary::default());
    }
    let text = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str::<TileConfigLibrary>(&text).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_library() -> TileConfigLibrary {
        TileConfigLibrary {
            configs: vec![
                TileConfig {
                    tile_type: TileType::Walls,
                    material_config: TileMaterialConfig {
                        material: TileMaterial::Bricks,
                        sprite_path: "tiles/bricks.png".to_string(),
                    },
                },
                TileConfig {
                    tile_type: TileType::Walkable,
                    material_config: TileMaterialConfig {
                        material: TileMaterial::Grass,
                        sprite_path: "tiles/grass.png".to_string(),
                    },
                },
            ],
        }
    }

    #[test]
    fn finds_configs_by_type_and_material() {
        let lib = sample_library();

        let walls = lib.config_by_tile_type(TileType::Walls).unwrap();
        assert_eq!(walls.material_config.material, TileMaterial::Bricks);

        let grass = lib.config_by_material(TileMaterial::Grass).unwrap();
        assert_eq!(grass.tile_type, TileType::Walkable);

        assert!(lib.config_by_material(TileMaterial::Filler).is_none());
    }

    #[test]
    fn paint_resolves_to_grid_arguments() {
        let lib = sample_library();
        let config = lib.config_by_material(TileMaterial::Bricks).unwrap();
        assert_eq!(config.paint(), (TileType::Walls, TileMaterial::Bricks));
    }

    #[test]
    fn missing_library_file_loads_as_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");

        let lib = load_tile_library_from_file(path.to_string_lossy().as_ref()).unwrap();
        assert_eq!(lib, TileConfigLibrary::default());
    }

    #[test]
    fn library_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("tiles").join("library.json");
        let path = path.to_string_lossy().to_string();

        let lib = sample_library();
        save_tile_library_to_file(&lib, &path).unwrap();

        let loaded = load_tile_library_from_file(&path).unwrap();
        assert_eq!(loaded, lib);
    }
}
