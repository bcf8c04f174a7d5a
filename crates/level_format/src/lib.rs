#![forbid(unsafe_code)]

//! 关卡存档（JSON）的编码/解码与文件读写。
//!
//! 文档形状就是 `LevelGrid` 的 serde 表示。解码在解析之后补结构校验：
//! - 宽高必须为正
//! - `levelTiles` 数量必须等于 width * height
//! - 枚举编码越界在解析阶段即失败
//!
//! 逐格坐标与存储顺序一律信任文档本身，不按宽高重新推导，
//! 手改过顺序的存档也能原样往返。

use std::fmt;
use std::path::PathBuf;

use level_core::LevelGrid;

/// 约定的关卡存档目录。具体文件名（含时间戳后缀）由调用方拼。
pub const DEFAULT_LEVEL_DIR: &str = "data/levels";

/// 关卡存档错误。
#[derive(Debug)]
pub enum LevelFileError {
    /// JSON 编码/解析失败。
    Json(String),
    /// 文档能解析，但不满足网格约束。
    Malformed(String),
    /// 文件读写失败。
    Io(std::io::Error),
}

impl fmt::Display for LevelFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(reason) => write!(f, "invalid level JSON: {reason}"),
            Self::Malformed(reason) => write!(f, "malformed level document: {reason}"),
            Self::Io(err) => write!(f, "level file io error: {err}"),
        }
    }
}

impl std::error::Error for LevelFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

pub fn encode_level_json(grid: &LevelGrid) -> Result<String, LevelFileError> {
    serde_json::to_string(grid).map_err(|e| LevelFileError::Json(e.to_string()))
}

pub fn encode_level_json_pretty(grid: &LevelGrid) -> Result<String, LevelFileError> {
    serde_json::to_string_pretty(grid).map_err(|e| LevelFileError::Json(e.to_string()))
}

pub fn decode_level_json(text: &str) -> Result<LevelGrid, LevelFileError> {
    let grid: LevelGrid =
        serde_json::from_str(text).map_err(|e| LevelFileError::Json(e.to_string()))?;

    let (width, height) = grid.size();
    if width == 0 || height == 0 {
        return Err(LevelFileError::Malformed(format!(
            "level size {width}x{height} is invalid"
        )));
    }

    let want = (width as usize) * (height as usize);
    let got = grid.tiles().len();
    if got != want {
        return Err(LevelFileError::Malformed(format!(
            "expected {want} tiles for a {width}x{height} level, document has {got}"
        )));
    }

    Ok(grid)
}

/// 把关卡写到 `path`（带缩进，方便人看/手改）。父目录不存在时自动建。
pub fn save_level_to_file(grid: &LevelGrid, path: &str) -> Result<(), LevelFileError> {
    let path = PathBuf::from(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(LevelFileError::Io)?;
    }

    let text = encode_level_json_pretty(grid)?;
    std::fs::write(path, text).map_err(LevelFileError::Io)?;
    Ok(())
}

pub fn load_level_from_file(path: &str) -> Result<LevelGrid, LevelFileError> {
    let text = std::fs::read_to_string(path).map_err(LevelFileError::Io)?;
    decode_level_json(&text)
}
