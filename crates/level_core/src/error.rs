use std::fmt;

/// 网格操作错误。全部为同步本地失败，核心内部不重试、不打日志。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// 构造参数非法：宽或高为 0。
    InvalidSize { width: u32, height: u32 },
    /// 坐标没有对应的 tile（越界，或存档被改坏后缺格）。
    TileNotFound { x: u32, y: u32 },
    /// 存档里的 tile 类型编码超出取值范围。
    UnknownTileType(u8),
    /// 存档里的材质编码超出取值范围。
    UnknownMaterial(u8),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "level size {width}x{height} is invalid")
            }
            Self::TileNotFound { x, y } => {
                write!(f, "no tile at ({x}, {y})")
            }
            Self::UnknownTileType(code) => {
                write!(f, "unknown tile type code {code}")
            }
            Self::UnknownMaterial(code) => {
                write!(f, "unknown tile material code {code}")
            }
        }
    }
}

impl std::error::Error for GridError {}
