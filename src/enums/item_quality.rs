use std::fmt;
use serde::{Serialize, Deserialize};

/// Item qualities in Team Fortress 2.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
#[serde(from = "u8", into = "u8")]
pub enum ItemQuality {
    Normal = 0,
    Genuine = 1,
    Vintage = 3,
    Unusual = 5,
    Unique = 6,
    Community = 7,
    Valve = 8,
    SelfMade = 9,
    Strange = 11,
    Haunted = 13,
    Collectors = 14,
    Decorated = 15,
    /// A quality not known to this crate.
    Unknown(u8),
}

impl From<u8> for ItemQuality {
    fn from(id: u8) -> Self {
        match id {
            0 => Self::Normal,
            1 => Self::Genuine,
            3 => Self::Vintage,
            5 => Self::Unusual,
            6 => Self::Unique,
            7 => Self::Community,
            8 => Self::Valve,
            9 => Self::SelfMade,
            11 => Self::Strange,
            13 => Self::Haunted,
            14 => Self::Collectors,
            15 => Self::Decorated,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for ItemQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfMade => write!(f, "Self-Made"),
            Self::Collectors => write!(f, "Collector's"),
            Self::Decorated => write!(f, "Decorated Weapon"),
            Self::Unknown(id) => write!(f, "Unknown({id})"),
            other => write!(f, "{other:?}"),
        }
    }
}

impl From<ItemQuality> for u8 {
    fn from(quality: ItemQuality) -> Self {
        match quality {
            ItemQuality::Normal => 0,
            ItemQuality::Genuine => 1,
            ItemQuality::Vintage => 3,
            ItemQuality::Unusual => 5,
            ItemQuality::Unique => 6,
            ItemQuality::Community => 7,
            ItemQuality::Valve => 8,
            ItemQuality::SelfMade => 9,
            ItemQuality::Strange => 11,
            ItemQuality::Haunted => 13,
            ItemQuality::Collectors => 14,
            ItemQuality::Decorated => 15,
            ItemQuality::Unknown(id) => id,
        }
    }
}
