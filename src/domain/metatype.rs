use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Java-level kind of a declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metatype {
    Interface,
    Class,
    AbstractClass,
    Enum,
}

impl Metatype {
    /// All metatypes in template order.
    pub const ALL: [Metatype; 4] = [
        Metatype::Interface,
        Metatype::Class,
        Metatype::AbstractClass,
        Metatype::Enum,
    ];

    /// Name as stored in the `metatypes` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metatype::Interface => "interface",
            Metatype::Class => "class",
            Metatype::AbstractClass => "abstract_class",
            Metatype::Enum => "enum",
        }
    }
}

impl fmt::Display for Metatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metatype {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metatype::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown metatype: {}", s))
    }
}
