use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of icons the page knows how to draw.
///
/// `iconKey` fields in the document are plain strings and are never checked
/// against this list; a key that doesn't parse simply renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconKey {
    Activity,
    Dna,
    Microscope,
    Cpu,
    TestTube,
    Leaf,
    Layers,
    TrendingUp,
}

impl IconKey {
    pub const ALL: [IconKey; 8] = [
        IconKey::Activity,
        IconKey::Dna,
        IconKey::Microscope,
        IconKey::Cpu,
        IconKey::TestTube,
        IconKey::Leaf,
        IconKey::Layers,
        IconKey::TrendingUp,
    ];

    /// Fallback used for new items when the document lists no icon keys
    pub const DEFAULT: IconKey = IconKey::Dna;

    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::Activity => "Activity",
            IconKey::Dna => "Dna",
            IconKey::Microscope => "Microscope",
            IconKey::Cpu => "Cpu",
            IconKey::TestTube => "TestTube",
            IconKey::Leaf => "Leaf",
            IconKey::Layers => "Layers",
            IconKey::TrendingUp => "TrendingUp",
        }
    }

    /// Resolve a stored key. Case-sensitive, like the renderer's lookup.
    pub fn parse(key: &str) -> Option<IconKey> {
        Self::ALL.iter().copied().find(|icon| icon.as_str() == key)
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
