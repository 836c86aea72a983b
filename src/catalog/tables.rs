use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::PaletteEntry;
use crate::styles::StyleId;

/// Furniture and palette for one style, as stored in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTable {
    pub furniture: Vec<String>,
    pub palette: Vec<PaletteEntry>,
}

impl StyleTable {
    fn new(furniture: &[&str], palette: &[(&str, &str)]) -> Self {
        Self {
            furniture: furniture.iter().map(|s| s.to_string()).collect(),
            palette: palette
                .iter()
                .map(|(hex, name)| PaletteEntry::new(*hex, *name))
                .collect(),
        }
    }
}

/// The built-in furniture and palette tables for all six styles
pub fn default_tables() -> BTreeMap<StyleId, StyleTable> {
    let mut tables = BTreeMap::new();

    tables.insert(
        StyleId::Modern,
        StyleTable::new(
            &[
                "🛋 Sleek sofa",
                "☕ Glass coffee table",
                "📚 Minimalist bookshelf",
                "🛏 Platform bed",
                "💡 LED floor lamp",
                "🪞 Frameless mirror",
            ],
            &[
                ("#F4F4F4", "Soft White 🕊"),
                ("#1A1A1A", "Charcoal Black 🖤"),
                ("#B0B0B0", "Urban Gray 🏙"),
                ("#3A86FF", "Electric Blue 🔷"),
                ("#FF6B6B", "Modern Coral ❤"),
            ],
        ),
    );

    tables.insert(
        StyleId::Traditional,
        StyleTable::new(
            &[
                "🪑 Wingback chair",
                "🍽 Wooden dining table",
                "🗄 Antique cabinet",
                "🕰 Grandfather clock",
                "🖼 Ornate picture frame",
                "🛋 Chesterfield sofa",
            ],
            &[
                ("#7C482B", "Earth Brown 🌰"),
                ("#EED9C4", "Antique Beige 🤎"),
                ("#5A6536", "Olive Green 🌿"),
                ("#C68642", "Terracotta 🍂"),
                ("#641E16", "Deep Maroon 🍷"),
            ],
        ),
    );

    tables.insert(
        StyleId::Industrial,
        StyleTable::new(
            &[
                "🛋 Metal-framed couch",
                "🪵 Reclaimed wood table",
                "📚 Pipe shelving",
                "💡 Edison bulb pendant",
                "🛠 Gear wall clock",
                "🚪 Sliding barn door",
            ],
            &[
                ("#333533", "Industrial Black ⚙"),
                ("#7D8597", "Iron Gray 🛠"),
                ("#A3A3A3", "Steel Silver 🧱"),
                ("#5C5C5C", "Smoky Gray 🔩"),
                ("#C4C4C4", "Concrete Light 🧱"),
            ],
        ),
    );

    tables.insert(
        StyleId::Scandinavian,
        StyleTable::new(
            &[
                "🪑 Plywood chair",
                "🏓 Simple white desk",
                "📚 Light wood shelf",
                "🛏 Linen bedding",
                "🌿 Indoor plant stand",
                "🕯 Minimalist candle holder",
            ],
            &[
                ("#FAFAFA", "Snow White ❄"),
                ("#DAD7CD", "Moss Mist 🌿"),
                ("#A3C1AD", "Pale Sage 🌱"),
                ("#C4D7E0", "Cool Sky 💧"),
                ("#F2E8CF", "Soft Sand 🌾"),
            ],
        ),
    );

    tables.insert(
        StyleId::Bohemian,
        StyleTable::new(
            &[
                "🧺 Rattan chair",
                "🌈 Patterned throw pillows",
                "🪔 Moroccan lantern",
                "🪴 Hanging plants",
                "🛏 Canopy bed",
                "🖼 Colorful wall tapestry",
            ],
            &[
                ("#FF9770", "Sunset Coral 🌅"),
                ("#FFCB77", "Amber Gold 🌞"),
                ("#A0613D", "Clay Brown 🧡"),
                ("#3E885B", "Forest Green 🌿"),
                ("#927FBF", "Lilac Stone 💜"),
            ],
        ),
    );

    tables.insert(
        StyleId::Minimalist,
        StyleTable::new(
            &[
                "🛋 Low-profile sofa",
                "🪟 Large windows",
                "🗄 Simple storage unit",
                "🛏 Platform bed",
                "💡 Pendant lighting",
                "🖼 Black & white prints",
            ],
            &[
                ("#FFFFFF", "Clean White ⚪"),
                ("#121212", "Graphite Black ⚫"),
                ("#D6D6D6", "Fog Gray ☁"),
                ("#A8A8A8", "Ash Gray 🪨"),
                ("#E0E0E0", "Pebble Silver 🌫"),
            ],
        ),
    );

    tables
}
