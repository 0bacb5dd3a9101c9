//! Item identifiers and the names players use for them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every item that can exist in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemId {
    /// A rusting but rideable bicycle.
    Bicycle,
    /// A bag of cheese crackers.
    #[serde(rename = "cheez-ees")]
    CheezEes,
    /// "How to Build Anything".
    Book,
    /// Scenery on the subway platform.
    WreckedBike,
    /// A can of FLAMING GOAT! energy drink.
    EnergyDrink,
    /// Generator part.
    Motor,
    /// Generator part.
    CarBattery,
    /// Generator part.
    DriveBelt,
    /// Generator part.
    JumperCables,
    /// Generator part.
    Wires,
    /// Generator part, hidden behind the store shelves.
    Crank,
    /// Flavor item in the bunker.
    Toolbox,
}

impl ItemId {
    /// All items, in a stable order.
    pub const ALL: [ItemId; 12] = [
        Self::Bicycle,
        Self::CheezEes,
        Self::Book,
        Self::WreckedBike,
        Self::EnergyDrink,
        Self::Motor,
        Self::CarBattery,
        Self::DriveBelt,
        Self::JumperCables,
        Self::Wires,
        Self::Crank,
        Self::Toolbox,
    ];

    /// The stable key shown to players, e.g. `car_battery`.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Bicycle => "bicycle",
            Self::CheezEes => "cheez-ees",
            Self::Book => "book",
            Self::WreckedBike => "wrecked_bike",
            Self::EnergyDrink => "energy_drink",
            Self::Motor => "motor",
            Self::CarBattery => "car_battery",
            Self::DriveBelt => "drive_belt",
            Self::JumperCables => "jumper_cables",
            Self::Wires => "wires",
            Self::Crank => "crank",
            Self::Toolbox => "toolbox",
        }
    }

    /// Whether the item can be picked up.
    pub fn is_takeable(&self) -> bool {
        !matches!(self, Self::WreckedBike)
    }

    /// Resolve player input to an item.
    ///
    /// Accepts the key, the key with spaces instead of underscores, and a few
    /// aliases ("bike", "can", "battery"). Leading articles are ignored.
    pub fn parse(input: &str) -> Option<Self> {
        let name = normalize(input);
        let item = match name.as_str() {
            "bicycle" | "bike" | "rusting bicycle" => Self::Bicycle,
            "cheez-ees" | "cheezees" | "cheez-ee" | "crackers" | "bag" => Self::CheezEes,
            "book" => Self::Book,
            "wrecked bike" | "wreck" | "wrecked bicycle" => Self::WreckedBike,
            "energy drink" | "can" | "drink" | "flaming goat" | "soda" => Self::EnergyDrink,
            "motor" => Self::Motor,
            "car battery" | "battery" => Self::CarBattery,
            "drive belt" | "belt" => Self::DriveBelt,
            "jumper cables" | "cables" | "jumper cable" => Self::JumperCables,
            "wires" | "wire" => Self::Wires,
            "crank" | "hand crank" => Self::Crank,
            "toolbox" | "tool box" | "tools" => Self::Toolbox,
            _ => return None,
        };
        Some(item)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Lowercase, drop leading articles, treat underscores as spaces.
pub(crate) fn normalize(input: &str) -> String {
    let lower = input.to_lowercase().replace('_', " ");
    let mut words: Vec<&str> = lower.split_whitespace().collect();
    while let Some(first) = words.first() {
        if matches!(*first, "the" | "a" | "an" | "some") && words.len() > 1 {
            words.remove(0);
        } else {
            break;
        }
    }
    words.join(" ")
}
