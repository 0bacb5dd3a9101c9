//! The bicycle generator sub-assembly.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// A part the generator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorPart {
    /// Turned by the drive belt.
    Motor,
    /// Stores the charge.
    CarBattery,
    /// Links the rear wheel to the motor.
    DriveBelt,
    /// Motor to battery.
    JumperCables,
    /// Battery to power inverter.
    Wires,
    /// Starts the motor.
    Crank,
}

impl GeneratorPart {
    /// All parts, in assembly order.
    pub const ALL: [GeneratorPart; 6] = [
        Self::DriveBelt,
        Self::Motor,
        Self::Crank,
        Self::JumperCables,
        Self::CarBattery,
        Self::Wires,
    ];

    /// The item that serves as this part.
    pub fn item(&self) -> ItemId {
        match self {
            Self::Motor => ItemId::Motor,
            Self::CarBattery => ItemId::CarBattery,
            Self::DriveBelt => ItemId::DriveBelt,
            Self::JumperCables => ItemId::JumperCables,
            Self::Wires => ItemId::Wires,
            Self::Crank => ItemId::Crank,
        }
    }

    /// The part an item serves as, if any.
    pub fn from_item(item: ItemId) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.item() == item)
    }

    /// What the book says about this part.
    pub fn instructions(&self) -> &'static str {
        match self {
            Self::DriveBelt => {
                "Loop the drive belt around the bicycle's rear wheel and the motor's pulley."
            }
            Self::Motor => "Mount the motor behind the rear wheel so the belt stays taut.",
            Self::Crank => "Fit the crank to the motor shaft to get it turning the first time.",
            Self::JumperCables => "Clamp the jumper cables from the motor's leads to the car battery.",
            Self::CarBattery => {
                "The car battery stores the charge. Connect it to the motor with jumper cables."
            }
            Self::Wires => "Run the wires from the car battery to a power inverter.",
        }
    }
}

impl fmt::Display for GeneratorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.item().key())
    }
}

/// Attachment state of every part plus whether the generator was built.
///
/// The generator can only be marked built while every part is attached, so
/// `is_built() implies is_complete()` holds for every value built through
/// these methods. Deserialized values are checked by `Session::restore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generator {
    parts: BTreeMap<GeneratorPart, bool>,
    built: bool,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// A generator with nothing attached.
    pub fn new() -> Self {
        Self {
            parts: GeneratorPart::ALL.into_iter().map(|p| (p, false)).collect(),
            built: false,
        }
    }

    /// Mark a part attached. Returns false if it already was.
    pub fn attach(&mut self, part: GeneratorPart) -> bool {
        let attached = self.parts.entry(part).or_insert(false);
        if *attached {
            false
        } else {
            *attached = true;
            true
        }
    }

    /// Whether a part is attached.
    pub fn is_attached(&self, part: GeneratorPart) -> bool {
        self.parts.get(&part).copied().unwrap_or(false)
    }

    /// Parts not yet attached, in assembly order.
    pub fn missing(&self) -> Vec<GeneratorPart> {
        GeneratorPart::ALL
            .into_iter()
            .filter(|p| !self.is_attached(*p))
            .collect()
    }

    /// Whether every part is attached.
    pub fn is_complete(&self) -> bool {
        GeneratorPart::ALL.iter().all(|p| self.is_attached(*p))
    }

    /// Whether the generator has been built.
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Finish the build. Only succeeds once, and only when complete.
    pub fn build(&mut self) -> bool {
        if self.built || !self.is_complete() {
            return false;
        }
        self.built = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generator_is_empty() {
        let generator = Generator::new();
        assert!(!generator.is_complete());
        assert!(!generator.is_built());
        assert_eq!(generator.missing().len(), 6);
    }

    #[test]
    fn attach_is_idempotent() {
        let mut generator = Generator::new();
        assert!(generator.attach(GeneratorPart::Motor));
        assert!(!generator.attach(GeneratorPart::Motor));
        assert!(generator.is_attached(GeneratorPart::Motor));
        assert_eq!(generator.missing().len(), 5);
    }

    #[test]
    fn build_requires_every_part() {
        let mut generator = Generator::new();
        for part in &GeneratorPart::ALL[..5] {
            generator.attach(*part);
        }
        assert!(!generator.build());
        assert_eq!(generator.missing(), vec![GeneratorPart::Wires]);

        generator.attach(GeneratorPart::Wires);
        assert!(generator.build());
        assert!(generator.is_built());
        assert!(!generator.build());
    }

    #[test]
    fn part_item_mapping() {
        for part in GeneratorPart::ALL {
            assert_eq!(GeneratorPart::from_item(part.item()), Some(part));
        }
        assert_eq!(GeneratorPart::from_item(ItemId::Bicycle), None);
    }
}
