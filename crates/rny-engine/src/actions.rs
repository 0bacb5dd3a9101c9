//! Verb handlers.

use crate::generator::GeneratorPart;
use crate::item::{ItemId, normalize};
use crate::location::LocationId;
use crate::player::DrinkState;
use crate::response::{Response, ResponseKind};
use crate::session::{Ending, Session};

impl Session {
    pub(crate) fn inventory(&self) -> Response {
        let mut carried: Vec<String> = self
            .player
            .inventory
            .iter()
            .map(|item| match item {
                ItemId::EnergyDrink => match self.player.flags.energy_drink {
                    DrinkState::Closed => item.key().to_string(),
                    DrinkState::Opened => format!("{item} (opened)"),
                    DrinkState::Empty => format!("{item} (empty)"),
                },
                _ => match GeneratorPart::from_item(*item) {
                    Some(part) if self.player.generator.is_attached(part) => {
                        format!("{item} (attached)")
                    }
                    _ => item.key().to_string(),
                },
            })
            .collect();
        if self.player.flags.floppy_disk {
            carried.push("floppy disk".to_string());
        }

        if carried.is_empty() {
            Response::ok("Your inventory is empty.")
        } else {
            Response::ok(format!("You are carrying: {}", carried.join(", ")))
        }
    }

    pub(crate) fn take(&mut self, object: &str) -> Response {
        let Some(item) = ItemId::parse(object) else {
            return Response::refused(format!("There's no {} here.", normalize(object)));
        };
        if self.player.has_item(item) {
            return Response::refused(format!("You already have the {item}."));
        }
        if !self.here().items.contains(&item) {
            return Response::refused(format!("There's no {item} here."));
        }
        if !item.is_takeable() {
            return Response::refused(format!(
                "The {item} is a tangle of twisted metal. You leave it where it is."
            ));
        }

        self.here_mut().items.remove(&item);
        self.player.inventory.insert(item);
        log::info!("took {item} at {}", self.player.location);

        let bonus = match item {
            ItemId::CheezEes => self.award("Found the CHEEZ-EEs", 5),
            ItemId::Book => self.award("Found the book", 5),
            _ => String::new(),
        };
        Response::ok(format!("You picked up the {item}.{bonus}"))
    }

    /// Why a carried item must stay in the inventory, if it must.
    fn held_fast(&self, item: ItemId) -> Option<String> {
        let generator = &self.player.generator;
        match GeneratorPart::from_item(item) {
            Some(part) if generator.is_attached(part) => {
                Some(format!("The {item} is attached to the generator."))
            }
            None if item == ItemId::Bicycle
                && generator.missing().len() < GeneratorPart::ALL.len() =>
            {
                Some("The bicycle is part of the generator now.".to_string())
            }
            _ => None,
        }
    }

    pub(crate) fn drop_item(&mut self, object: &str) -> Response {
        let item = match ItemId::parse(object) {
            Some(item) if self.player.has_item(item) => item,
            _ => return Response::refused(format!("You don't have the {}.", normalize(object))),
        };
        if let Some(reason) = self.held_fast(item) {
            return Response::refused(reason);
        }

        self.player.inventory.remove(&item);
        self.here_mut().items.insert(item);
        log::info!("dropped {item} at {}", self.player.location);

        if item == ItemId::Bicycle && self.player.flags.riding_bicycle {
            self.player.flags.riding_bicycle = false;
            return Response::ok("You hop off and drop the bicycle.");
        }
        Response::ok(format!("You drop the {item}."))
    }

    pub(crate) fn examine(&mut self, object: &str) -> Response {
        let name = normalize(object);
        if let Some(item) = ItemId::parse(&name) {
            if self.player.has_item(item) || self.here().items.contains(&item) {
                return Response::ok(self.item_description(item));
            }
        }

        let here = self.here().id;
        let features = self.here().features;
        let text = match name.as_str() {
            "machine" | "vending machine" if features.vending_machine => {
                let mut text = "Pictures of fizzy drinks are on its side, as well as a cartoon goat. \
                                The battered and abused machine appears to be without power."
                    .to_string();
                if features.vending_stock == 0 {
                    text.push_str(" Its slots are all empty now.");
                }
                text
            }
            "computer" if features.computer => {
                let mut text = "It's an ancient machine with a disk drive and a large, rounded \
                                glass monitor. It's plugged into a power inverter."
                    .to_string();
                if self.player.flags.computer_powered {
                    text.push_str(" The power light glows a hopeful green.");
                }
                text
            }
            "inverter" | "power inverter" if features.power_inverter => {
                "An electrical device. If you could hook up a battery to it, you could use it to \
                 power this computer."
                    .to_string()
            }
            "shelves" | "shelf" if here == LocationId::Store => return self.search_shelves(),
            "mutants" | "mutant" | "tribe" | "people" if features.mutant_leader => {
                "A ragged crowd haggles over scrap and trinkets. One of them wears an elaborate \
                 headdress and seems to be in charge."
                    .to_string()
            }
            "leader" | "mutant leader" if features.mutant_leader => self.leader_description(),
            "rat people" | "rats" | "figures" if features.rat_people => {
                if self.player.flags.rat_people_distracted {
                    "Hunched shapes crouch in the dark, crunching happily on CHEEZ-EEs.".to_string()
                } else {
                    "You'd rather not look too closely. You can hear them chittering.".to_string()
                }
            }
            "junk" | "pile" | "junk pile" if here == LocationId::Scrapyard => {
                "Motors, batteries, belts and cables. If you knew what to build, everything you \
                 need might be here."
                    .to_string()
            }
            "generator" => self.generator_status(),
            "floppy" | "floppy disk" | "disk" if self.player.flags.floppy_disk => {
                "A 5.25-inch floppy disk on a string. The faded label reads 'ACTION CASTLE'."
                    .to_string()
            }
            "floppy" | "floppy disk" | "disk" if features.mutant_leader => {
                "The mutant leader wears it on a string around her neck.".to_string()
            }
            _ => {
                return Response::refused(format!("You don't see any {name} here to examine."));
            }
        };
        Response::ok(text)
    }

    fn item_description(&self, item: ItemId) -> String {
        let text = match item {
            ItemId::Bicycle => {
                "The bike has seen better days but it's still usable, barely. The chain is \
                 rusted and some of the teeth on its gears are broken."
            }
            ItemId::Book => {
                "The book is entitled: 'How to Build Anything'. On the cover it shows someone \
                 pedaling a bike to generate electricity. That might be useful to know!"
            }
            ItemId::CheezEes => {
                "The text on the unopened bag proclaims these are 'Delicious, crispy, \
                 cheese-shaped, cheese-flavored crackers.'"
            }
            ItemId::WreckedBike => {
                "Its frame is bent in half and both wheels are gone. Nothing worth salvaging."
            }
            ItemId::EnergyDrink => match self.player.flags.energy_drink {
                DrinkState::Closed => {
                    "A can of FLAMING GOAT! energy drink. A cartoon goat breathes fire on the \
                     label. It's still sealed."
                }
                DrinkState::Opened => "The FLAMING GOAT! can is open and fizzing faintly.",
                DrinkState::Empty => "An empty FLAMING GOAT! can. Someone might still want it.",
            },
            ItemId::Toolbox => "Yeah, you could build something with this. But what?",
            ItemId::Motor => "A small electric motor salvaged from a junked car.",
            ItemId::CarBattery => "A heavy car battery. It's flat, but it would hold a charge.",
            ItemId::DriveBelt => "A rubber drive belt, cracked but intact.",
            ItemId::JumperCables => "A pair of jumper cables with rusty clamps.",
            ItemId::Wires => "A bundle of insulated wires.",
            ItemId::Crank => "A hand crank that would fit a motor shaft.",
        };
        match GeneratorPart::from_item(item) {
            Some(part) if self.player.generator.is_attached(part) => {
                format!("{text} It's attached to the generator.")
            }
            _ => text.to_string(),
        }
    }

    fn search_shelves(&mut self) -> Response {
        if self.player.flags.shelves_examined {
            return Response::ok("Nothing left on the shelves but debris and detritus.");
        }
        self.player.flags.shelves_examined = true;
        self.here_mut().items.insert(ItemId::Crank);
        log::info!("crank revealed in the store");
        Response::ok(
            "You heave a toppled shelf aside. Underneath, half buried in debris, is a hand crank.",
        )
    }

    fn leader_description(&self) -> String {
        if self.player.flags.floppy_disk {
            "Her headdress is fashioned from yellow caution tape, spoons and old soda cans, now \
             with one more can fastened to it."
                .to_string()
        } else {
            "Her headdress is fashioned from yellow caution tape, spoons and old soda cans. \
             Around her neck she wears a floppy disk on a string."
                .to_string()
        }
    }

    fn generator_status(&self) -> String {
        let generator = &self.player.generator;
        if generator.is_built() {
            return "The bicycle is rigged up as a generator. Pedaling it should make electricity."
                .to_string();
        }
        let missing = generator.missing();
        if missing.len() == GeneratorPart::ALL.len() {
            return "You haven't started building a generator.".to_string();
        }
        format!(
            "A half-built generator. Still missing: {}",
            join_parts(&missing)
        )
    }

    pub(crate) fn ride(&mut self, object: &str) -> Response {
        if ItemId::parse(object) != Some(ItemId::Bicycle) {
            return Response::refused(format!("You can't ride the {}.", normalize(object)));
        }
        if !self.player.has_item(ItemId::Bicycle) {
            return Response::refused("You don't have a bicycle to ride.");
        }
        if self.held_fast(ItemId::Bicycle).is_some() {
            return Response::refused(
                "The bicycle is part of the generator now. It isn't going anywhere.",
            );
        }
        if self.player.flags.riding_bicycle {
            return Response::ok("You're already riding the bicycle.");
        }
        self.player.flags.riding_bicycle = true;
        Response::ok("It's a bumpy ride, but still faster than walking.")
    }

    pub(crate) fn read(&mut self, object: &str) -> Response {
        if ItemId::parse(object) != Some(ItemId::Book) {
            return Response::refused(format!("You can't read the {}.", normalize(object)));
        }
        if !self.player.has_item(ItemId::Book) {
            return Response::refused("You don't have a book to read.");
        }
        Response::ok(
            "The battery project requires a drive belt, a motor, a battery, a power inverter, \
             jumper cables, some wires and a crank for the motor. You may CONSULT this book \
             about each PART once you start the build.",
        )
    }

    pub(crate) fn strike(&mut self, object: &str) -> Response {
        let name = normalize(object);
        if !matches!(name.as_str(), "machine" | "vending machine") {
            return Response::refused(format!("Hitting the {name} won't help."));
        }
        let features = self.here().features;
        if !features.vending_machine {
            return Response::refused("There's no vending machine here to interact with.");
        }
        if features.vending_stock == 0 {
            return Response::refused(
                "You give the machine another whack. Something rattles inside, but nothing \
                 comes out.",
            );
        }

        self.here_mut().features.vending_stock -= 1;
        self.player.inventory.insert(ItemId::EnergyDrink);
        self.player.flags.energy_drink = DrinkState::Closed;
        let bonus = self.award("Got an energy drink", 5);
        Response::ok(format!(
            "A can drops out of the machine. You've obtained a can of FLAMING GOAT! energy \
             drink.{bonus}"
        ))
    }

    pub(crate) fn open(&mut self, object: &str) -> Response {
        if ItemId::parse(object) != Some(ItemId::EnergyDrink) {
            return Response::refused(format!("You can't open the {}.", normalize(object)));
        }
        if !self.player.has_item(ItemId::EnergyDrink) {
            return Response::refused("You don't have an energy drink to open.");
        }
        match self.player.flags.energy_drink {
            DrinkState::Closed => {
                self.player.flags.energy_drink = DrinkState::Opened;
                Response::ok("You pop the top of the can. It lets out a pleasant 'hssssss...'")
            }
            DrinkState::Opened | DrinkState::Empty => {
                Response::refused("The can is already open.")
            }
        }
    }

    pub(crate) fn drink(&mut self, object: &str) -> Response {
        if ItemId::parse(object) != Some(ItemId::EnergyDrink) {
            return Response::refused(format!("You can't drink the {}.", normalize(object)));
        }
        if !self.player.has_item(ItemId::EnergyDrink) {
            return Response::refused("You don't have an energy drink to drink.");
        }
        match self.player.flags.energy_drink {
            DrinkState::Closed => Response::refused("You need to open the can first."),
            DrinkState::Opened => {
                self.player.flags.energy_drink = DrinkState::Empty;
                Response::ok("It's warm and sugary sweet. You feel queasy, but invigorated.")
            }
            DrinkState::Empty => Response::refused("The can is empty."),
        }
    }

    pub(crate) fn talk(&mut self, object: &str) -> Response {
        let name = normalize(object);
        let features = self.here().features;
        let text = match name.as_str() {
            "mutants" | "mutant" | "tribe" | "people" if features.mutant_leader => {
                if self.player.flags.floppy_disk {
                    "The mutants nod at you. Word of your trade has spread."
                } else {
                    "One of them steps forward. Based on her elaborate headdress, she appears to \
                     be the leader of the mutant tribe. 'Have you something to barter?'"
                }
            }
            "leader" | "mutant leader" if features.mutant_leader => {
                return Response::ok(self.leader_description());
            }
            "rat people" | "rats" | "figures" if features.rat_people => {
                "The only answer is a hungry chittering."
            }
            _ => return Response::refused(format!("There's no {name} here to talk to.")),
        };
        Response::ok(text)
    }

    pub(crate) fn trade(&mut self, _object: &str) -> Response {
        if !self.here().features.mutant_leader {
            return Response::refused("There's no one here to trade with.");
        }
        if self.player.flags.floppy_disk {
            return Response::refused("The mutant leader has nothing left to trade.");
        }
        if !self.player.has_item(ItemId::EnergyDrink) {
            return Response::refused("You don't have anything to trade.");
        }

        self.player.inventory.remove(&ItemId::EnergyDrink);
        self.player.flags.floppy_disk = true;
        log::info!(
            "traded {:?} energy drink for the floppy disk",
            self.player.flags.energy_drink
        );
        match self.player.flags.energy_drink {
            DrinkState::Closed => {
                let bonus = self.award("Traded an unopened energy drink", 10);
                Response::ok(format!(
                    "'Unopened?! Amazing!' The mutant leader gives you her necklace and cracks \
                     open the soda for a refreshing treat.{bonus}"
                ))
            }
            DrinkState::Opened => {
                let bonus = self.award("Traded an energy drink", 5);
                Response::ok(format!(
                    "'Already opened? Well, take this.' The mutant leader gives you the floppy \
                     disk from around her neck and gulps down what's left of the soda.{bonus}"
                ))
            }
            DrinkState::Empty => {
                let bonus = self.award("Traded an energy drink", 5);
                Response::ok(format!(
                    "'Awww...it's empty. Well, take this.' The mutant leader gives you the \
                     floppy disk from around her neck and begins fastening the can to her \
                     headdress.{bonus}"
                ))
            }
        }
    }

    pub(crate) fn build(&mut self, object: &str) -> Response {
        if normalize(object) != "generator" {
            return Response::refused(format!(
                "You don't know how to build a {}.",
                normalize(object)
            ));
        }
        if self.player.generator.is_built() {
            return Response::ok(
                "The generator is already built. You're not missing anything.",
            );
        }
        if !self.player.has_item(ItemId::Bicycle) {
            return Response::refused("You need a bicycle to build the generator around.");
        }

        for part in GeneratorPart::ALL {
            if self.player.has_item(part.item()) {
                self.player.generator.attach(part);
            }
        }
        self.player.flags.riding_bicycle = false;
        if !self.player.generator.build() {
            let missing = self.player.generator.missing();
            return Response::refused(format!(
                "You don't have all the necessary parts. You're missing: {}",
                join_parts(&missing)
            ));
        }

        log::info!("generator built");
        let bonus = self.award("Built the generator", 10);
        Response::ok(format!(
            "Using the instructions from the book, you begin to assemble the generator...\n\
             You attach the drive belt to the bicycle's rear wheel and the motor...\n\
             You fit the crank to the motor shaft...\n\
             Next, you connect the motor to the car battery using the jumper cables...\n\
             Finally, you run wires from the battery, ready for a power inverter...\n\
             Success! You've built a bicycle-powered generator!{bonus}"
        ))
    }

    pub(crate) fn attach(&mut self, object: &str) -> Response {
        let Some((part_name, target)) = object.split_once(" to ") else {
            return Response::invalid("Attach what to what?");
        };
        if !matches!(normalize(target).as_str(), "generator" | "bicycle" | "bike") {
            return Response::refused("Generator parts go on the bicycle.");
        }
        let Some(part) = ItemId::parse(part_name).and_then(GeneratorPart::from_item) else {
            return Response::refused(format!(
                "The {} isn't part of the generator.",
                normalize(part_name)
            ));
        };
        if !self.player.has_item(part.item()) {
            return Response::refused(format!("You don't have the {part}."));
        }
        if !self.player.has_item(ItemId::Bicycle) {
            return Response::refused("You need the bicycle to attach parts to.");
        }
        if !self.player.generator.attach(part) {
            return Response::refused(format!("The {part} is already attached."));
        }

        self.player.flags.riding_bicycle = false;
        log::info!("attached {part}");
        let mut text = format!("You attach the {part} to the bicycle. {}", part.instructions());
        if self.player.generator.is_complete() {
            text.push_str("\nEvery part is in place. You could BUILD the GENERATOR now.");
        }
        Response::ok(text)
    }

    pub(crate) fn pedal(&mut self, object: &str) -> Response {
        if !matches!(
            normalize(object).as_str(),
            "bike" | "bicycle" | "generator"
        ) {
            return Response::refused(format!("You can't pedal the {}.", normalize(object)));
        }
        if !self.player.generator.is_built() {
            return Response::refused("You need to build the generator first.");
        }
        if self.player.flags.computer_powered {
            return Response::ok("The battery is already fully charged.");
        }
        if !self.here().features.power_inverter {
            return Response::refused(
                "You pedal furiously, but there's nothing here to feed the power into.",
            );
        }

        self.player.flags.computer_powered = true;
        let bonus = self.award("Charged the battery", 10);
        Response::ok(format!(
            "With some effort, you get the chain moving, which turns the motor and generates \
             enough electricity to charge the battery.{bonus}"
        ))
    }

    pub(crate) fn turn_on(&mut self, object: &str) -> Response {
        if normalize(object) != "computer" {
            return Response::refused(format!("You can't turn on the {}.", normalize(object)));
        }
        if !self.here().features.computer {
            return Response::refused("There's no computer here to turn on.");
        }
        if !self.player.flags.computer_powered {
            return Response::refused(
                "The computer has no power. You'll need to find a way to turn it on first.",
            );
        }
        if !self.player.flags.floppy_disk {
            return Response::refused(
                "You flick a switch and the machine chirps, beeps and whirs...but that's it.",
            );
        }

        let bonus = self.config.final_bonus(self.player.flags.save_used);
        let bonus_text = self.award("Booted the computer", bonus);
        self.end(Ending::Won);
        Response::with_kind(
            ResponseKind::TerminalSuccess,
            format!(
                "You flick a switch and the machine chirps, beeps and whirs...then reads the \
                 floppy disk inside its drive. The screen flashes with a message:\n\
                 WELCOME TO...ACTION CASTLE!\n\
                 YOU ARE STANDING IN A SMALL COTTAGE. THERE IS A FISHING POLE HERE. A DOOR LEADS \
                 OUTSIDE.\n{}\n\
                 Congratulations! You've completed your journey and unlocked the secrets of the \
                 old world!\nYour final score: {}",
                bonus_text.trim(),
                self.score.total()
            ),
        )
    }

    pub(crate) fn insert(&mut self, object: &str) -> Response {
        if !matches!(normalize(object).as_str(), "floppy" | "floppy disk" | "disk") {
            return Response::refused(format!("You can't insert the {}.", normalize(object)));
        }
        if !self.player.flags.floppy_disk {
            return Response::refused("You don't have a floppy disk to insert.");
        }
        if !self.here().features.computer {
            return Response::refused("There's nowhere to insert a floppy disk here.");
        }
        Response::ok("You insert the floppy disk into the drive.")
    }

    pub(crate) fn consult(&mut self, object: &str) -> Response {
        let Some((book, topic)) = object.split_once("about") else {
            return Response::invalid("Consult what about what?");
        };
        if ItemId::parse(book.trim()) != Some(ItemId::Book) || topic.trim().is_empty() {
            return Response::invalid("Consult what about what?");
        }
        if !self.player.has_item(ItemId::Book) {
            return Response::refused("You don't have the book to consult.");
        }

        let topic = normalize(topic);
        match ItemId::parse(&topic).and_then(GeneratorPart::from_item) {
            Some(part) => Response::ok(format!("The book says: {}", part.instructions())),
            None if topic == "generator" => self.read("book"),
            None => Response::ok(format!("The book has nothing to say about the {topic}.")),
        }
    }

    pub(crate) fn throw(&mut self, object: &str) -> Response {
        let item = if object.is_empty() {
            Some(ItemId::CheezEes)
        } else {
            ItemId::parse(object)
        };
        let item = match item {
            Some(item) if self.player.has_item(item) => item,
            Some(item) => return Response::refused(format!("You don't have the {item}.")),
            None => return Response::refused(format!("You don't have the {}.", normalize(object))),
        };
        if let Some(reason) = self.held_fast(item) {
            return Response::refused(reason);
        }

        let here = self.player.location;
        if item == ItemId::CheezEes
            && self.here().features.rat_people
            && !self.player.flags.rat_people_distracted
        {
            return self.distract(here);
        }

        self.player.inventory.remove(&item);
        self.here_mut().items.insert(item);
        if item == ItemId::Bicycle {
            self.player.flags.riding_bicycle = false;
        }
        Response::ok(format!("You throw the {item}. It lands on the ground nearby."))
    }

    pub(crate) fn use_item(&mut self, object: &str) -> Response {
        let name = normalize(object);
        match name.as_str() {
            "machine" | "vending machine" => return self.strike("machine"),
            "computer" => return self.turn_on("computer"),
            "floppy" | "floppy disk" | "disk" => return self.insert("floppy"),
            "generator" => return self.pedal("generator"),
            _ => {}
        }
        match ItemId::parse(&name) {
            Some(ItemId::Bicycle) if self.player.generator.is_built() => self.pedal("bike"),
            Some(ItemId::Bicycle) => self.ride("bicycle"),
            Some(ItemId::Book) => self.read("book"),
            Some(ItemId::EnergyDrink) if self.player.flags.energy_drink == DrinkState::Closed => {
                self.open("can")
            }
            Some(ItemId::EnergyDrink) => self.drink("can"),
            Some(ItemId::CheezEes) => self.throw("cheez-ees"),
            Some(ItemId::Toolbox) => {
                Response::ok("Yeah, you could build something with this. But what?")
            }
            Some(item) if GeneratorPart::from_item(item).is_some() => {
                Response::ok(format!("Try ATTACH {} TO BICYCLE.", item.key().to_uppercase()))
            }
            _ => Response::refused(format!("You can't use the {name}.")),
        }
    }

    pub(crate) fn hint(&self) -> Response {
        let player = &self.player;
        let flags = player.flags;
        let generator = &player.generator;
        let carried_or_attached = |part: GeneratorPart| {
            player.has_item(part.item()) || generator.is_attached(part)
        };

        let text = if !player.has_item(ItemId::Bicycle) {
            "There was a rusting bicycle in the ruins. It might be faster than walking.".to_string()
        } else if !player.has_item(ItemId::Book) && !generator.is_built() {
            "The store might have something worth reading.".to_string()
        } else if !player.visited.contains(&LocationId::DarkTunnel) {
            "The dark tunnel is guarded. Ride through fast, or bring something to distract \
             whatever lives there."
                .to_string()
        } else if !flags.floppy_disk && !player.has_item(ItemId::EnergyDrink) {
            "That vending machine on the platform has taken a lot of abuse. One more kick won't \
             hurt."
                .to_string()
        } else if !flags.floppy_disk {
            "The mutants at the market like to barter. A sealed can is worth more.".to_string()
        } else if !carried_or_attached(GeneratorPart::Crank) && !flags.shelves_examined {
            "The book mentions a crank. Did you search the shelves in the store?".to_string()
        } else if !GeneratorPart::ALL.into_iter().all(carried_or_attached) {
            let missing: Vec<_> = GeneratorPart::ALL
                .into_iter()
                .filter(|p| !carried_or_attached(*p))
                .collect();
            format!(
                "You still need parts for the generator: {}",
                join_parts(&missing)
            )
        } else if !generator.is_built() {
            "You have every part. Try BUILD GENERATOR.".to_string()
        } else if !flags.computer_powered {
            "A generator needs somewhere to send its power. Look for a power inverter and pedal."
                .to_string()
        } else {
            "Everything is ready. Turn on the computer.".to_string()
        };
        Response::ok(text)
    }
}

fn join_parts(parts: &[GeneratorPart]) -> String {
    parts
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
