//! Command parsing for player input.

use strsim::jaro_winkler;

/// How many words a verb expects after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Extra words are ignored.
    None,
    /// An object may follow.
    Optional,
    /// An object must follow, otherwise the player is asked for one.
    Required,
}

/// Every verb the engine recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Move through an exit.
    Go,
    /// Describe the current location.
    Look,
    /// List carried items.
    Inventory,
    /// Pick an item up.
    Take,
    /// Look closely at something.
    Examine,
    /// Ride the bicycle.
    Ride,
    /// Read the book.
    Read,
    /// Shake, punch or kick the vending machine.
    Strike,
    /// Open the can.
    Open,
    /// Drink from the can.
    Drink,
    /// Talk to someone.
    Talk,
    /// Trade with the mutant leader.
    Trade,
    /// Build the generator.
    Build,
    /// Attach a part to the generator.
    Attach,
    /// Pedal the generator bike.
    Pedal,
    /// Turn the computer on.
    TurnOn,
    /// Insert the floppy disk.
    Insert,
    /// Consult the book about a part.
    Consult,
    /// Throw the cheez-ees at the rat people.
    Throw,
    /// Use an item.
    Use,
    /// Drop an item.
    Drop,
    /// Mark the game as saved.
    Save,
    /// Show the score.
    Score,
    /// Show the map.
    Map,
    /// Suggest what to do next.
    Hint,
    /// List commands.
    Help,
    /// End the game.
    Quit,
    /// Answer yes.
    Yes,
    /// Answer no.
    No,
}

/// Verb synonyms for command parsing.
const MOVE_VERBS: &[&str] = &["go", "move", "walk", "run", "head", "enter", "exit", "leave"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];
const TAKE_VERBS: &[&str] = &["take", "get", "grab", "pick"];
const EXAMINE_VERBS: &[&str] = &["examine", "x", "inspect", "search"];
const STRIKE_VERBS: &[&str] = &["shake", "punch", "kick"];
const TALK_VERBS: &[&str] = &["talk", "speak"];
const TRADE_VERBS: &[&str] = &["trade", "barter"];
const TURN_VERBS: &[&str] = &["turn", "switch"];
const THROW_VERBS: &[&str] = &["throw", "distract", "toss"];
const YES_WORDS: &[&str] = &["yes", "y"];

/// Compass shorthands expanded to exit keywords.
const COMPASS: &[(&str, &str)] = &[
    ("n", "north"),
    ("s", "south"),
    ("e", "east"),
    ("w", "west"),
    ("u", "up"),
    ("d", "down"),
];

impl Verb {
    /// Look up the verb a word stands for.
    pub fn from_word(word: &str) -> Option<Self> {
        let verb = match word {
            w if MOVE_VERBS.contains(&w) => Self::Go,
            w if LOOK_VERBS.contains(&w) => Self::Look,
            w if INVENTORY_VERBS.contains(&w) => Self::Inventory,
            w if TAKE_VERBS.contains(&w) => Self::Take,
            w if EXAMINE_VERBS.contains(&w) => Self::Examine,
            w if STRIKE_VERBS.contains(&w) => Self::Strike,
            w if TALK_VERBS.contains(&w) => Self::Talk,
            w if TRADE_VERBS.contains(&w) => Self::Trade,
            w if TURN_VERBS.contains(&w) => Self::TurnOn,
            w if THROW_VERBS.contains(&w) => Self::Throw,
            w if YES_WORDS.contains(&w) => Self::Yes,
            "ride" => Self::Ride,
            "read" => Self::Read,
            "open" => Self::Open,
            "drink" => Self::Drink,
            "build" => Self::Build,
            "attach" => Self::Attach,
            "pedal" => Self::Pedal,
            "insert" => Self::Insert,
            "consult" => Self::Consult,
            "use" => Self::Use,
            "drop" => Self::Drop,
            "save" => Self::Save,
            "score" => Self::Score,
            "map" => Self::Map,
            "hint" => Self::Hint,
            "help" => Self::Help,
            "quit" => Self::Quit,
            "no" => Self::No,
            _ => return None,
        };
        Some(verb)
    }

    /// How many words the verb expects.
    pub fn arity(&self) -> Arity {
        match self {
            Self::Look
            | Self::Inventory
            | Self::Save
            | Self::Score
            | Self::Map
            | Self::Hint
            | Self::Help
            | Self::Quit
            | Self::Yes
            | Self::No => Arity::None,
            Self::Trade | Self::Throw => Arity::Optional,
            _ => Arity::Required,
        }
    }

    /// Whether the verb only reports state.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Self::Look | Self::Inventory | Self::Score | Self::Map | Self::Hint | Self::Help
        )
    }

    /// The question asked when a required object is missing.
    pub fn question(&self, word: &str) -> String {
        match self {
            Self::Go => "Go where?".to_string(),
            Self::Take => "Take what?".to_string(),
            Self::Examine => "Examine what?".to_string(),
            Self::Talk => "Talk to whom?".to_string(),
            Self::Attach => "Attach what to what?".to_string(),
            Self::Consult => "Consult what about what?".to_string(),
            Self::TurnOn => "Turn on what?".to_string(),
            _ => format!("{} what?", capitalize(word)),
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Nothing was typed.
    Empty,
    /// A recognized verb with its object, if any.
    Act {
        /// The verb.
        verb: Verb,
        /// Words after the verb, with filler words removed.
        object: Option<String>,
    },
    /// A verb that needs an object was given none.
    Incomplete {
        /// The verb.
        verb: Verb,
        /// Clarifying question for the player.
        question: String,
    },
    /// The first word is not a verb.
    Unrecognized {
        /// The first word.
        token: String,
        /// The whole normalized input.
        input: String,
    },
}

/// Parse a player input string into a command.
pub fn parse_command(input: &str) -> Command {
    let lower = input.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let Some((&word, rest)) = words.split_first() else {
        return Command::Empty;
    };

    if let Some((_, direction)) = COMPASS.iter().find(|(short, _)| *short == word) {
        return Command::Act {
            verb: Verb::Go,
            object: Some((*direction).to_string()),
        };
    }

    let Some(verb) = Verb::from_word(word) else {
        return Command::Unrecognized {
            token: word.to_string(),
            input: words.join(" "),
        };
    };

    let object = match verb {
        Verb::Go => parse_go(word, rest),
        Verb::Look => return parse_look(rest),
        Verb::Take => strip_leading(rest, &["up"]),
        Verb::Talk => strip_leading(rest, &["to", "with"]),
        Verb::TurnOn => parse_turn_on(rest),
        _ => join(rest),
    };

    match (verb.arity(), object) {
        (Arity::None, _) => Command::Act { verb, object: None },
        (Arity::Required, None) => Command::Incomplete {
            verb,
            question: verb.question(word),
        },
        (_, object) => Command::Act { verb, object },
    }
}

/// Suggest a verb for a word that almost matches one.
pub fn suggest_verb(word: &str) -> Option<&'static str> {
    const THRESHOLD: f64 = 0.85;

    let known: &[&[&str]] = &[
        MOVE_VERBS,
        LOOK_VERBS,
        INVENTORY_VERBS,
        TAKE_VERBS,
        EXAMINE_VERBS,
        STRIKE_VERBS,
        TALK_VERBS,
        TRADE_VERBS,
        TURN_VERBS,
        THROW_VERBS,
        &[
            "ride", "read", "open", "drink", "build", "attach", "pedal", "insert", "consult",
            "use", "drop", "save", "score", "map", "hint", "help", "quit",
        ],
    ];

    let mut best: Option<(&'static str, f64)> = None;
    for candidate in known.iter().flat_map(|group| group.iter()) {
        // Short words match too many typos to be useful suggestions.
        if candidate.len() < 3 {
            continue;
        }
        let score = jaro_winkler(word, candidate);
        if score >= THRESHOLD && best.is_none_or(|(_, b)| score > b) {
            best = Some((*candidate, score));
        }
    }
    best.map(|(w, _)| w)
}

fn parse_go(word: &str, rest: &[&str]) -> Option<String> {
    if rest.is_empty() && matches!(word, "exit" | "leave") {
        return Some("out".to_string());
    }
    let object = strip_leading(rest, &["to"])?;
    match COMPASS.iter().find(|(short, _)| *short == object) {
        Some((_, direction)) => Some((*direction).to_string()),
        None => Some(object),
    }
}

fn parse_look(rest: &[&str]) -> Command {
    match strip_leading(rest, &["at"]) {
        Some(target) if target != "around" => Command::Act {
            verb: Verb::Examine,
            object: Some(target),
        },
        _ => Command::Act {
            verb: Verb::Look,
            object: None,
        },
    }
}

fn parse_turn_on(rest: &[&str]) -> Option<String> {
    let mut words: Vec<&str> = rest.to_vec();
    if words.first() == Some(&"on") {
        words.remove(0);
    } else if words.last() == Some(&"on") {
        words.pop();
    } else {
        // "turn computer" without "on" is not a switch-on.
        return None;
    }
    join(&words)
}

fn strip_leading(rest: &[&str], fillers: &[&str]) -> Option<String> {
    match rest.split_first() {
        Some((first, tail)) if fillers.contains(first) => join(tail),
        _ => join(rest),
    }
}

fn join(words: &[&str]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
