use super::card;
use crate::model::CardEntry;

pub(super) const CANADIAN: &[CardEntry] = &[
    // Winter & Snow
    card("Winter", "Deep snow", "Well that's just a little dusting, eh?", "What Americans call a blizzard", "❄️"),
    card("Winter", "Cold day", "Bit nippy out there, bud", "When it's -40°C", "🥶"),
    card("Winter", "Snowstorm", "Perfect day for Timmies run", "Nothing stops a Canadian", "⛄"),
    card("Winter", "Winter tires", "Mandatory survival equipment", "Not optional, ever", "🚗"),
    card("Winter", "Shoveling snow", "Daily cardio routine", "November through April", "⛷️"),

    // Tim Hortons
    card("Tim Hortons", "Double-double", "The nectar of life", "Two cream, two sugar", "☕"),
    card("Tim Hortons", "Timbits", "Breakfast of champions", "Donut holes, but Canadian", "🍩"),
    card("Tim Hortons", "Roll Up the Rim", "National holiday season", "More exciting than lottery", "🎲"),
    card("Tim Hortons", "Iced Capp", "Summer survival drink", "When it hits 15°C", "🥤"),

    // Polite Phrases
    card("Politeness", "Sorry", "Universal greeting, eh?", "Said 47 times daily minimum", "🙏"),
    card("Politeness", "Sorry about that", "When someone bumps into YOU", "Classic Canadian move", "😅"),
    card("Politeness", "Excuse me, sorry", "Double apology combo", "Extra polite mode", "🤝"),
    card("Politeness", "Thanks, eh?", "Gratitude with confirmation", "Seeking agreement always", "👍"),
    card("Politeness", "Sorry, not sorry", "Does not compute", "Not in Canadian vocabulary", "❌"),

    // Hockey
    card("Hockey", "Game night", "National religious observance", "Everything else cancelled", "🏒"),
    card("Hockey", "Hockey stick", "Canadian lightsaber", "More sacred than Tim's", "🥅"),
    card("Hockey", "Hat trick", "Three goals, free hats!", "Literally throw your hat", "🎩"),
    card("Hockey", "Checking", "Full-contact hugging", "How we show affection", "💥"),
    card("Hockey", "Zamboni", "Ice chariot of the gods", "Coolest job ever", "🧊"),

    // Slang
    card("Slang", "Eh?", "Right? Don't you agree? Huh?", "Sentence enhancer", "🗣️"),
    card("Slang", "Toque", "Winter head survival gear", "Americans call it 'beanie'", "🧢"),
    card("Slang", "Two-four", "24-pack of beer", "Also a holiday: May 24", "🍺"),
    card("Slang", "Loonie", "$1 coin with loon on it", "We named money after a bird", "💰"),
    card("Slang", "Toonie", "$2 coin (two loonies)", "Creative naming continues", "🪙"),
    card("Slang", "Canuck", "Canadian person", "Wear it with pride", "🇨🇦"),
    card("Slang", "Mountie", "RCMP officer", "Always gets their Tim's", "👮"),

    // Food
    card("Food", "Poutine", "Fries, gravy, cheese curds = heaven", "Quebec's gift to humanity", "🍟"),
    card("Food", "Kraft Dinner", "KD, not 'mac and cheese'", "National comfort food", "🧀"),
    card("Food", "Ketchup chips", "Superior chip flavor", "Americans are missing out", "🥔"),
    card("Food", "Butter tarts", "Sugary perfection", "Raisins optional (controversial)", "🥧"),
    card("Food", "Nanaimo bars", "No-bake chocolate glory", "Named after BC city", "🍫"),

    // Nature
    card("Nature", "Moose", "Majestic road hazard", "Bigger than your car", "🫎"),
    card("Nature", "Beaver", "National icon and engineer", "Dam impressive animal", "🦫"),
    card("Nature", "Geese", "Cobra chickens", "Aggressive Canadian diplomats", "🦆"),
    card("Nature", "Maple syrup", "Liquid gold", "Better than oil, honestly", "🍁"),
    card("Nature", "Northern Lights", "Sky's free light show", "Nature's screensaver", "🌌"),
];
