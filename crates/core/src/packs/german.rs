use super::card;
use crate::model::CardEntry;

pub(super) const GERMAN: &[CardEntry] = &[
    // Greetings
    card("Greetings", "Hallo", "Hello", "", "👋"),
    card("Greetings", "Guten Morgen", "Good morning", "", "☀️"),
    card("Greetings", "Guten Abend", "Good evening", "", "🌆"),
    card("Greetings", "Wie geht's?", "How are you? (informal)", "Short for: Wie geht es dir?", "😊"),
    card("Greetings", "Wie geht es Ihnen?", "How are you? (formal)", "Sie/Ihnen for elders/respect", "🙏"),
    card("Greetings", "Freut mich", "Nice to meet you", "", "🤝"),
    card("Greetings", "Tschüss", "Bye", "Informal", "🙋"),

    // Family
    card("Family", "die Familie", "the family", "", "👨‍👩‍👧‍👦"),
    card("Family", "die Schwiegereltern", "in-laws (parents)", "", "👴👵"),
    card("Family", "der Schwager / die Schwägerin", "brother-in-law / sister-in-law", "", "👫"),
    card("Family", "die Neffen und Nichten", "nephews and nieces", "", "👶"),

    // Verbs - SEIN / HABEN
    card("Verbs", "ich bin", "I am", "Sein = to be", "🌟"),
    card("Verbs", "du bist", "you are (informal)", "", "✨"),
    card("Verbs", "er/sie ist", "he/she is", "", "💫"),
    card("Verbs", "wir sind", "we are", "", "🤗"),
    card("Verbs", "ich habe", "I have", "Haben = to have", "🎁"),
    card("Verbs", "du hast", "you have", "", "🎈"),
    card("Verbs", "ich spreche", "I speak", "Sprechen: e changes to i for du/er", "🗣️"),
    card("Verbs", "ich gehe", "I go", "", "🚶"),

    // Food
    card("Food", "das Essen", "the food / meal", "", "🍽️"),
    card("Food", "Das schmeckt gut!", "That tastes good!", "", "😋"),
    card("Food", "Kannst du mir ... geben?", "Can you pass me ...?", "Polite request at table", "🙋"),
    card("Food", "das Wasser", "water", "Mit oder ohne Kohlensäure?", "💧"),
    card("Food", "Guten Appetit", "Enjoy your meal", "", "🥨"),

    // Phrases
    card("Phrases", "Ich verstehe nicht", "I don't understand", "Super important!", "🤷"),
    card("Phrases", "Kannst du das wiederholen?", "Can you repeat that?", "", "🔄"),
    card("Phrases", "Langsamer, bitte", "Slower, please", "", "🐢"),
    card("Phrases", "Wie sagt man...?", "How do you say...?", "", "❓"),
    card("Phrases", "Ich lerne Deutsch", "I'm learning German", "They'll appreciate this!", "📚"),

    // Expressions
    card("Expressions", "Na klar!", "Of course!", "", "👍"),
    card("Expressions", "Prost!", "Cheers!", "Look each other in the eye", "🍺"),
    card("Expressions", "Gesundheit!", "Bless you!", "", "🤧"),
    card("Expressions", "Wirklich?", "Really?", "", "😲"),
];
