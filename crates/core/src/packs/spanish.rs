use super::card;
use crate::model::CardEntry;

pub(super) const SPANISH: &[CardEntry] = &[
    // Greetings & Family Basics
    card("Greetings", "¿Cómo estás?", "How are you? (informal)", "Use with family/friends", "👋"),
    card("Greetings", "¿Cómo está usted?", "How are you? (formal)", "Use with elders/respect", "🙏"),
    card("Greetings", "Mucho gusto", "Nice to meet you", "", "🤝"),
    card("Greetings", "¿Qué tal?", "What's up? / How's it going?", "Very casual", "😊"),

    // Family
    card("Family", "la familia", "the family", "", "👨‍👩‍👧‍👦"),
    card("Family", "los suegros", "in-laws (parents)", "", "👴👵"),
    card("Family", "el cuñado / la cuñada", "brother-in-law / sister-in-law", "", "👫"),
    card("Family", "los sobrinos", "nieces and nephews", "", "👶"),

    // Essential Verbs - SER
    card("Verbs", "yo soy", "I am", "Ser = permanent state", "🌟"),
    card("Verbs", "tú eres", "you are (informal)", "", "✨"),
    card("Verbs", "él/ella es", "he/she is", "", "💫"),
    card("Verbs", "nosotros somos", "we are", "", "🤗"),
    card("Verbs", "ellos/ellas son", "they are", "", "👥"),

    // Essential Verbs - ESTAR
    card("Verbs", "yo estoy", "I am", "Estar = temporary state/location", "📍"),
    card("Verbs", "tú estás", "you are (informal)", "", "🎯"),
    card("Verbs", "él/ella está", "he/she is", "", "🗺️"),
    card("Verbs", "nosotros estamos", "we are", "", "🏠"),

    // Essential Verbs - TENER
    card("Verbs", "yo tengo", "I have", "Also used for age: Tengo 25 años", "🎁"),
    card("Verbs", "tú tienes", "you have", "", "🎈"),
    card("Verbs", "él/ella tiene", "he/she has", "", "💝"),
    card("Verbs", "nosotros tenemos", "we have", "", "🎉"),

    // Essential Verbs - HABLAR
    card("Verbs", "yo hablo", "I speak", "Regular -ar verb", "🗣️"),
    card("Verbs", "tú hablas", "you speak", "", "💬"),
    card("Verbs", "él/ella habla", "he/she speaks", "", "💭"),

    // Essential Verbs - IR
    card("Verbs", "yo voy", "I go", "Irregular verb", "🚶"),
    card("Verbs", "tú vas", "you go", "", "🏃"),
    card("Verbs", "nosotros vamos", "we go", "", "👣"),

    // Food & Meals
    card("Food", "la comida", "the food / meal", "", "🍽️"),
    card("Food", "¿Qué comemos?", "What are we eating?", "", "🤔"),
    card("Food", "Está delicioso", "It's delicious", "", "😋"),
    card("Food", "¿Me pasas...?", "Can you pass me...?", "Polite request at table", "🙋"),
    card("Food", "el agua", "water", "Feminine but uses 'el'", "💧"),
    card("Food", "la sal y la pimienta", "salt and pepper", "", "🧂"),

    // Useful Phrases
    card("Phrases", "No entiendo", "I don't understand", "Super important!", "🤷"),
    card("Phrases", "¿Puedes repetir?", "Can you repeat?", "", "🔄"),
    card("Phrases", "Más despacio, por favor", "Slower, please", "", "🐢"),
    card("Phrases", "¿Cómo se dice...?", "How do you say...?", "", "❓"),
    card("Phrases", "Estoy aprendiendo español", "I'm learning Spanish", "They'll appreciate this!", "📚"),

    // Sentence Builders
    card("Sentences", "Me gusta...", "I like...", "Add noun: Me gusta la música", "❤️"),
    card("Sentences", "Me gustaría...", "I would like...", "More polite/conditional", "💕"),
    card("Sentences", "Necesito...", "I need...", "", "🎯"),
    card("Sentences", "Quiero...", "I want...", "", "🌟"),
    card("Sentences", "Puedo...", "I can...", "¿Puedo ayudar? = Can I help?", "💪"),

    // Common Expressions
    card("Expressions", "Claro que sí", "Of course", "", "👍"),
    card("Expressions", "Con permiso", "Excuse me (passing by)", "", "🚪"),
    card("Expressions", "Provecho", "Enjoy your meal", "Said when others are eating", "🌮"),
    card("Expressions", "Salud", "Cheers! / Bless you!", "", "🥂"),
    card("Expressions", "¿De verdad?", "Really?", "", "😲"),
];
