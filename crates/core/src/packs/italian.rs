use super::card;
use crate::model::CardEntry;

pub(super) const ITALIAN: &[CardEntry] = &[
    // Greetings
    card("Greetings", "Ciao", "Hi / Bye (informal)", "Works for hello and goodbye", "👋"),
    card("Greetings", "Buongiorno", "Good morning / Good day", "Until early afternoon", "☀️"),
    card("Greetings", "Buonasera", "Good evening", "From late afternoon on", "🌆"),
    card("Greetings", "Come stai?", "How are you? (informal)", "", "😊"),
    card("Greetings", "Come sta?", "How are you? (formal)", "Use with elders/respect", "🙏"),
    card("Greetings", "Piacere", "Nice to meet you", "", "🤝"),

    // Family
    card("Family", "la famiglia", "the family", "", "👨‍👩‍👧‍👦"),
    card("Family", "i suoceri", "in-laws (parents)", "", "👴👵"),
    card("Family", "il cognato / la cognata", "brother-in-law / sister-in-law", "", "👫"),
    card("Family", "i nipoti", "nieces and nephews / grandchildren", "Same word for both", "👶"),
    card("Family", "la nonna", "grandmother", "", "👵"),

    // Verbs - ESSERE / AVERE
    card("Verbs", "io sono", "I am", "Essere = to be", "🌟"),
    card("Verbs", "tu sei", "you are (informal)", "", "✨"),
    card("Verbs", "lui/lei è", "he/she is", "", "💫"),
    card("Verbs", "noi siamo", "we are", "", "🤗"),
    card("Verbs", "io ho", "I have", "Avere = to have; also for age: Ho 25 anni", "🎁"),
    card("Verbs", "tu hai", "you have", "", "🎈"),
    card("Verbs", "io parlo", "I speak", "Regular -are verb", "🗣️"),
    card("Verbs", "io vado", "I go", "Irregular verb", "🚶"),

    // Food
    card("Food", "il pranzo", "lunch", "Often the main meal", "🍝"),
    card("Food", "È buonissimo!", "It's delicious!", "", "😋"),
    card("Food", "Mi passi...?", "Can you pass me...?", "Polite request at table", "🙋"),
    card("Food", "l'acqua", "water", "Frizzante or naturale?", "💧"),
    card("Food", "Buon appetito", "Enjoy your meal", "", "🍽️"),

    // Phrases
    card("Phrases", "Non capisco", "I don't understand", "Super important!", "🤷"),
    card("Phrases", "Può ripetere?", "Can you repeat?", "Formal", "🔄"),
    card("Phrases", "Più piano, per favore", "Slower, please", "", "🐢"),
    card("Phrases", "Come si dice...?", "How do you say...?", "", "❓"),
    card("Phrases", "Sto imparando l'italiano", "I'm learning Italian", "They'll appreciate this!", "📚"),

    // Expressions
    card("Expressions", "Magari!", "I wish! / If only!", "", "🤞"),
    card("Expressions", "Dai!", "Come on!", "Encouragement or disbelief", "💪"),
    card("Expressions", "Salute!", "Cheers! / Bless you!", "", "🥂"),
    card("Expressions", "Davvero?", "Really?", "", "😲"),
];
