//! Quiz questions, flashcard answer texts and pure score tallying.
//! The DOM side (radio groups, badge, flashcards) lives in `page`.

/// One multiple-choice question. `answer` indexes into `options`.
#[derive(Debug, Clone, Copy)]
pub struct QuizItem {
    pub prompt: &'static str,
    pub options: [&'static str; 3],
    pub answer: usize,
}

pub const TOTAL_QUESTIONS: usize = STORY1_QUIZ.len() + STORY2_QUIZ.len();

pub const STORY1_QUIZ: &[QuizItem] = &[
    QuizItem {
        prompt: "Where did Whisker go?",
        options: ["A little shop", "A big ship", "A tall tree"],
        answer: 0,
    },
    QuizItem {
        prompt: "What did Whisker put in her backpack?",
        options: ["A snack", "A rock", "A clock"],
        answer: 0,
    },
    QuizItem {
        prompt: "Who ran the counter at the shop?",
        options: ["A chick", "A fish", "A duck"],
        answer: 0,
    },
    QuizItem {
        prompt: "Who did Whisker share with?",
        options: ["Shell the fish", "Chad the chipmunk", "Whit the whale"],
        answer: 0,
    },
    QuizItem {
        prompt: "How did Whisker feel?",
        options: ["It was a whizzy day", "It was a rainy day", "It was a sleepy day"],
        answer: 0,
    },
];

pub const STORY2_QUIZ: &[QuizItem] = &[
    QuizItem {
        prompt: "Where did Chip find the magic shell?",
        options: ["By the wharf", "In the woods", "On the hill"],
        answer: 0,
    },
    QuizItem {
        prompt: "What did the voice say?",
        options: ["Make a wish!", "Wash the dish!", "Catch the fish!"],
        answer: 0,
    },
    QuizItem {
        prompt: "What did the picnic bring?",
        options: ["Bread, chips, chowder", "Cake and tea", "Pasta and soup"],
        answer: 0,
    },
    QuizItem {
        prompt: "Who would enjoy the picnic?",
        options: ["His three friends", "Only Chip", "Strangers"],
        answer: 0,
    },
    QuizItem {
        prompt: "How did they feel at the end?",
        options: ["Thankful and happy", "Lost and chilly", "Sleepy and grumpy"],
        answer: 0,
    },
];

pub const STORY1_ANSWERS: &[&str] = &[
    "Whisker visited a little shop.",
    "She put a snack in her backpack.",
    "A chick ran the counter.",
    "She shared with Shell the fish.",
    "It was a whizzy day!",
];

pub const STORY2_ANSWERS: &[&str] = &[
    "He found it by the wharf.",
    "The voice said, \u{201c}Make a wish!\u{201d}",
    "Bread, chips, and chowder.",
    "His three friends.",
    "They were thankful and happy.",
];

/// Counts correct selections. `choices[i]` is the picked option index for
/// `items[i]`, or `None` when the question was left unanswered.
pub fn tally(choices: &[Option<usize>], items: &[QuizItem]) -> usize {
    choices
        .iter()
        .zip(items)
        .filter(|(choice, item)| **choice == Some(item.answer))
        .count()
}

pub fn is_perfect(score: usize) -> bool {
    score == TOTAL_QUESTIONS
}

/// Bootstrap badge tier for a combined score out of [`TOTAL_QUESTIONS`].
pub fn badge_class(score: usize) -> &'static str {
    if score == TOTAL_QUESTIONS {
        "text-bg-success"
    } else if score >= 6 {
        "text-bg-warning"
    } else {
        "text-bg-danger"
    }
}
