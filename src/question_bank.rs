//! Static situational question bank.
//!
//! Questions are presented in table order. Option order is the order shown to
//! the participant; scores are deliberately not sorted so the best answer is
//! not always in the same position.

use crate::models::{Question, QuestionOption, Trait};

const fn opt(score: u8, text: &'static str) -> QuestionOption {
    QuestionOption { score, text }
}

pub static QUESTIONS: [Question; 10] = [
    Question {
        id: 1,
        r#trait: Trait::Empathy,
        question_text: "A classmate who usually talks a lot has been quiet and withdrawn all week. What do you do?",
        options: &[
            opt(1, "Mention it to a teacher and let them handle it."),
            opt(3, "Find a quiet moment to ask how they are and listen without judging."),
            opt(0, "Leave them alone; it is not your business."),
            opt(2, "Invite them to join your group at lunch."),
        ],
    },
    Question {
        id: 2,
        r#trait: Trait::Decisiveness,
        question_text: "Your team must pick a project topic by the end of the day, but everyone keeps debating. What do you do?",
        options: &[
            opt(2, "Suggest a quick vote among the top two ideas."),
            opt(0, "Wait; someone else will eventually decide."),
            opt(3, "Summarise the options, propose one with clear reasons and ask for agreement."),
            opt(1, "Pick a topic at random to end the discussion."),
        ],
    },
    Question {
        id: 3,
        r#trait: Trait::Resilience,
        question_text: "You prepared hard for an exam but scored much lower than you expected. How do you respond?",
        options: &[
            opt(0, "Decide the subject is simply not for you and stop trying."),
            opt(3, "Review the mistakes, ask for help where needed and plan your next preparation."),
            opt(1, "Feel upset for several days and avoid thinking about it."),
            opt(2, "Talk to a friend about it and try again next time."),
        ],
    },
    Question {
        id: 4,
        r#trait: Trait::Courage,
        question_text: "You see a group of students mocking a younger student near the school gate. What do you do?",
        options: &[
            opt(3, "Calmly step in, support the younger student and report it to a teacher."),
            opt(1, "Walk past but feel bad about it later."),
            opt(2, "Inform a teacher or guard immediately."),
            opt(0, "Join in so the group does not turn on you."),
        ],
    },
    Question {
        id: 5,
        r#trait: Trait::Integrity,
        question_text: "The shopkeeper gives you back more change than you are owed. What do you do?",
        options: &[
            opt(2, "Return it after thinking about it for a while."),
            opt(0, "Keep it; it was their mistake."),
            opt(1, "Keep it this time but promise yourself to be honest next time."),
            opt(3, "Point out the mistake right away and return the extra money."),
        ],
    },
    Question {
        id: 6,
        r#trait: Trait::Teamwork,
        question_text: "In a group assignment one member is not contributing. What do you do?",
        options: &[
            opt(1, "Quietly do their part yourself."),
            opt(3, "Talk to them, understand the problem and share the work so everyone contributes."),
            opt(2, "Ask the group to divide the remaining tasks clearly."),
            opt(0, "Complain about them to others."),
        ],
    },
    Question {
        id: 7,
        r#trait: Trait::Adaptability,
        question_text: "Your family moves to a new town in the middle of the school year. How do you handle it?",
        options: &[
            opt(3, "Explore the new place, join activities and make new friends."),
            opt(2, "Stay in touch with old friends while slowly settling in."),
            opt(0, "Refuse to accept the change and stay unhappy."),
            opt(1, "Wait for things to feel normal on their own."),
        ],
    },
    Question {
        id: 8,
        r#trait: Trait::Responsibility,
        question_text: "You promised to water a neighbour's plants while they are away, but you forgot for two days. What do you do?",
        options: &[
            opt(0, "Say nothing and hope no one notices."),
            opt(2, "Water the plants now and make sure not to miss again."),
            opt(3, "Water them, tell the neighbour honestly and set a reminder for the rest of the week."),
            opt(1, "Blame the weather if any plant dries up."),
        ],
    },
    Question {
        id: 9,
        r#trait: Trait::Patience,
        question_text: "You are teaching a younger sibling a maths problem and they keep getting it wrong. What do you do?",
        options: &[
            opt(1, "Give them the answer so you can both move on."),
            opt(0, "Get angry and stop helping."),
            opt(3, "Explain it in a different way, step by step, until they understand."),
            opt(2, "Take a short break and try again later."),
        ],
    },
    Question {
        id: 10,
        r#trait: Trait::Leadership,
        question_text: "Your class is organising a cleanliness drive and nobody has taken charge. What do you do?",
        options: &[
            opt(2, "Offer to coordinate one part of the drive."),
            opt(3, "Volunteer to lead, make a plan and assign roles based on people's strengths."),
            opt(1, "Help out only if someone asks you."),
            opt(0, "Skip it; someone else will organise it."),
        ],
    },
];

/// Read-only view over the ordered question table.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    /// The standard assessment.
    pub fn standard() -> Self {
        Self {
            questions: &QUESTIONS,
        }
    }

    pub fn get_question(&self, index: usize) -> Option<&'static Question> {
        self.questions.get(index)
    }

    pub fn count(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    /// Largest reachable total, the sum of each question's best option.
    pub fn max_total(&self) -> u32 {
        self.questions.iter().map(|q| u32::from(q.max_score())).sum()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}
