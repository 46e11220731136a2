use crate::models::domain::QuizQuestion;

pub const QUIZ_QUESTIONS: [QuizQuestion; 3] = [
    QuizQuestion::new("Failure is:", "The end of the road", "A learning opportunity"),
    QuizQuestion::new("Challenges are:", "Something to avoid", "Opportunities to grow"),
    QuizQuestion::new("Effort is:", "Pointless", "Essential for improvement"),
];
