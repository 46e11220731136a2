pub const APP_TITLE: &str = "🌱 Growth Mindset Challenge";

pub const HOME_SUBTITLE: &str = "Believe in Growth, Learn from Challenges!";

pub const HOME_INTRO_MARKDOWN: &str = "A **Growth Mindset** means believing that your abilities can be improved \
through learning and persistence. Every challenge is an opportunity to grow! 🌟";

pub const MOTIVATION_MESSAGES: [&str; 5] = [
    "Mistakes help us learn. Keep going! 💪",
    "Challenges make you stronger! 🚀",
    "Effort leads to success. Stay persistent! 🔥",
    "Learning never stops! Keep exploring. 📚",
    "Believe in yourself and keep growing! 🌱",
];

pub const DAILY_COMPLETE_MESSAGE: &str = "Great job! Keep the streak going! 🔥";

pub const STRONG_MINDSET_MESSAGE: &str = "You have a strong growth mindset! Keep it up! 🚀";
pub const KEEP_PRACTICING_MESSAGE: &str = "Keep practicing a growth mindset! Every step matters. 🌱";
pub const PERFECT_SCORE_MESSAGE: &str = "Congratulations! You've achieved a perfect score! 🏆";
pub const TAKE_QUIZ_FIRST_MESSAGE: &str = "Take the quiz first to see your progress!";

pub const SHARE_MESSAGE: &str = "Copy the link below to share your progress with friends!";

pub const FOOTER_MARKDOWN: &str = "*Keep pushing forward, learning, and improving every day!* 💡🚀";

/// Longest learning goal the home form accepts.
pub const MAX_GOAL_LENGTH: usize = 200;
