//! Built-in question bank. Served from memory when no database is configured,
//! and inserted by `skillsync-cli seed`.

use crate::models::question::{Difficulty, Question};

use Difficulty::{Advanced, Basic, Intermediate};

type Entry = (&'static str, Difficulty, &'static str, [&'static str; 4], usize);

const BANK: &[Entry] = &[
    // React
    (
        "React",
        Basic,
        "What is a Component in React?",
        ["A function that returns HTML", "A database", "A styling file", "A server"],
        0,
    ),
    (
        "React",
        Basic,
        "Which hook manages state?",
        ["useEffect", "useState", "useContext", "useReducer"],
        1,
    ),
    (
        "React",
        Basic,
        "What is JSX?",
        ["JavaScript XML", "Java Syntax", "JSON X", "External Library"],
        0,
    ),
    (
        "React",
        Intermediate,
        "What triggers a re-render?",
        ["Comments", "State or Props change", "Mouse movement", "API calls only"],
        1,
    ),
    (
        "React",
        Intermediate,
        "What is the Virtual DOM?",
        ["A virus", "A direct copy of HTML", "Lightweight copy of DOM", "Browser API"],
        2,
    ),
    (
        "React",
        Advanced,
        "What prevents unnecessary re-renders?",
        ["useState", "useEffect", "useMemo", "useContext"],
        2,
    ),
    (
        "React",
        Advanced,
        "How does React handle reconciliation?",
        ["DFS Algorithm", "Diffing Algorithm", "Random selection", "Queue system"],
        1,
    ),
    (
        "React",
        Advanced,
        "What does the Context API help you avoid?",
        ["State", "Prop drilling", "API calls", "Rendering"],
        1,
    ),
    // Node.js
    (
        "Node.js",
        Basic,
        "What is Node.js?",
        ["A Framework", "A Runtime Environment", "A Database", "A Browser"],
        1,
    ),
    (
        "Node.js",
        Basic,
        "Which command initializes a project?",
        ["npm start", "node init", "npm init", "git init"],
        2,
    ),
    (
        "Node.js",
        Intermediate,
        "What is the Event Loop?",
        ["A loop that never ends", "Handles asynchronous callbacks", "Connects to DB", "Parses JSON"],
        1,
    ),
    (
        "Node.js",
        Intermediate,
        "What does module.exports define?",
        ["The module's public API", "Environment variables", "The package version", "The test runner"],
        0,
    ),
    (
        "Node.js",
        Advanced,
        "What is the use of Buffer class?",
        ["Caching data", "Handling binary data", "Buffering video", "Speeding up code"],
        1,
    ),
    // Python
    (
        "Python",
        Basic,
        "How do you output text to the console?",
        ["console.log()", "print()", "echo", "write()"],
        1,
    ),
    (
        "Python",
        Basic,
        "Which keyword defines a function?",
        ["func", "def", "function", "definition"],
        1,
    ),
    (
        "Python",
        Intermediate,
        "What data type is immutable?",
        ["List", "Dictionary", "Set", "Tuple"],
        3,
    ),
    (
        "Python",
        Intermediate,
        "What does a list comprehension return?",
        ["A tuple", "A new list", "A generator", "A dictionary"],
        1,
    ),
    (
        "Python",
        Advanced,
        "What is a decorator?",
        ["A styling tool", "A function that modifies another function", "A class inheritance", "A variable type"],
        1,
    ),
];

/// The built-in questions, answers included.
pub fn builtin_questions() -> Vec<Question> {
    BANK.iter()
        .map(|(skill, difficulty, question, options, correct_answer)| Question {
            skill: skill.to_string(),
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: *correct_answer,
            difficulty: *difficulty,
        })
        .collect()
}
