//! Canned small-talk replies.

use rand::seq::SliceRandom;
use rand::Rng;

pub const GREETING_RESPONSES: &[&str] = &[
    "Hello! How can I help you today?",
    "Hi there! What would you like to know about our campus?",
    "Hello! I'm here to assist you with campus-related information.",
    "Hi! Feel free to ask me anything about our college.",
];

pub const FAREWELL_RESPONSES: &[&str] = &[
    "Goodbye! Feel free to come back if you have more questions!",
    "Thank you for chatting! Have a great day!",
    "You're welcome! Don't hesitate to ask if you need anything else.",
    "Bye! I'm here 24/7 if you need more information!",
];

pub const HELP_RESPONSES: &[&str] = &[
    "I can help you with information about:\n- Campus facilities (library, hostel, canteen, WiFi)\n- Departments and faculty\n- Events and clubs\n- Placement information\n- Exam schedules\nJust ask me anything!",
    "I'm your campus guide! You can ask me about facilities, departments, events, placements, or exam schedules. How can I assist you?",
];

/// Pick one reply from a fixed set.
pub fn pick<R: Rng + ?Sized>(responses: &[&'static str], rng: &mut R) -> &'static str {
    responses.choose(rng).copied().unwrap_or_default()
}

pub fn greeting<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(GREETING_RESPONSES, rng)
}

pub fn farewell<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(FAREWELL_RESPONSES, rng)
}

/// The help reply is always the first entry.
pub fn help() -> &'static str {
    HELP_RESPONSES[0]
}
