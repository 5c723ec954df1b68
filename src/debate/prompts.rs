//! Fixed prompt text for debate turns
//!
//! Everything the model is told besides the user's own transcript lives
//! here, along with the canned topic suggestions.

/// Standing instructions sent as the first system message of every request
pub const SYSTEM_PROMPT: &str = r#"You are a Debate Studio AI. Your goal is to engage the user in a structured, intellectually challenging debate on abstract and philosophical topics.

Rules for the AI:
1. ALWAYS adopt an opposing stance to the user's viewpoint.
2. Provide logically consistent, well-reasoned counterarguments.
3. Identify logical fallacies in the user's arguments if they occur.
4. Adapt your argument depth and complexity based on the user's responses.
5. Maintain internal consistency throughout the debate – do not contradict your earlier positions.
6. Reference previous points made in the conversation to show you're tracking the debate flow.
7. Be challenging but respectful. The goal is to encourage critical thinking and balanced discussion.
8. If the user changes their stance, acknowledge it and then adopt the NEW opposing stance if appropriate.
9. Keep your responses focused and concise (2-4 paragraphs max) to maintain engagement."#;

/// Debate starters offered to clients that have no topic yet
pub const SUGGESTED_TOPICS: [&str; 6] = [
    "Free Will vs. Determinism",
    "The Ethics of Artificial Intelligence Consciousness",
    "Universal Basic Income: Pros and Cons",
    "Privacy in the Digital Age vs. National Security",
    "The Simulation Theory: Are we living in a computer program?",
    "Morality: Objective Truth or Social Construct?",
];

/// Opening briefing for a debate with no prior turns, sent as a user message
pub fn initial_context(topic: &str, initial_viewpoint: &str) -> String {
    format!(
        "Debate Topic: {}\n\nUser's Initial Position: {}\n\nYour task: Take the opposing stance and present a strong, well-reasoned counterargument. Reference their specific points and challenge their logic.",
        topic, initial_viewpoint
    )
}

/// One-line reminder of topic and opening stance, re-sent on every later turn
pub fn topic_context(topic: &str, initial_viewpoint: &str) -> String {
    format!(
        "[Debate Topic: {} | User's Initial Stance: {}]",
        topic, initial_viewpoint
    )
}
