use crate::guidance::resolver::{first_match, normalize_goals, rule, KeywordRule};

/// Ordered reply table; the first rule whose keyword appears in the message wins.
pub const REPLY_RULES: &[KeywordRule<&str>] = &[
    rule(
        &["skill", "learn"],
        "I can help you organize your skills and learning goals. Your profile information has been saved successfully.",
    ),
    rule(
        &["career", "job"],
        "Your career goals have been recorded. Focus on building experience in your chosen field.",
    ),
    rule(
        &["resume", "cv"],
        "Resume tips: Keep it concise, highlight achievements, and tailor it for each job application.",
    ),
    rule(
        &["help"],
        "I'm here to acknowledge your career journey. Your profile data is safely stored in our database.",
    ),
];

pub const DEFAULT_REPLY: &str =
    "Thank you for sharing. Your information has been saved. Continue building your career step by step.";

pub fn reply_for(message: &str) -> &'static str {
    first_match(REPLY_RULES, &normalize_goals(message)).unwrap_or(DEFAULT_REPLY)
}
