// All prompt constants for the assistant module.

/// System prompt template for the career assistant.
/// Replace `{market_context}` before sending; it may be empty when no
/// dataset is loaded.
pub const CAREER_ASSISTANT_SYSTEM_TEMPLATE: &str = "\
You are Job-AiD, an AI career assistant specialized in the Philippine job market.
{market_context}
Provide helpful, specific advice about job searching, resumes, interviews, and career development.
Be concise but thorough in your responses.";

/// Shown to the user whenever the completion call fails, whatever the cause.
/// The underlying error goes to the log, never to the user.
pub const APOLOGY_MESSAGE: &str =
    "I apologize, but I'm experiencing technical issues right now. Please try again in a moment.";

pub fn build_system_prompt(market_context: &str) -> String {
    CAREER_ASSISTANT_SYSTEM_TEMPLATE.replace("{market_context}", market_context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_interpolates_context() {
        let prompt = build_system_prompt("Current Philippine Job Market Context:\n- Total available jobs: 3");
        assert!(prompt.contains("You are Job-AiD"));
        assert!(prompt.contains("Total available jobs: 3"));
        assert!(!prompt.contains("{market_context}"));
    }

    #[test]
    fn test_system_prompt_without_context_still_reads() {
        let prompt = build_system_prompt("");
        assert!(prompt.starts_with("You are Job-AiD"));
        assert!(prompt.contains("career development"));
    }
}
