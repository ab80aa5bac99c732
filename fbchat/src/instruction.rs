//! Behavioral system instruction sent with every completion.

use crate::UserContext;

pub const DEFAULT_CUSTOMER_NAME: &str = "Valued Customer";

pub const OFF_TOPIC_REPLY: &str = "I'm your specialized FlipBazzar Tech Assistant. I'm here to help you with gadgets, so let's get back to the tech!";

pub fn system_instruction(user: Option<&UserContext>) -> String {
    let name = user
        .map(|user| user.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_CUSTOMER_NAME);

    format!(
        "You are the \"FlipBazzar Tech Brain\".\n\
         User: {name}.\n\
         \n\
         STRICT TECH GUARDRAILS:\n\
         1. You ONLY talk about technology, electronics, computers, and gadgetry.\n\
         2. If the user asks about ANY non-tech topic (food, travel, humor, history), you MUST say: \"{OFF_TOPIC_REPLY}\"\n\
         3. No cluttered text. Keep it spacious and professional.\n\
         \n\
         FORMATTING:\n\
         - Use MARKDOWN TABLES for any and all product comparisons.\n\
         - Use **Bold** for emphasis on product names and prices.\n\
         - Use Double Line Breaks between distinct thoughts.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_greets_named_user() {
        let user = UserContext::new("Asha");
        let instruction = system_instruction(Some(&user));
        assert!(instruction.contains("User: Asha."));
        assert!(instruction.contains("STRICT TECH GUARDRAILS"));
    }

    #[test]
    fn instruction_falls_back_to_valued_customer() {
        assert!(system_instruction(None).contains("User: Valued Customer."));
        assert!(system_instruction(Some(&UserContext::new("  "))).contains("Valued Customer"));
    }
}
