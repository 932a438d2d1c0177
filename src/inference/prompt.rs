//! Prompt templates wrapped around the user's question before inference.

/// Instructional prompt for the dedicated legal model.
pub fn expert_prompt(question: &str) -> String {
    format!(
        "You are a legal expert assistant. Please provide a clear, accurate, and helpful answer to the following legal question.\n\
         Remember to cite relevant legal principles and provide practical guidance when appropriate.\n\
         \n\
         Question: {question}\n\
         \n\
         Answer:"
    )
}

/// Short prompt for general-purpose conversational models.
pub fn brief_prompt(question: &str) -> String {
    format!("Legal question: {question}\nAnswer:")
}
