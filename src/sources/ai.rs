use super::AiResponse;
use rand::Rng;

pub fn mock_summary<R: Rng + ?Sized>(rng: &mut R, query: &str) -> AiResponse {
    AiResponse {
        content: format!(
            "Based on your query about \"{}\", I've analyzed the available information and can provide the following insights: This topic involves multiple perspectives and considerations that are worth exploring through various content sources.",
            query
        ),
        summary: format!("Key insights about {}", query),
        sources: vec!["AI Analysis".to_string(), "Knowledge Base".to_string()],
        confidence: rng.random_range(0.7..1.0),
    }
}

/// Stands in for the AI summary when the summarizer itself fails, so the
/// aggregate still carries one.
pub fn degraded_response(query: &str) -> AiResponse {
    AiResponse {
        content: format!(
            "I apologize, but I encountered an error while analyzing your query about \"{}\". Please try again or rephrase your request.",
            query
        ),
        summary: "Error in AI processing".to_string(),
        sources: Vec::new(),
        confidence: 0.0,
    }
}

/// Placeholder shown when a generation fails. No sources, zero confidence.
pub fn failure_response() -> AiResponse {
    AiResponse {
        content: "Sorry, I encountered an error while generating content. Please try again."
            .to_string(),
        summary: "Error occurred".to_string(),
        sources: Vec::new(),
        confidence: 0.0,
    }
}
