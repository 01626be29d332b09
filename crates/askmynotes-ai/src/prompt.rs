//! Instruction text and response schema for a notes analysis.

use askmynotes_core::{AnalysisRequest, lookup};
use serde_json::{Value, json};

const PREAMBLE: &str = "You are an expert academic tutor.";

const TASKS: &str = "\
Your task:
1. SIMPLE EXPLANATION: Explain the concepts in the notes in a student-friendly, conversational manner.
2. CONCISE SUMMARY: Provide a bulleted summary of the most important points.
3. EXAM QUESTIONS: Generate 3 to 5 challenging exam-focused questions based on this content.

Return the response strictly in JSON format.";

/// Everything the generator needs for one analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisPrompt {
    pub instruction_text: String,
    pub output_contract: Value,
}

/// Compose the instruction and output contract for a validated request.
pub fn build(request: &AnalysisRequest) -> AnalysisPrompt {
    AnalysisPrompt {
        instruction_text: build_instruction(request),
        output_contract: output_contract(),
    }
}

fn build_instruction(request: &AnalysisRequest) -> String {
    let topic = lookup(request.topic());
    format!(
        "{PREAMBLE}\n\
         Primary Input (User's Study Notes): \"{notes}\"\n\
         Reference Grounding Context (Use this to enhance and verify accuracy): \"{grounding}\"\n\
         \n\
         {TASKS}",
        notes = request.notes(),
        grounding = topic.content,
    )
}

/// Response schema in the Gemini OpenAPI subset.
///
/// All three fields are required. The 3 to 5 question count lives only in
/// the instruction text.
pub fn output_contract() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "explanation": {
                "type": "STRING",
                "description": "A student-friendly explanation of the notes."
            },
            "summary": {
                "type": "STRING",
                "description": "A concise summary of the notes, one bullet point per line."
            },
            "examQuestions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of exam-oriented questions."
            }
        },
        "required": ["explanation", "summary", "examQuestions"]
    })
}
