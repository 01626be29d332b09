//! Terminal rendering for topics, prompts, and analysis results.

use std::fmt::Write;

use askmynotes_ai::AnalysisPrompt;
use askmynotes_core::{AnalysisResult, Topic};

// ── Public API ──

/// Print the selectable topics, optionally with their grounding text.
pub fn print_topics(topics: &[Topic], show_content: bool) {
    print!("{}", render_topics(topics, show_content));
}

/// Print the three result panels.
pub fn print_result(result: &AnalysisResult) {
    print!("{}", render_result(result));
}

/// Print a built prompt without sending it anywhere.
pub fn print_prompt(prompt: &AnalysisPrompt) -> anyhow::Result<()> {
    println!("=== Instruction ===");
    println!("{}", prompt.instruction_text);
    println!();
    println!("=== Output contract ===");
    println!("{}", serde_json::to_string_pretty(&prompt.output_contract)?);
    Ok(())
}

// ── Rendering ──

fn render_topics(topics: &[Topic], show_content: bool) -> String {
    let width = topics.iter().map(|t| t.id.as_str().len()).max().unwrap_or(0);
    let mut out = String::new();
    for topic in topics {
        let _ = writeln!(out, "{:<width$}  {}", topic.id.as_str(), topic.label);
        if show_content {
            for line in topic.content.lines() {
                let _ = writeln!(out, "{:<width$}    {}", "", line.trim_end());
            }
            out.push('\n');
        }
    }
    out
}

fn render_result(result: &AnalysisResult) -> String {
    let mut out = String::new();

    section(&mut out, "Explanation");
    let _ = writeln!(out, "{}", result.explanation.trim_end());
    out.push('\n');

    section(&mut out, "Summary");
    for point in result.summary_points() {
        let _ = writeln!(out, "  • {point}");
    }
    out.push('\n');

    section(&mut out, "Exam Questions");
    if result.exam_questions.is_empty() {
        out.push_str("  (none)\n");
    }
    for (i, question) in result.exam_questions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, question.trim());
    }
    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "=== {title} ===");
}
