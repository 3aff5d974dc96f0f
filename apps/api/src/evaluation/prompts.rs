// Prompt text for résumé summary evaluation.
// The system-role instruction lives in llm_client::prompts.

use serde_json::{Map, Value};

/// Opening paragraph, placed before the embedded résumé.
pub const EVALUATOR_PREAMBLE: &str = "You are a highly specialized Resume Summary Evaluator and Generator for an AI-powered ATS (Applicant Tracking System). Your job is to analyze the summary section of a resume and provide constructive feedback, an ATS score, and suggest improved summaries tailored to the resume content.

Below is a JSON resume:";

/// Placeholder used when neither the request nor the résumé carries a summary.
pub const NO_SUMMARY_PROVIDED: &str = "No summary provided.";

/// The six evaluation steps and the JSON shape the model must answer with.
pub const EVALUATION_STEPS: &str = r#"Follow the steps below in order:

---

**Step 1: Extract Existing Summary**
- Extract and display the current "Summary" field from the resume, or use the provided summary if present.

---

**Step 2: Give ATS Score**
- Evaluate the extracted Summary and give an **ATS score out of 10** based on:
  - Keyword relevance to the job title
  - Alignment with skills, experience, education, certifications
  - Structure and clarity

---

**Step 3: Highlight Weak Sentences**
- Identify **sentences or phrases that reduced the ATS score**.
- Explain briefly why each one is ineffective or damaging.

---

**Step 4: Highlight Strong Sentences**
- Identify **sentences or phrases that improved the ATS score**.
- Explain briefly why each one is effective and ATS-friendly.

---

**Step 5: Score Justification**
- Give **2 to 4 bullet points** explaining why you gave this score.
- Use terms like keyword optimization, job relevance, measurable impact, etc.

---

**Step 6: Generate 4 New Summaries**
- Generate **4 optimized resume summaries** that would score **10/10 in an ATS**.
- Each summary should:
  - Highlight relevant skills, experience, education, and certifications
  - Use strong action words, avoid buzzwords or vague phrases
  - Be under 4 sentences

---

Respond in this JSON format:
{
  "extracted_summary": "...",
  "ats_score": 0,
  "weak_sentences": ["..."],
  "strong_sentences": ["..."],
  "score_feedback": ["...", "..."],
  "new_summaries": ["...", "...", "...", "..."]
}
"#;

/// Builds the user prompt for one evaluation.
///
/// The résumé is embedded as 2-space indented JSON in its original key order.
/// An empty `summary` yields the "No summary provided." placeholder, and an
/// empty `job_title` leaves the prompt without a title line.
pub fn build_prompt(resume: &Map<String, Value>, summary: &str, job_title: &str) -> String {
    let formatted_resume = format!("{:#}", Value::Object(resume.clone()));

    let summary_section = if summary.is_empty() {
        NO_SUMMARY_PROVIDED.to_string()
    } else {
        format!("Existing Summary: \"{summary}\"")
    };

    let job_title_section = if job_title.is_empty() {
        String::new()
    } else {
        format!("\n\nTarget Job Title: \"{job_title}\"")
    };

    format!(
        "\n{EVALUATOR_PREAMBLE}\n\n{formatted_resume}\n\n{summary_section}{job_title_section}\n\n{EVALUATION_STEPS}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resume(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn test_prompt_embeds_pretty_resume_json() {
        let r = resume(json!({
            "Name": "Ada Lovelace",
            "Skills": ["Rust", "SQL"],
            "Experience": [{ "Company": "Analytical Engines", "Years": 3 }]
        }));
        let prompt = build_prompt(&r, "", "");

        assert!(prompt.contains(&serde_json::to_string_pretty(&r).unwrap()));
        assert!(prompt.contains("{\n  \"Name\": \"Ada Lovelace\","));
    }

    #[test]
    fn test_prompt_preserves_resume_key_order() {
        let r = resume(json!({ "Zeta": 1, "Alpha": 2 }));
        let prompt = build_prompt(&r, "", "");

        let zeta = prompt.find("\"Zeta\"").unwrap();
        let alpha = prompt.find("\"Alpha\"").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_prompt_quotes_existing_summary() {
        let prompt = build_prompt(&Map::new(), "Backend engineer with 5 years of Rust.", "");

        assert!(prompt.contains("Existing Summary: \"Backend engineer with 5 years of Rust.\""));
        assert!(!prompt.contains(NO_SUMMARY_PROVIDED));
    }

    #[test]
    fn test_prompt_placeholder_without_summary() {
        let prompt = build_prompt(&Map::new(), "", "");

        assert!(prompt.contains("\n{}\n\nNo summary provided.\n\nFollow the steps"));
        assert!(!prompt.contains("Existing Summary: \""));
    }

    #[test]
    fn test_prompt_carries_instructions_and_schema() {
        let prompt = build_prompt(&Map::new(), "", "");

        assert!(prompt.starts_with("\nYou are a highly specialized Resume Summary Evaluator"));
        for step in 1..=6 {
            assert!(prompt.contains(&format!("**Step {step}:")));
        }
        assert!(prompt.contains("\"new_summaries\": [\"...\", \"...\", \"...\", \"...\"]"));
        assert!(prompt.ends_with("}\n"));
    }

    #[test]
    fn test_prompt_job_title_line() {
        let with_title = build_prompt(&Map::new(), "S", "Platform Engineer");
        let without_title = build_prompt(&Map::new(), "S", "");

        assert!(with_title.contains("Existing Summary: \"S\"\n\nTarget Job Title: \"Platform Engineer\"\n\nFollow"));
        assert!(!without_title.contains("Target Job Title"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let r = resume(json!({ "Summary": "x", "Skills": ["Go"] }));
        assert_eq!(build_prompt(&r, "x", ""), build_prompt(&r, "x", ""));
    }
}
