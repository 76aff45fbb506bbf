//! Pure prompt rendering for the conversation and summary calls.
//!
//! ```rust
//! use mchat::prompt::{build_summary_user_message, format_recent_entries};
//! use mprovider::Message;
//!
//! assert_eq!(
//!     format_recent_entries(&[]),
//!     "## Recent Context\n\nNo recent entries available."
//! );
//!
//! let body = build_summary_user_message("Long day", &[Message::assistant("Why long?")]);
//! assert_eq!(
//!     body,
//!     "## Raw Entry\n\nLong day\n\n## Conversation Transcript\n\nassistant: Why long?"
//! );
//! ```

use mcommon::{CONTEXT_DAYS, Entry, SCORE_MAX, SCORE_MIN};
use mprovider::Message;

/// Literal token the model emits when it has no further questions.
///
/// The conversation prompt instructs the model to emit exactly this string;
/// changing one without the other breaks completion detection.
pub const DONE_SIGNAL: &str = "DONE_ASKING_QUESTIONS";

pub fn build_conversation_system_prompt(recent_entries: &[Entry]) -> String {
    let context_block = format_recent_entries(recent_entries);

    format!(
        "You are a thoughtful and empathetic daily reflection companion. Your role is to help users explore their thoughts and feelings about their day through a brief, supportive conversation.

## Guidelines

- Ask one focused follow-up question at a time
- Be warm but concise \u{2014} keep responses to 2-3 sentences plus a question
- Draw on the user's recent entries for context when relevant, but don't constantly reference them
- Avoid clinical or therapeutic language \u{2014} be natural and conversational
- Never judge or evaluate the user's feelings
- Focus on helping the user articulate and understand their own experience

## Ending the Conversation

When you feel the conversation has reached a natural stopping point (the user has explored their thoughts sufficiently, or they seem ready to wrap up), respond with your final message followed by exactly this signal on its own line:

{DONE_SIGNAL}

This signals the system to generate a summary. Do NOT include this signal until the conversation is genuinely complete.

{context_block}"
    )
}

pub fn build_summary_system_prompt(recent_entries: &[Entry]) -> String {
    let context_block = format_recent_entries(recent_entries);

    format!(
        "You are a reflective writing assistant. Given a user's raw journal entry and their conversation transcript, produce a structured summary.

## Output Format

Respond with ONLY a JSON object (no markdown fences, no extra text) containing these exact fields:

{{
  \"refined_entry\": \"A well-written narrative version of the user's day, incorporating insights from the conversation. Write in first person. 2-4 paragraphs.\",
  \"key_moments\": [\"An array of 2-5 short phrases capturing the most significant moments or themes\"],
  \"tldr\": \"A single sentence capturing the essence of the day\",
  \"ai_suggested_score\": <number from {SCORE_MIN} to {SCORE_MAX}>,
  \"score_justification\": \"A brief explanation of why this score was suggested, based on the user's own words and feelings\"
}}

## Guidelines

- The refined_entry should read naturally, as if the user wrote it themselves
- Preserve the user's voice and perspective \u{2014} don't add emotions they didn't express
- The score should reflect how the user seems to feel about their day, not an objective assessment
- Key moments should be specific, not generic (e.g., \"resolved conflict with Alex\" not \"had interpersonal interaction\")
- The tldr should be conversational, not clinical

{context_block}"
    )
}

/// Renders the grounding block shared by both system prompts.
pub fn format_recent_entries(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "## Recent Context\n\nNo recent entries available.".to_string();
    }

    let formatted = entries
        .iter()
        .map(|entry| {
            let score = entry
                .score
                .map(|score| format!(" (score: {score}/{SCORE_MAX})"))
                .unwrap_or_default();
            format!(
                "- **{}**{}: {}",
                entry.entry_date,
                score,
                entry.grounding_text()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("## Recent Context (last {CONTEXT_DAYS} days)\n\n{formatted}")
}

/// One `"<role>: <content>"` line per message, oldest first.
pub fn render_transcript(transcript: &[Message]) -> String {
    transcript
        .iter()
        .map(|message| format!("{}: {}", message.role, message.content))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_summary_user_message(raw_entry: &str, transcript: &[Message]) -> String {
    format!(
        "## Raw Entry\n\n{raw_entry}\n\n## Conversation Transcript\n\n{}",
        render_transcript(transcript)
    )
}
