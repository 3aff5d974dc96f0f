// Prompt fragments shared by every completion call.
// Feature-specific templates live next to the feature (see evaluation::prompts).

/// System-role instruction sent ahead of every user prompt.
pub const ASSISTANT_SYSTEM: &str = "You are a helpful assistant.";
