use serde_json::{Value, json};

use crate::domain::change::ChangeSet;
use crate::domain::language::Language;
use crate::error::{AppError, AppResult};

pub const SCHEMA_NAME: &str = "commit_message";

/// Schema for the commit message object. The prompt and the
/// `response_format` both embed this value so their field descriptions match.
pub fn commit_message_schema(language: Language) -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": {
                "type": "string",
                "description": language.title_field_description(),
            },
            "description": {
                "type": "string",
                "description": language.description_field_description(),
            },
        },
        "required": ["title", "description"],
        "additionalProperties": false,
    })
}

pub fn build_prompt(language: Language, schema: &Value, changes: &ChangeSet) -> AppResult<String> {
    let readable_schema = serde_json::to_string_pretty(schema).map_err(AppError::Request)?;
    Ok(format!(
        "{}\n\n```json\n{}\n```\n\nGit Diff:\n```diff\n{}\n```",
        language.instruction(),
        readable_schema,
        changes.render()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_both_fields() {
        for language in [Language::English, Language::Spanish] {
            let schema = commit_message_schema(language);
            assert_eq!(schema["required"], json!(["title", "description"]));
            assert_eq!(schema["additionalProperties"], json!(false));
            assert_eq!(schema["properties"]["title"]["type"], "string");
            assert_eq!(schema["properties"]["description"]["type"], "string");
        }
    }

    #[test]
    fn prompt_embeds_instruction_schema_and_diff() {
        let changes = ChangeSet::new(" M README.md\n", "+hello\n");
        let schema = commit_message_schema(Language::Spanish);
        let prompt = build_prompt(Language::Spanish, &schema, &changes).unwrap();

        assert!(prompt.starts_with(Language::Spanish.instruction()));
        assert!(prompt.contains("```json\n{"));
        assert!(prompt.contains("Título conciso del mensaje de commit"));
        assert!(prompt.contains("Descripción detallada del mensaje de commit"));
        assert!(prompt.contains("Git Diff:\n```diff\nGit Status (staged files):\n M README.md\n"));
        assert!(prompt.ends_with("+hello\n\n```"));
    }
}
