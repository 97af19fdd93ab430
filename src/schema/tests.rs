#[cfg(test)]
mod tests {
    use crate::constants::{CATEGORIES, GENERAL_HISTORY};
    use crate::schema::types::{AnswerType, QuestionRow};
    use crate::schema::utils::{format_to_camel_case, split_options};
    use crate::schema::{rows_to_schema, schema_to_rows};
    use serde_json::json;
    use std::collections::HashSet;

    fn row(category: &str, description: &str, answer_type: AnswerType) -> QuestionRow {
        let mut row = QuestionRow::new();
        row.category = category.to_string();
        row.description = description.to_string();
        row.property = format_to_camel_case(description);
        row.answer_type = answer_type;
        row
    }

    #[test]
    fn camel_case_strips_punctuation() {
        assert_eq!(format_to_camel_case("Date of Birth!"), "dateOfBirth");
    }

    #[test]
    fn camel_case_empty_input() {
        assert_eq!(format_to_camel_case(""), "");
        assert_eq!(format_to_camel_case("?!."), "");
    }

    #[test]
    fn camel_case_collapses_whitespace() {
        assert_eq!(
            format_to_camel_case("  multiple   spaces "),
            "multipleSpaces"
        );
    }

    #[test]
    fn camel_case_lowercases_word_tails() {
        assert_eq!(
            format_to_camel_case("BLOOD PRESSURE reading"),
            "bloodPressureReading"
        );
    }

    #[test]
    fn split_options_trims_segments() {
        assert_eq!(split_options("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_options_keeps_empty_segments() {
        assert_eq!(split_options("a,,b,"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn answer_type_serializes_with_display_labels() {
        assert_eq!(serde_json::to_string(&AnswerType::YesNo).unwrap(), "\"Yes/No\"");
        assert_eq!(AnswerType::YesNo.to_string(), "Yes/No");
        assert_eq!(AnswerType::ALL.len(), 4);
        assert!(CATEGORIES.contains(&GENERAL_HISTORY));
    }

    #[test]
    fn answer_type_mapping_from_leaves() {
        let schema = json!({
            "type": "object",
            "properties": {
                "age": { "type": "integer" },
                "smoker": { "type": "string", "enum": ["Yes", "No"] },
                "eyeColor": { "type": "string", "enum": ["Red", "Green", "Blue"] },
                "name": { "type": "string" }
            }
        });
        let rows = schema_to_rows(&schema);
        assert_eq!(rows.len(), 4);
        let by_property = |p: &str| rows.iter().find(|r| r.property == p).unwrap();
        assert_eq!(by_property("age").answer_type, AnswerType::Number);
        assert_eq!(by_property("smoker").answer_type, AnswerType::YesNo);
        assert!(by_property("smoker").options.is_empty());
        assert_eq!(by_property("eyeColor").answer_type, AnswerType::Dropdown);
        assert_eq!(by_property("eyeColor").options, vec!["Red", "Green", "Blue"]);
        assert_eq!(by_property("name").answer_type, AnswerType::Text);
    }

    #[test]
    fn yes_no_detection_is_order_independent() {
        let schema = json!({
            "properties": {
                "a": { "type": "string", "enum": ["No", "Yes"] },
                "b": { "type": "string", "enum": ["Yes", "Yes"] }
            }
        });
        let rows = schema_to_rows(&schema);
        assert_eq!(rows[0].answer_type, AnswerType::YesNo);
        assert_eq!(rows[1].answer_type, AnswerType::Dropdown);
    }

    #[test]
    fn untyped_and_object_nodes_produce_no_rows() {
        let schema = json!({
            "properties": {
                "shapeless": { "description": "no type here" },
                "group": { "type": "object", "properties": {} }
            }
        });
        assert!(schema_to_rows(&schema).is_empty());
    }

    #[test]
    fn empty_document_yields_no_rows() {
        assert!(schema_to_rows(&json!({})).is_empty());
    }

    #[test]
    fn nested_leaves_take_first_segment_as_category() {
        let schema = json!({
            "properties": {
                "Medical History": {
                    "type": "object",
                    "properties": {
                        "allergies": { "type": "string", "description": "Allergies" }
                    }
                }
            }
        });
        let rows = schema_to_rows(&schema);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "Medical History");
        assert_eq!(rows[0].property, "allergies");
        assert_eq!(rows[0].description, "Allergies");
    }

    #[test]
    fn required_and_active_defaults() {
        let schema = json!({
            "properties": {
                "implicit": { "type": "string" },
                "optional": { "type": "string", "nullable": true, "active": false }
            }
        });
        let rows = schema_to_rows(&schema);
        assert!(rows[0].required);
        assert!(rows[0].active);
        assert!(!rows[1].required);
        assert!(!rows[1].active);
    }

    #[test]
    fn ids_are_unique_within_and_across_calls() {
        let schema = json!({
            "properties": {
                "a": { "type": "string" },
                "b": { "type": "string" }
            }
        });
        let first = schema_to_rows(&schema);
        let second = schema_to_rows(&schema);
        assert_ne!(first[0].id, first[1].id);
        assert_ne!(first[0].id, second[0].id);
    }

    #[test]
    fn ungrouped_rows_build_directly_under_properties() {
        let rows = vec![row(GENERAL_HISTORY, "Known allergies", AnswerType::Text)];
        let schema = rows_to_schema(&rows);
        assert_eq!(
            schema["properties"]["knownAllergies"],
            json!({
                "type": "string",
                "description": "Known allergies",
                "nullable": true,
                "active": true
            })
        );
    }

    #[test]
    fn categorized_rows_build_inside_containers() {
        let rows = vec![row("Medical History", "Allergies", AnswerType::Text)];
        let schema = rows_to_schema(&rows);
        assert_eq!(schema["properties"]["Medical History"]["type"], "object");
        assert_eq!(
            schema["properties"]["Medical History"]["properties"]["allergies"]["description"],
            "Allergies"
        );
    }

    #[test]
    fn containers_are_reused_across_rows() {
        let rows = vec![
            row("Medical History", "Allergies", AnswerType::Text),
            row("Medical History", "Current medication", AnswerType::Text),
        ];
        let schema = rows_to_schema(&rows);
        let container = schema["properties"]["Medical History"]["properties"]
            .as_object()
            .unwrap();
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn yes_no_rows_emit_fixed_enum() {
        let rows = vec![row(GENERAL_HISTORY, "Smoker", AnswerType::YesNo)];
        let schema = rows_to_schema(&rows);
        assert_eq!(schema["properties"]["smoker"]["enum"], json!(["Yes", "No"]));
    }

    #[test]
    fn number_rows_emit_integer_type() {
        let rows = vec![row(GENERAL_HISTORY, "Age", AnswerType::Number)];
        let schema = rows_to_schema(&rows);
        assert_eq!(schema["properties"]["age"]["type"], "integer");
    }

    #[test]
    fn required_rows_emit_nullable_false() {
        let mut required = row(GENERAL_HISTORY, "Full name", AnswerType::Text);
        required.required = true;
        let schema = rows_to_schema(&[required]);
        assert_eq!(schema["properties"]["fullName"]["nullable"], json!(false));
    }

    #[test]
    fn collisions_resolve_last_write_wins() {
        let mut first = row("Medical History", "First wording", AnswerType::Text);
        first.property = "allergies".to_string();
        let mut second = row("Medical History", "Second wording", AnswerType::Text);
        second.property = "allergies".to_string();
        let schema = rows_to_schema(&[first, second]);
        let container = schema["properties"]["Medical History"]["properties"]
            .as_object()
            .unwrap();
        assert_eq!(container.len(), 1);
        assert_eq!(container["allergies"]["description"], "Second wording");
    }

    #[test]
    fn inactive_rows_are_still_included() {
        let mut inactive = row(GENERAL_HISTORY, "Retired question", AnswerType::Text);
        inactive.active = false;
        let schema = rows_to_schema(&[inactive]);
        assert_eq!(
            schema["properties"]["retiredQuestion"]["active"],
            json!(false)
        );
    }

    #[test]
    fn round_trip_preserves_row_tuples() {
        let mut dropdown = row("Lifestyle", "Favorite color", AnswerType::Dropdown);
        dropdown.options = vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()];
        dropdown.required = true;
        let mut number = row("Medical History", "Resting heart rate", AnswerType::Number);
        number.active = false;
        let rows = vec![
            row(GENERAL_HISTORY, "Full name", AnswerType::Text),
            row(GENERAL_HISTORY, "Smoker", AnswerType::YesNo),
            dropdown,
            number,
        ];

        let parsed = schema_to_rows(&rows_to_schema(&rows));
        assert_eq!(parsed.len(), rows.len());

        let tuple = |r: &QuestionRow| {
            (
                r.category.clone(),
                r.property.clone(),
                r.answer_type,
                r.options.clone(),
                r.required,
                r.active,
            )
        };
        let expected: HashSet<_> = rows.iter().map(tuple).collect();
        let actual: HashSet<_> = parsed.iter().map(tuple).collect();
        assert_eq!(expected, actual);
    }

    #[test]
    fn options_text_round_trips_through_split() {
        let mut dropdown = row(GENERAL_HISTORY, "Favorite color", AnswerType::Dropdown);
        dropdown.options = vec!["Red".to_string(), "Green".to_string()];
        assert_eq!(dropdown.options_text(), "Red, Green");
        assert_eq!(split_options(&dropdown.options_text()), dropdown.options);
    }
}
