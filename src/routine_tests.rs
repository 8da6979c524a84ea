#[cfg(test)]
mod tests {
    use crate::routine::{RoutineCharacteristics, render_characteristics};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty_characteristics() {
        assert!(render_characteristics(&RoutineCharacteristics::default()).is_empty());
    }

    #[test]
    fn fixed_order() {
        let c = RoutineCharacteristics {
            comment: Some("adds two numbers".to_string()),
            sql_security: Some("INVOKER".to_string()),
            deterministic: Some("NOT DETERMINISTIC".to_string()),
            language: true,
        };
        assert_eq!(
            c.render(),
            vec![
                "LANGUAGE SQL",
                "NOT DETERMINISTIC",
                "SQL SECURITY INVOKER",
                "COMMENT 'adds two numbers'",
            ]
        );
    }

    #[test]
    fn comment_quotes_are_doubled() {
        let c = RoutineCharacteristics {
            comment: Some("it's\nfine".to_string()),
            ..RoutineCharacteristics::default()
        };
        assert_eq!(c.render(), vec![r"COMMENT 'it''s\nfine'"]);
    }

    #[test]
    fn from_host_json_ignores_field_order() {
        let c = RoutineCharacteristics::from_json(&json!({
            "comment": "x",
            "sqlSecurity": "DEFINER",
            "deterministic": "DETERMINISTIC",
            "language": "SQL"
        }));
        assert_eq!(
            c.render(),
            vec![
                "LANGUAGE SQL",
                "DETERMINISTIC",
                "SQL SECURITY DEFINER",
                "COMMENT 'x'",
            ]
        );
    }

    #[test]
    fn falsy_fields_are_skipped() {
        let c = RoutineCharacteristics::from_json(&json!({
            "language": false,
            "deterministic": "",
            "sqlSecurity": null
        }));
        assert!(c.render().is_empty());
        assert!(RoutineCharacteristics::from_json_str("nope").is_err());
    }
}
