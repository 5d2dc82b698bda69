//! Property-based tests for request validation

use eventhub::backend::events::model::{EventInput, Pagination};
use eventhub::shared::{is_valid_email, Validate};
use proptest::prelude::*;

fn event(title: String) -> EventInput {
    EventInput {
        title,
        description: None,
        date: "2024-01-01".to_string(),
        time: "10:00".to_string(),
        image_url: None,
    }
}

proptest! {
    #[test]
    fn test_well_formed_emails_are_accepted(
        local in "[a-z0-9]{1,20}",
        domain in "[a-z0-9]{1,20}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&email));
    }

    #[test]
    fn test_emails_without_at_are_rejected(s in "[^@]*") {
        prop_assert!(!is_valid_email(&s));
    }

    #[test]
    fn test_emails_with_whitespace_are_rejected(
        local in "[a-z]{1,10}",
        ws in "[ \t\n]",
    ) {
        let email = format!("{local}{ws}x@example.com");
        prop_assert!(!is_valid_email(&email));
    }

    #[test]
    fn test_blank_titles_are_rejected(title in "[ \t\n]*") {
        prop_assert!(event(title).validate().is_err());
    }

    #[test]
    fn test_titles_with_content_are_accepted(title in "[ ]*[A-Za-z0-9][A-Za-z0-9 ]*") {
        prop_assert!(event(title).validate().is_ok());
    }

    #[test]
    fn test_pagination_keeps_any_limit(skip in any::<u32>(), limit in any::<u32>()) {
        let page: Pagination =
            serde_json::from_value(serde_json::json!({"skip": skip, "limit": limit})).unwrap();
        prop_assert_eq!(page, Pagination { skip, limit });
    }
}
