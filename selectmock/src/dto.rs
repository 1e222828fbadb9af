use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A single item of a selectable list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl SelectOption {
    pub fn new(label: &str, value: i64) -> Self {
        Self {
            label: label.to_string(),
            value,
            disabled: None,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = Some(true);
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }
}

/// Success envelope returned by the mock interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectResponse {
    pub code: i32,
    pub data: Vec<SelectOption>,
    pub message: String,
}

static SELECT_RESPONSE: LazyLock<SelectResponse> = LazyLock::new(|| SelectResponse {
    code: 0,
    data: vec![
        SelectOption::new("apple", 1),
        SelectOption::new("banana", 2),
        SelectOption::new("tangerine", 3).disabled(),
    ],
    message: "Get Select data successfully".to_string(),
});

/// The canned payload, shared by every successful call.
pub fn select_response() -> &'static SelectResponse {
    &SELECT_RESPONSE
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_response_content() {
        let res = select_response();
        assert_eq!(res.code, 0);
        assert_eq!(res.message, "Get Select data successfully");

        let labels: Vec<&str> = res.data.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["apple", "banana", "tangerine"]);

        let values: Vec<i64> = res.data.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_only_last_option_disabled() {
        let res = select_response();
        assert_eq!(res.data.len(), 3);
        assert_eq!(res.data[0].disabled, None);
        assert_eq!(res.data[1].disabled, None);
        assert_eq!(res.data[2].disabled, Some(true));
        assert!(res.data[2].is_disabled());
        assert!(!res.data[0].is_disabled());
    }

    #[test]
    fn test_select_response_is_shared() {
        let a = select_response();
        let b = select_response();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_select_response_json() {
        let value = serde_json::to_value(select_response()).unwrap();
        let expected = json!({
            "code": 0,
            "data": [
                { "label": "apple", "value": 1 },
                { "label": "banana", "value": 2 },
                { "label": "tangerine", "value": 3, "disabled": true }
            ],
            "message": "Get Select data successfully"
        });
        assert_eq!(value, expected);
    }
}
