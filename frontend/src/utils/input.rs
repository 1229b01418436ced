use crate::api::Id;

/// Id from a `<select>` value; the empty placeholder option yields `None`.
pub fn parse_id(value: &str) -> Option<Id> {
    value.trim().parse::<Id>().ok().filter(|id| *id > 0)
}

pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn select_values_parse_to_ids() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(" 3 "), Some(3));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("abc"), None);
    }

    #[wasm_bindgen_test]
    fn blank_text_is_none() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" CS101 "), Some("CS101".to_string()));
    }
}
