use crate::document::Document;
use crate::source::{CountSource, LoadError};
use serde_json::{Number, Value};
use tracing::{debug, error};

pub const VISITOR_COUNT_ID: &str = "visitor-count";
pub const COUNT_PREFIX: &str = "visitor count: ";
pub const LOAD_ERROR_TEXT: &str = "Error loading visitor count";
pub const LOG_PREFIX: &str = "Visitor counter error:";

/// Fetches the count once and writes the result into `#visitor-count`.
///
/// The element ends up holding either `"visitor count: <value>"` or the
/// fixed error text. Failures are logged once and returned to the caller
/// for inspection, never rethrown into the page.
pub async fn update_visitor_count<D, S>(document: &D, source: &S) -> Result<String, LoadError>
where
    D: Document + ?Sized,
    S: CountSource + ?Sized,
{
    let present = document.has_element(VISITOR_COUNT_ID);
    let result = load_count_text(source).await;

    let text = match &result {
        Ok(text) => text.as_str(),
        Err(_) => LOAD_ERROR_TEXT,
    };
    if present {
        document.set_text_content(VISITOR_COUNT_ID, text);
    } else {
        debug!("#{VISITOR_COUNT_ID} not found; leaving page untouched");
    }

    if let Err(err) = &result {
        error!("{LOG_PREFIX} {err}");
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        crate::web::console_error(err);
    }

    result
}

pub async fn load_count_text<S>(source: &S) -> Result<String, LoadError>
where
    S: CountSource + ?Sized,
{
    let body = source.fetch_body().await?;
    count_text(&body)
}

/// Builds the display text from a decoded response body.
pub fn count_text(body: &Value) -> Result<String, LoadError> {
    let count = match body {
        Value::Null => return Err(LoadError::NullBody),
        Value::Object(map) => map.get("count"),
        _ => None,
    };
    Ok(format!("{COUNT_PREFIX}{}", format_count(count)))
}

/// Renders `count` as page text. Integers are plain base-10 without
/// separators; an absent field renders as `undefined`.
pub fn format_count(count: Option<&Value>) -> String {
    match count {
        None => "undefined".to_owned(),
        Some(Value::Null) => "null".to_owned(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => format_number(number),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn format_number(number: &Number) -> String {
    if let Some(value) = number.as_u64() {
        return value.to_string();
    }
    if let Some(value) = number.as_i64() {
        return value.to_string();
    }
    match number.as_f64() {
        Some(value) if value.is_finite() && value.fract() == 0.0 => format!("{value:.0}"),
        _ => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;
    use crate::test_support::CapturedLogs;
    use async_trait::async_trait;
    use serde_json::json;
    use std::cell::Cell;

    struct StaticSource {
        body: &'static str,
        calls: Cell<usize>,
    }

    impl StaticSource {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl CountSource for StaticSource {
        async fn fetch_body(&self) -> Result<Value, LoadError> {
            self.calls.set(self.calls.get() + 1);
            Ok(serde_json::from_str(self.body)?)
        }
    }

    #[test]
    fn integer_counts_render_plain() {
        assert_eq!(count_text(&json!({ "count": 0 })).unwrap(), "visitor count: 0");
        assert_eq!(
            count_text(&json!({ "count": 1234567 })).unwrap(),
            "visitor count: 1234567"
        );
        assert_eq!(
            count_text(&json!({ "count": 12.0 })).unwrap(),
            "visitor count: 12"
        );
    }

    #[test]
    fn counts_beyond_u64_stay_base_10() {
        let body: Value = serde_json::from_str(r#"{"count": 100000000000000000000}"#).unwrap();
        assert_eq!(
            count_text(&body).unwrap(),
            "visitor count: 100000000000000000000"
        );
    }

    #[test]
    fn missing_count_renders_undefined() {
        assert_eq!(count_text(&json!({})).unwrap(), "visitor count: undefined");
        assert_eq!(count_text(&json!([1, 2])).unwrap(), "visitor count: undefined");
        assert_eq!(count_text(&json!(17)).unwrap(), "visitor count: undefined");
    }

    #[test]
    fn non_numeric_counts_are_stringified() {
        assert_eq!(format_count(Some(&json!(null))), "null");
        assert_eq!(format_count(Some(&json!("42"))), "42");
        assert_eq!(format_count(Some(&json!(true))), "true");
        assert_eq!(format_count(Some(&json!(1.5))), "1.5");
        assert_eq!(format_count(Some(&json!(-3))), "-3");
    }

    #[test]
    fn null_body_is_a_load_failure() {
        assert!(matches!(count_text(&Value::Null), Err(LoadError::NullBody)));
    }

    #[tokio::test]
    async fn update_writes_count_into_element() {
        let document = MemoryDocument::with_elements([VISITOR_COUNT_ID]);
        let source = StaticSource::new(r#"{"count": 42}"#);

        let text = update_visitor_count(&document, &source).await.unwrap();

        assert_eq!(text, "visitor count: 42");
        assert_eq!(
            document.text_content(VISITOR_COUNT_ID).as_deref(),
            Some("visitor count: 42")
        );
        assert_eq!(source.calls.get(), 1);
    }

    #[tokio::test]
    async fn update_writes_error_text_for_bad_body() {
        let document = MemoryDocument::with_elements([VISITOR_COUNT_ID]);
        let source = StaticSource::new("<html>oops</html>");

        let result = update_visitor_count(&document, &source).await;

        assert!(matches!(result, Err(LoadError::Decode(_))));
        assert_eq!(
            document.text_content(VISITOR_COUNT_ID).as_deref(),
            Some(LOAD_ERROR_TEXT)
        );
    }

    #[tokio::test]
    async fn update_without_element_still_fetches() {
        let document = MemoryDocument::with_elements(["unrelated"]);
        let source = StaticSource::new(r#"{"count": 3}"#);

        let text = update_visitor_count(&document, &source).await.unwrap();

        assert_eq!(text, "visitor count: 3");
        assert_eq!(source.calls.get(), 1);
        assert_eq!(document.text_content(VISITOR_COUNT_ID), None);
        assert_eq!(document.text_content("unrelated").as_deref(), Some(""));
    }

    #[tokio::test]
    async fn failure_logs_one_prefixed_line() {
        let (logs, _guard) = CapturedLogs::install();
        let document = MemoryDocument::with_elements([VISITOR_COUNT_ID]);

        let _ = update_visitor_count(&document, &StaticSource::new("not json")).await;

        assert_eq!(logs.lines_containing(LOG_PREFIX), 1);
    }

    #[tokio::test]
    async fn success_logs_nothing_prefixed() {
        let (logs, _guard) = CapturedLogs::install();
        let document = MemoryDocument::with_elements([VISITOR_COUNT_ID]);

        update_visitor_count(&document, &StaticSource::new(r#"{"count": 1}"#))
            .await
            .unwrap();

        assert_eq!(logs.lines_containing(LOG_PREFIX), 0);
    }
}
