//! Analysis service URL construction.

use reqwest::Url;

use crate::BackendError;

/// Builds the document submission URL.
///
/// URL format: `{BASE}/analyze/`
///
/// # Example
///
/// ```
/// use finlens_analysis::url::analyze_url;
///
/// assert_eq!(analyze_url("http://127.0.0.1:8000"), "http://127.0.0.1:8000/analyze/");
/// assert_eq!(analyze_url("http://127.0.0.1:8000/"), "http://127.0.0.1:8000/analyze/");
/// ```
#[must_use]
pub fn analyze_url(base_url: &str) -> String {
    format!("{}/analyze/", base_url.trim_end_matches('/'))
}

/// Builds the task status URL.
///
/// URL format: `{BASE}/task/{TASK_ID}`, with the task id percent-encoded as
/// a single path segment.
///
/// # Errors
///
/// Returns [`BackendError::InvalidRequest`] if the base URL does not parse or
/// cannot carry a path.
pub fn task_url(base_url: &str, task_id: &str) -> Result<Url, BackendError> {
    let base = format!("{}/", base_url.trim_end_matches('/'));
    let mut url = Url::parse(&base).map_err(|e| BackendError::InvalidRequest(format!("{base_url}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| BackendError::InvalidRequest(format!("{base_url} cannot be a base URL")))?
        .pop_if_empty()
        .push("task")
        .push(task_id);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_url() {
        assert_eq!(
            task_url("http://127.0.0.1:8000", "4f1c").unwrap().as_str(),
            "http://127.0.0.1:8000/task/4f1c"
        );
    }

    #[test]
    fn test_task_url_trailing_slashes() {
        assert_eq!(
            task_url("https://analysis.example.com/api//", "t1").unwrap().as_str(),
            "https://analysis.example.com/api/task/t1"
        );
    }

    #[test]
    fn test_task_url_encodes_task_id() {
        let url = task_url("http://127.0.0.1:8000", "a/b?c#d").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/task/a%2Fb%3Fc%23d");
        assert_eq!(url.path_segments().unwrap().count(), 2);
    }

    #[test]
    fn test_task_url_invalid_base() {
        assert!(matches!(
            task_url("not a url", "t1"),
            Err(BackendError::InvalidRequest(_))
        ));
    }
}
