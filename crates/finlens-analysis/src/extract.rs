//! Turns the service's raw text into a display-ready [`AnalysisResult`].
//!
//! The service returns two free-form strings: a narrative (`analysis_results`)
//! and a metrics listing (`financial_metrics`). Every derived field is a pure
//! function of those two strings.

use finlens_types::{AnalysisResult, Sentiment};

/// Prefix of every summary derived from a completed remote task.
pub const SUMMARY_PREFIX: &str = "Analysis complete. ";

/// Marker that starts a key-insight line in the metrics text.
pub const INSIGHT_MARKER: char = '-';

/// Shown when no metrics line carries the insight marker.
pub const NO_INSIGHTS: &str = "No specific insights extracted";

/// Case-sensitive anchor after which recommendations are read.
pub const RECOMMENDATION_ANCHOR: &str = "challenges";

/// Shown when the narrative has no recommendation anchor.
pub const NO_RECOMMENDATIONS: &str = "Review the complete analysis for detailed recommendations";

/// Lines must be longer than this to count as a recommendation.
pub const MIN_RECOMMENDATION_LEN: usize = 10;

/// At most this many recommendations are kept.
pub const MAX_RECOMMENDATIONS: usize = 4;

/// Keywords that mark a narrative as positive. Checked first.
pub const POSITIVE_KEYWORDS: [&str; 3] = ["growth", "increase", "improved"];

/// Keywords that mark a narrative as negative.
pub const NEGATIVE_KEYWORDS: [&str; 3] = ["decline", "decrease", "risk"];

/// Builds the summary from the narrative's first line.
#[must_use]
pub fn summarize(analysis_results: &str) -> String {
    let first_line = analysis_results.lines().next().unwrap_or_default();
    format!("{SUMMARY_PREFIX}{first_line}")
}

/// Collects metrics lines that start with the insight marker.
///
/// Leading whitespace and the marker itself are stripped. Bare markers and
/// dash rules (`-`, `---`) carry no text and are skipped. Falls back to a
/// single placeholder when nothing matches.
///
/// # Example
///
/// ```
/// use finlens_analysis::extract::key_insights;
///
/// let insights = key_insights("Q3 metrics\n- Revenue: $245.8M\n  - EPS: $1.20");
/// assert_eq!(insights, vec!["Revenue: $245.8M", "EPS: $1.20"]);
/// ```
#[must_use]
pub fn key_insights(financial_metrics: &str) -> Vec<String> {
    let insights: Vec<String> = financial_metrics
        .lines()
        .filter_map(|line| line.trim().strip_prefix(INSIGHT_MARKER))
        .map(str::trim)
        .filter(|insight| !insight.trim_start_matches('-').is_empty())
        .map(str::to_string)
        .collect();

    if insights.is_empty() {
        vec![NO_INSIGHTS.to_string()]
    } else {
        insights
    }
}

/// Classifies the narrative's tone by keyword.
#[must_use]
pub fn classify_sentiment(analysis_results: &str) -> Sentiment {
    let text = analysis_results.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|keyword| text.contains(keyword));

    if mentions(&POSITIVE_KEYWORDS) {
        Sentiment::Positive
    } else if mentions(&NEGATIVE_KEYWORDS) {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Reads recommendations from the text after the first anchor occurrence.
///
/// Keeps trimmed lines longer than [`MIN_RECOMMENDATION_LEN`], in order, up
/// to [`MAX_RECOMMENDATIONS`]. Without an anchor, or when no line qualifies,
/// returns a single placeholder.
#[must_use]
pub fn recommendations(analysis_results: &str) -> Vec<String> {
    let picked: Vec<String> = analysis_results
        .split_once(RECOMMENDATION_ANCHOR)
        .map(|(_, rest)| {
            rest.lines()
                .map(str::trim)
                .filter(|line| line.chars().count() > MIN_RECOMMENDATION_LEN)
                .take(MAX_RECOMMENDATIONS)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if picked.is_empty() {
        vec![NO_RECOMMENDATIONS.to_string()]
    } else {
        picked
    }
}

/// Derives the full result from a completed task's text.
#[must_use]
pub fn derive_result(analysis_results: &str, financial_metrics: &str) -> AnalysisResult {
    AnalysisResult {
        summary: summarize(analysis_results),
        analysis_results: analysis_results.to_string(),
        financial_metrics: financial_metrics.to_string(),
        key_insights: key_insights(financial_metrics),
        sentiment: classify_sentiment(analysis_results),
        recommendations: recommendations(analysis_results),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_uses_first_line() {
        assert_eq!(
            summarize("Revenue rose sharply.\nMargins held."),
            "Analysis complete. Revenue rose sharply."
        );
        assert_eq!(summarize(""), "Analysis complete. ");
    }

    #[test]
    fn test_key_insights_marker_lines_only() {
        let metrics = "- Revenue: $245.8M\nOperating summary\n  - EBITDA: $78.2M\nCash position strong\n-Debt-to-Equity: 0.82";
        let insights = key_insights(metrics);
        assert_eq!(
            insights,
            vec!["Revenue: $245.8M", "EBITDA: $78.2M", "Debt-to-Equity: 0.82"]
        );
    }

    #[test]
    fn test_key_insights_placeholder() {
        assert_eq!(key_insights("Revenue flat\nNo bullets"), vec![NO_INSIGHTS]);
        assert_eq!(key_insights(""), vec![NO_INSIGHTS]);
    }

    #[test]
    fn test_key_insights_skip_bare_markers() {
        assert_eq!(
            key_insights("-
- Revenue: 1
---
  -   "),
            vec!["Revenue: 1"]
        );
        assert_eq!(key_insights("-
---"), vec![NO_INSIGHTS]);
    }

    #[test]
    fn test_sentiment_priority() {
        assert_eq!(
            classify_sentiment("Revenue Growth offset by a DECLINE in margins"),
            Sentiment::Positive
        );
        assert_eq!(
            classify_sentiment("Currency risk weighs on outlook"),
            Sentiment::Negative
        );
        assert_eq!(classify_sentiment("Results were in line"), Sentiment::Neutral);
    }

    #[test]
    fn test_recommendations_capped_in_order() {
        let text = "Overview\nKey challenges ahead:\n\
                    Reduce exposure to Asian suppliers\n\
                    Hedge currency positions quarterly\n\
                    Expand the enterprise sales team\n\
                    Revisit the capital spending plan\n\
                    Monitor regulatory developments closely";
        let recs = recommendations(text);
        assert_eq!(
            recs,
            vec![
                "Reduce exposure to Asian suppliers",
                "Hedge currency positions quarterly",
                "Expand the enterprise sales team",
                "Revisit the capital spending plan",
            ]
        );
    }

    #[test]
    fn test_recommendations_skip_short_lines() {
        let text = "challenges\nshort\n\nDiversify revenue sources";
        assert_eq!(recommendations(text), vec!["Diversify revenue sources"]);
    }

    #[test]
    fn test_recommendations_anchor_is_case_sensitive() {
        let text = "Challenges:\nDiversify revenue sources";
        assert_eq!(recommendations(text), vec![NO_RECOMMENDATIONS]);
    }

    #[test]
    fn test_recommendations_without_anchor() {
        assert_eq!(
            recommendations("All good.\nNothing to add here at all."),
            vec![NO_RECOMMENDATIONS]
        );
    }

    #[test]
    fn test_derive_result() {
        let result = derive_result(
            "Revenue increase of 9%\nSupply challenges\nSecure a second supplier in Mexico",
            "- Revenue: $1.2B",
        );
        assert!(result.summary.starts_with(SUMMARY_PREFIX));
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.key_insights, vec!["Revenue: $1.2B"]);
        assert_eq!(result.recommendations, vec!["Secure a second supplier in Mexico"]);
    }
}
