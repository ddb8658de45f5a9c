//! Query planning and input bias classification.
//!
//! Both operations are best-effort: a failed or malformed model response
//! degrades to a labeled fallback value and never aborts the pipeline.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::pipeline::prompts;
use crate::traits::model::Model;
use crate::types::bias::BiasClassification;
use crate::types::perspective::{Perspective, PerspectiveQuery};

/// Classify the political bias of the input text. One model call.
///
/// On model failure returns `UNKNOWN` with a fixed rationale rather than
/// propagating the error.
pub async fn classify_bias<M: Model + ?Sized>(topic: &str, model: &M) -> BiasClassification {
    let prompt = prompts::format_classify_bias_prompt(topic);
    match model.complete(&prompt).await {
        Ok(response) => BiasClassification::parse(&response),
        Err(e) => {
            warn!(error = %e, "bias classification failed; defaulting to UNKNOWN");
            BiasClassification::unknown("Error during analysis")
        }
    }
}

/// Plan one labeled search query per target perspective. One model call.
///
/// The response must contain each of the five perspective labels exactly
/// once; anything else is treated as total failure and replaced wholesale
/// by three copies of the raw topic. Malformed planner output is never
/// partially used.
pub async fn plan_queries<M: Model + ?Sized>(topic: &str, model: &M) -> Vec<PerspectiveQuery> {
    let prompt = prompts::format_plan_queries_prompt(topic);
    match model.complete(&prompt).await {
        Ok(response) => match parse_query_lines(&response) {
            Some(queries) => {
                debug!(count = queries.len(), "planner produced labeled queries");
                queries
            }
            None => {
                warn!("planner output failed label validation; falling back to raw topic");
                fallback_queries(topic)
            }
        },
        Err(e) => {
            warn!(error = %e, "query planning failed; falling back to raw topic");
            fallback_queries(topic)
        }
    }
}

/// Three identical raw-topic queries under the first three labels.
fn fallback_queries(topic: &str) -> Vec<PerspectiveQuery> {
    vec![
        PerspectiveQuery::new(Perspective::General, topic),
        PerspectiveQuery::new(Perspective::Left, topic),
        PerspectiveQuery::new(Perspective::Right, topic),
    ]
}

/// Match response lines against the five known labels.
///
/// A line is accepted for a perspective when it starts with that label
/// (list markers and markdown emphasis tolerated) followed by a colon and
/// a non-empty query. A label seen zero times or more than once fails the
/// whole response.
pub(crate) fn parse_query_lines(response: &str) -> Option<Vec<PerspectiveQuery>> {
    let mut found: IndexMap<Perspective, String> = IndexMap::new();

    for line in response.lines() {
        let line = strip_list_marker(line.trim());
        for perspective in Perspective::ALL {
            if let Some(query) = match_label(line, perspective.label()) {
                if found.insert(perspective, query).is_some() {
                    return None; // duplicate label
                }
            }
        }
    }

    if found.len() != Perspective::ALL.len() {
        return None;
    }

    Some(
        Perspective::ALL
            .iter()
            .map(|p| PerspectiveQuery::new(*p, found[p].clone()))
            .collect(),
    )
}

/// Strip a leading enumeration marker like "1.", "2)", "-", or "*".
fn strip_list_marker(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() < line.len() {
        rest.trim_start_matches(['.', ')']).trim_start()
    } else {
        line.trim_start_matches(['-', '*']).trim_start()
    }
}

/// Return the trimmed query text if the line is `LABEL: query`.
fn match_label(line: &str, label: &str) -> Option<String> {
    let line = line.trim_start_matches(['*', '_']).trim_start();
    let matches = line
        .get(..label.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(label));
    if !matches {
        return None;
    }

    let rest = line[label.len()..].trim_start_matches(['*', '_']).trim_start();
    let query = rest.strip_prefix(':')?.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockModel;

    const VALID_RESPONSE: &str = "\
GENERAL: (troops OR military) AND greenland
LEFT: (troops) AND greenland AND sovereignty
RIGHT: (troops) AND greenland AND security
CENTER: (troops) AND greenland AND domain:reuters.com
INTERNATIONAL: (troops) AND greenland AND sourcecountry:DK";

    #[test]
    fn test_parse_valid_response_in_label_order() {
        let queries = parse_query_lines(VALID_RESPONSE).unwrap();
        assert_eq!(queries.len(), 5);
        assert_eq!(queries[0].perspective, Perspective::General);
        assert_eq!(queries[4].perspective, Perspective::International);
        assert_eq!(queries[3].query, "(troops) AND greenland AND domain:reuters.com");
    }

    #[test]
    fn test_parse_tolerates_preamble_numbering_and_emphasis() {
        let response = "\
Here are the queries:
1. **GENERAL**: alpha
2. **LEFT**: beta
3. **RIGHT**: gamma
4. **CENTER**: delta
5. **INTERNATIONAL**: epsilon";

        let queries = parse_query_lines(response).unwrap();
        assert_eq!(queries[0].query, "alpha");
        assert_eq!(queries[4].query, "epsilon");
    }

    #[test]
    fn test_parse_rejects_missing_label() {
        let response = "\
GENERAL: alpha
LEFT: beta
RIGHT: gamma
CENTER: delta";
        assert!(parse_query_lines(response).is_none());
    }

    #[test]
    fn test_parse_rejects_duplicate_label() {
        let response = format!("{VALID_RESPONSE}\nLEFT: another left query");
        assert!(parse_query_lines(&response).is_none());
    }

    #[test]
    fn test_parse_rejects_empty_query_text() {
        let response = "\
GENERAL: alpha
LEFT:
RIGHT: gamma
CENTER: delta
INTERNATIONAL: epsilon";
        assert!(parse_query_lines(response).is_none());
    }

    #[tokio::test]
    async fn test_plan_queries_uses_parsed_output() {
        let model = MockModel::new().with_response("search queries", VALID_RESPONSE);
        let queries = plan_queries("Germany troops Greenland", &model).await;
        assert_eq!(queries.len(), 5);
    }

    #[tokio::test]
    async fn test_plan_queries_falls_back_on_malformed_output() {
        let model = MockModel::new().with_response("search queries", "no labels here");
        let queries = plan_queries("Germany troops Greenland", &model).await;

        assert_eq!(queries.len(), 3);
        assert!(queries.iter().all(|q| q.query == "Germany troops Greenland"));
        assert_eq!(queries[0].perspective, Perspective::General);
        assert_eq!(queries[1].perspective, Perspective::Left);
        assert_eq!(queries[2].perspective, Perspective::Right);
    }

    #[tokio::test]
    async fn test_plan_queries_falls_back_on_model_failure() {
        let model = MockModel::failing();
        let queries = plan_queries("topic", &model).await;
        assert_eq!(queries.len(), 3);
        assert!(queries.iter().all(|q| q.query == "topic"));
    }

    #[tokio::test]
    async fn test_classify_bias_parses_label() {
        let model =
            MockModel::new().with_response("political bias", "LEFT-LEANING: Progressive framing.");
        let bias = classify_bias("topic", &model).await;
        assert_eq!(bias.label, crate::types::bias::BiasLabel::LeftLeaning);
    }

    #[tokio::test]
    async fn test_classify_bias_absorbs_model_failure() {
        let model = MockModel::failing();
        let bias = classify_bias("topic", &model).await;
        assert_eq!(bias.label, crate::types::bias::BiasLabel::Unknown);
        assert_eq!(bias.rationale, "Error during analysis");
    }
}
