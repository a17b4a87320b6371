//! Keyword-level analysis of AI call transcripts.
//!
//! Transcript messages come from the upstream voice platform as loosely typed
//! JSON. Every field is optional and a malformed field reads as absent, so
//! the analysis never fails once a transcript has been fetched.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::DateTime;
use qorehr_core::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gaps shorter than this many seconds are overlap noise.
pub const MIN_RESPONSE_GAP_SECONDS: f64 = 0.1;

/// Gaps longer than this many seconds are pauses, not responses.
pub const MAX_RESPONSE_GAP_SECONDS: f64 = 30.0;

const POSITIVE_WORDS: [&str; 7] = [
    "great",
    "good",
    "excellent",
    "thank",
    "appreciate",
    "happy",
    "yes",
];

const NEGATIVE_WORDS: [&str; 8] = [
    "bad", "issue", "problem", "sorry", "cannot", "error", "fail", "no",
];

const TOPIC_KEYWORDS: [(&str, &[&str]); 6] = [
    (
        "product inquiry",
        &["product", "purchase", "buy", "feature", "specification"],
    ),
    (
        "pricing",
        &["price", "cost", "discount", "offer", "package", "subscription"],
    ),
    (
        "technical support",
        &["help", "issue", "problem", "error", "not working", "broken"],
    ),
    (
        "account",
        &["account", "login", "password", "profile", "settings"],
    ),
    (
        "shipping",
        &["ship", "delivery", "track", "package", "arrived"],
    ),
    (
        "features",
        &["feature", "capability", "function", "can it", "does it"],
    ),
];

/// Start and end offsets of one utterance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallTimespan {
    /// Offset such as `"12.5s"`, a number of seconds, or an RFC 3339 timestamp.
    #[serde(default)]
    pub start: Option<Value>,
    /// Same formats as `start`.
    #[serde(default)]
    pub end: Option<Value>,
}

/// One transcript message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallMessage {
    /// Speaker role such as `MESSAGE_ROLE_AGENT`.
    #[serde(default)]
    pub role: Option<String>,
    /// Spoken or tool text.
    #[serde(default)]
    pub text: Option<String>,
    /// Present when the platform flagged the message as failed.
    #[serde(default)]
    pub error_details: Option<Value>,
    /// Timing of the utterance.
    #[serde(default)]
    pub timespan: Option<CallTimespan>,
}

impl CallMessage {
    /// Reads one `results` entry field by field; a field of the wrong type is `None`.
    #[must_use]
    pub fn from_entry(entry: &Value) -> Self {
        let string_field = |name: &str| entry.get(name).and_then(Value::as_str).map(str::to_owned);
        let timespan = entry
            .get("timespan")
            .filter(|timespan| timespan.is_object())
            .map(|timespan| CallTimespan {
                start: timespan.get("start").cloned(),
                end: timespan.get("end").cloned(),
            });

        Self {
            role: string_field("role"),
            text: string_field("text"),
            error_details: entry.get("errorDetails").cloned(),
            timespan,
        }
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }

    fn has_error(&self) -> bool {
        match &self.error_details {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::String(value)) => !value.is_empty(),
            Some(_) => true,
        }
    }

    fn start_seconds(&self) -> Option<f64> {
        self.timespan
            .as_ref()
            .and_then(|timespan| timespan.start.as_ref())
            .and_then(offset_seconds)
    }

    fn end_seconds(&self) -> Option<f64> {
        self.timespan
            .as_ref()
            .and_then(|timespan| timespan.end.as_ref())
            .and_then(offset_seconds)
    }
}

/// Extracts transcript messages from an upstream `{ "results": [...] }` page.
#[must_use]
pub fn parse_call_messages(payload: &Value) -> Vec<CallMessage> {
    payload
        .get("results")
        .and_then(Value::as_array)
        .map(|results| {
            results.iter().map(CallMessage::from_entry).collect()
        })
        .unwrap_or_default()
}

fn offset_seconds(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => {
            let raw = raw.trim();
            raw.strip_suffix('s')
                .unwrap_or(raw)
                .parse::<f64>()
                .ok()
                .or_else(|| {
                    DateTime::parse_from_rfc3339(raw)
                        .ok()
                        .map(|timestamp| timestamp.timestamp_millis() as f64 / 1000.0)
                })
        }
        _ => None,
    }
    .filter(|seconds| seconds.is_finite())
}

/// Requested depth of a call analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    /// Summary only.
    #[default]
    Default,
    /// Summary and sentiment.
    Sentiment,
    /// Summary and topics.
    Topics,
    /// Summary, sentiment and topics.
    Full,
}

impl AnalysisType {
    /// Returns the query-string value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sentiment => "sentiment",
            Self::Topics => "topics",
            Self::Full => "full",
        }
    }

    /// Returns every analysis type.
    #[must_use]
    pub fn all() -> [Self; 4] {
        [Self::Default, Self::Sentiment, Self::Topics, Self::Full]
    }

    fn includes_sentiment(self) -> bool {
        matches!(self, Self::Sentiment | Self::Full)
    }

    fn includes_topics(self) -> bool {
        matches!(self, Self::Topics | Self::Full)
    }
}

impl FromStr for AnalysisType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|analysis_type| analysis_type.as_str() == value)
            .ok_or_else(|| {
                AppError::Validation(
                    "invalid analysis type. Must be one of: default, sentiment, topics, full"
                        .to_owned(),
                )
            })
    }
}

/// Message counts and pacing of a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSummary {
    /// Number of messages.
    pub total_messages: usize,
    /// Message count per speaker role; missing roles count as `UNKNOWN`.
    pub messages_by_role: BTreeMap<String, usize>,
    /// Messages carrying error details.
    pub error_messages: usize,
    /// Mean gap in seconds between consecutive utterances, two decimals.
    pub avg_response_time: f64,
}

/// Overall tone of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// More positive than negative messages.
    Positive,
    /// Balanced or keyword-free.
    Neutral,
    /// More negative than positive messages.
    Negative,
}

/// Per-message sentiment tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    /// Messages with more positive than negative keywords.
    pub positive: usize,
    /// Messages with a tie.
    pub neutral: usize,
    /// Messages with more negative than positive keywords.
    pub negative: usize,
}

/// Keyword sentiment of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// Majority tone.
    pub overall: Sentiment,
    /// Per-message tallies.
    pub breakdown: SentimentBreakdown,
}

/// How strongly the leading topic dominated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicConfidence {
    /// Leading topic matched at most twice.
    Low,
    /// Leading topic matched three to five times.
    Medium,
    /// Leading topic matched more than five times.
    High,
}

/// Ranked conversation topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicAnalysis {
    /// Up to three topics, most mentioned first.
    pub main_topics: Vec<String>,
    /// Strength of the leading topic.
    pub confidence: TopicConfidence,
}

/// Analysis result; optional sections depend on [`AnalysisType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallAnalysis {
    /// Always present.
    pub summary: CallSummary,
    /// Present for `sentiment` and `full`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentAnalysis>,
    /// Present for `topics` and `full`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<TopicAnalysis>,
}

/// Runs the requested analysis over a transcript.
#[must_use]
pub fn analyze_call(messages: &[CallMessage], analysis_type: AnalysisType) -> CallAnalysis {
    CallAnalysis {
        summary: summarize(messages),
        sentiment: analysis_type
            .includes_sentiment()
            .then(|| analyze_sentiment(messages)),
        topics: analysis_type
            .includes_topics()
            .then(|| analyze_topics(messages)),
    }
}

/// Counts messages per role and errors, and measures pacing.
#[must_use]
pub fn summarize(messages: &[CallMessage]) -> CallSummary {
    let mut messages_by_role = BTreeMap::new();
    for message in messages {
        let role = message.role.as_deref().unwrap_or("UNKNOWN").to_owned();
        *messages_by_role.entry(role).or_insert(0) += 1;
    }

    CallSummary {
        total_messages: messages.len(),
        messages_by_role,
        error_messages: messages.iter().filter(|message| message.has_error()).count(),
        avg_response_time: average_response_time(messages),
    }
}

/// Mean gap between one utterance ending and the next starting.
///
/// Messages are ordered by start offset (missing offsets sort first) and only
/// gaps strictly between 0.1 and 30 seconds count.
#[must_use]
pub fn average_response_time(messages: &[CallMessage]) -> f64 {
    if messages.len() < 2 {
        return 0.0;
    }

    let mut ordered: Vec<&CallMessage> = messages.iter().collect();
    ordered.sort_by(|left, right| {
        left.start_seconds()
            .unwrap_or(0.0)
            .total_cmp(&right.start_seconds().unwrap_or(0.0))
    });

    let mut total = 0.0;
    let mut responses = 0_u32;
    for pair in ordered.windows(2) {
        let (Some(previous_end), Some(current_start)) =
            (pair[0].end_seconds(), pair[1].start_seconds())
        else {
            continue;
        };

        let gap = current_start - previous_end;
        if gap > MIN_RESPONSE_GAP_SECONDS && gap < MAX_RESPONSE_GAP_SECONDS {
            total += gap;
            responses += 1;
        }
    }

    if responses == 0 {
        return 0.0;
    }

    (total / f64::from(responses) * 100.0).round() / 100.0
}

/// Classifies each text message by positive versus negative keyword hits.
#[must_use]
pub fn analyze_sentiment(messages: &[CallMessage]) -> SentimentAnalysis {
    let mut breakdown = SentimentBreakdown::default();
    for text in messages.iter().filter_map(CallMessage::text) {
        let lowered = text.to_lowercase();
        let positive_hits = POSITIVE_WORDS
            .iter()
            .filter(|word| lowered.contains(*word))
            .count();
        let negative_hits = NEGATIVE_WORDS
            .iter()
            .filter(|word| lowered.contains(*word))
            .count();

        match positive_hits.cmp(&negative_hits) {
            std::cmp::Ordering::Greater => breakdown.positive += 1,
            std::cmp::Ordering::Less => breakdown.negative += 1,
            std::cmp::Ordering::Equal => breakdown.neutral += 1,
        }
    }

    let overall = match breakdown.positive.cmp(&breakdown.negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    };

    SentimentAnalysis { overall, breakdown }
}

/// Ranks predefined topics by whole-word keyword hits across the transcript.
#[must_use]
pub fn analyze_topics(messages: &[CallMessage]) -> TopicAnalysis {
    let transcript = messages
        .iter()
        .filter_map(CallMessage::text)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let mut ranked: Vec<(&str, usize)> = TOPIC_KEYWORDS
        .iter()
        .map(|(topic, keywords)| {
            let hits = keywords
                .iter()
                .map(|keyword| count_word_matches(transcript.as_str(), keyword))
                .sum();
            (*topic, hits)
        })
        .filter(|(_, hits)| *hits > 0)
        .collect();
    ranked.sort_by(|left, right| right.1.cmp(&left.1));

    let leading_hits = ranked.first().map_or(0, |(_, hits)| *hits);
    let confidence = if leading_hits > 5 {
        TopicConfidence::High
    } else if leading_hits > 2 {
        TopicConfidence::Medium
    } else {
        TopicConfidence::Low
    };

    TopicAnalysis {
        main_topics: ranked
            .into_iter()
            .take(3)
            .map(|(topic, _)| topic.to_owned())
            .collect(),
        confidence,
    }
}

fn is_word_character(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}

fn count_word_matches(text: &str, keyword: &str) -> usize {
    let step = keyword.chars().next().map_or(1, char::len_utf8);
    let mut matches = 0;
    let mut cursor = 0;
    while let Some(position) = text[cursor..].find(keyword) {
        let start = cursor + position;
        let end = start + keyword.len();
        let bounded_before = text[..start]
            .chars()
            .next_back()
            .is_none_or(|character| !is_word_character(character));
        let bounded_after = text[end..]
            .chars()
            .next()
            .is_none_or(|character| !is_word_character(character));

        if bounded_before && bounded_after {
            matches += 1;
            cursor = end;
        } else {
            cursor = start + step;
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    fn spoken(role: &str, text: &str, start: &str, end: &str) -> CallMessage {
        CallMessage {
            role: Some(role.to_owned()),
            text: Some(text.to_owned()),
            error_details: None,
            timespan: Some(CallTimespan {
                start: Some(json!(start)),
                end: Some(json!(end)),
            }),
        }
    }

    #[test]
    fn parses_results_page_and_counts_malformed_entries() {
        let payload = json!({
            "results": [
                {"role": "MESSAGE_ROLE_AGENT", "text": "Hello", "timespan": {"start": "0s", "end": "1.5s"}},
                {"role": "MESSAGE_ROLE_USER", "errorDetails": {"code": 3}},
                "garbage"
            ],
            "next": null
        });

        let messages = parse_call_messages(&payload);
        assert_eq!(messages.len(), 3);
        assert!(messages[1].has_error());
        assert_eq!(messages[2], CallMessage::default());
    }

    #[test]
    fn mistyped_fields_read_as_absent() {
        let payload = json!({
            "results": [
                {"role": "MESSAGE_ROLE_USER", "text": 5, "timespan": "soon"},
                {"role": 7, "text": "Thanks, that was great"}
            ]
        });

        let messages = parse_call_messages(&payload);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role.as_deref(), Some("MESSAGE_ROLE_USER"));
        assert_eq!(messages[0].text, None);
        assert_eq!(messages[0].timespan, None);
        assert_eq!(messages[1].role, None);

        let summary = summarize(&messages);
        assert_eq!(summary.total_messages, 2);
        assert_eq!(summary.messages_by_role.get("UNKNOWN"), Some(&1));
    }

    #[test]
    fn summary_counts_roles_and_errors() {
        let mut failed = spoken("MESSAGE_ROLE_USER", "hm", "2s", "3s");
        failed.error_details = Some(json!("timeout"));
        let messages = vec![
            spoken("MESSAGE_ROLE_AGENT", "Hi", "0s", "1s"),
            failed,
            CallMessage::default(),
        ];

        let summary = summarize(&messages);
        assert_eq!(summary.total_messages, 3);
        assert_eq!(summary.error_messages, 1);
        assert_eq!(summary.messages_by_role.get("UNKNOWN"), Some(&1));
        assert_eq!(summary.messages_by_role.get("MESSAGE_ROLE_AGENT"), Some(&1));
    }

    #[test]
    fn response_time_ignores_out_of_range_gaps() {
        let messages = vec![
            spoken("A", "one", "0s", "1s"),
            spoken("B", "two", "2.5s", "3s"),
            // 0.05s gap is overlap noise
            spoken("A", "three", "3.05s", "4s"),
            // 40s gap is a pause
            spoken("B", "four", "44s", "45s"),
            spoken("A", "five", "46.25s", "47s"),
        ];

        // (1.5 + 1.25) / 2
        assert_eq!(average_response_time(&messages), 1.38);
    }

    #[test]
    fn response_time_sorts_by_start_offset() {
        let messages = vec![
            spoken("B", "second", "3s", "4s"),
            spoken("A", "first", "0s", "1s"),
        ];
        assert_eq!(average_response_time(&messages), 2.0);
    }

    #[test]
    fn response_time_accepts_timestamps() {
        let messages = vec![
            spoken("A", "one", "2025-06-01T10:00:00Z", "2025-06-01T10:00:02Z"),
            spoken("B", "two", "2025-06-01T10:00:05Z", "2025-06-01T10:00:06Z"),
        ];
        assert_eq!(average_response_time(&messages), 3.0);
    }

    #[test]
    fn sentiment_counts_substring_hits() {
        let messages = vec![
            spoken("A", "Thank you, that is great", "0s", "1s"),
            spoken("B", "There is an issue and an error", "1s", "2s"),
            spoken("A", "Good, but sorry", "2s", "3s"),
            spoken("B", "Thanks, happy to help", "3s", "4s"),
        ];

        let sentiment = analyze_sentiment(&messages);
        assert_eq!(sentiment.breakdown.positive, 2);
        assert_eq!(sentiment.breakdown.negative, 1);
        assert_eq!(sentiment.breakdown.neutral, 1);
        assert_eq!(sentiment.overall, Sentiment::Positive);
    }

    #[test]
    fn topics_use_whole_words() {
        let messages = vec![
            spoken("A", "What is the price of the premium package?", "0s", "1s"),
            spoken("B", "The cost includes a discount. Shipping is tracked.", "1s", "2s"),
            spoken("A", "My login fails and the password reset is broken", "2s", "3s"),
        ];

        let topics = analyze_topics(&messages);
        assert_eq!(
            topics.main_topics,
            vec![
                "pricing".to_owned(),
                "account".to_owned(),
                "technical support".to_owned()
            ]
        );
        assert_eq!(topics.confidence, TopicConfidence::Medium);
    }

    #[test]
    fn word_matches_respect_boundaries() {
        assert_eq!(count_word_matches("shipping ship ships ship.", "ship"), 2);
        assert_eq!(count_word_matches("it is not working, not working", "not working"), 2);
    }

    #[test]
    fn analysis_type_controls_sections() {
        let messages = vec![spoken("A", "great", "0s", "1s")];
        let default = analyze_call(&messages, AnalysisType::Default);
        assert!(default.sentiment.is_none() && default.topics.is_none());

        let full = analyze_call(&messages, AnalysisType::Full);
        assert!(full.sentiment.is_some() && full.topics.is_some());

        assert!("summary".parse::<AnalysisType>().is_err());
    }

    proptest! {
        #[test]
        fn average_response_time_stays_in_window(
            offsets in proptest::collection::vec((0.0_f64..500.0, 0.0_f64..40.0), 0..24)
        ) {
            let messages: Vec<CallMessage> = offsets
                .iter()
                .map(|(start, length)| CallMessage {
                    timespan: Some(CallTimespan {
                        start: Some(json!(start)),
                        end: Some(json!(start + length)),
                    }),
                    ..CallMessage::default()
                })
                .collect();

            let average = average_response_time(&messages);
            prop_assert!(average == 0.0 || (0.1..=30.0).contains(&average));
        }

        #[test]
        fn sentiment_breakdown_covers_every_text_message(
            texts in proptest::collection::vec("[a-z ]{0,40}", 0..16)
        ) {
            let messages: Vec<CallMessage> = texts
                .iter()
                .map(|text| CallMessage { text: Some(text.clone()), ..CallMessage::default() })
                .collect();
            let expected = texts.iter().filter(|text| !text.is_empty()).count();

            let breakdown = analyze_sentiment(&messages).breakdown;
            prop_assert_eq!(breakdown.positive + breakdown.neutral + breakdown.negative, expected);
        }

        #[test]
        fn at_most_three_topics_are_reported(text in "[a-z ]{0,200}") {
            let messages = vec![CallMessage { text: Some(text), ..CallMessage::default() }];
            prop_assert!(analyze_topics(&messages).main_topics.len() <= 3);
        }
    }
}
