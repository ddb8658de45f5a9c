//! LLM prompts for the fact-check pipeline.
//!
//! Three prompts drive the three model calls: perspective query planning,
//! input bias classification, and report synthesis.

/// Prompt for generating one search query per target perspective.
pub const PLAN_QUERIES_PROMPT: &str = r#"Generate news-index search queries for the topic: "{topic}"

Create 5 different query variations targeting political perspectives:
1. GENERAL: Main keywords with OR operators - 5-8 relevant terms
2. LEFT: Keywords + left-leaning sources and critical angles
3. RIGHT: Keywords + right-leaning sources and supportive angles
4. CENTER: Keywords + mainstream/centrist sources
5. INTERNATIONAL: Keywords + international/non-US perspectives

Format each as: (keyword1 OR keyword2 OR keyword3 OR ...)
Use quotes for exact phrases like "U.S. military" or "climate change"
Include synonyms, acronyms, and related terms.

Example for "US troops Greenland":
GENERAL: ("us military" OR "u.s. military" OR pentagon OR "us troops" OR "american forces" OR "u.s. army" OR "united states military") AND greenland
LEFT: ("us military" OR pentagon OR "us troops") AND greenland AND (domain:cnn.com OR domain:msnbc.com OR domain:theguardian.com OR imperialism OR expansion OR sovereignty)
RIGHT: ("us military" OR pentagon OR "us troops") AND greenland AND (domain:foxnews.com OR domain:breitbart.com OR domain:nypost.com OR defense OR security OR strategy)
CENTER: ("us military" OR pentagon OR "us troops") AND greenland AND (domain:reuters.com OR domain:apnews.com OR domain:bbc.com)
INTERNATIONAL: ("us military" OR pentagon OR "us troops") AND greenland AND (sourcecountry:DK OR sourcecountry:GL OR sourcecountry:RU OR sourcecountry:CN OR sourcecountry:EU)

Now generate for: "{topic}"
Return ONLY the 5 queries, one per line, labeled GENERAL:, LEFT:, RIGHT:, CENTER:, INTERNATIONAL:"#;

/// Prompt for classifying the political bias of the input text.
pub const CLASSIFY_BIAS_PROMPT: &str = r#"Analyze the political bias of the following text:
"{topic}"

Classify it as one of:
- LEFT-LEANING (Progressive, Liberal, Social Justice focus)
- RIGHT-LEANING (Conservative, Traditional, Market-focus)
- CENTER/NEUTRAL (Objective reporting, balanced viewpoints)

Return ONLY the classification label and a 1-sentence explanation of why it fits that label.
Format: [LABEL]: [Explanation]"#;

/// Prompt for synthesizing the final multi-perspective report.
pub const SYNTHESIZE_REPORT_PROMPT: &str = r#"You are an expert fact-checker specializing in multi-perspective analysis.

TOPIC: {topic}

INPUT BIAS ANALYSIS:
{bias}

ARTICLES RETRIEVED BY POLITICAL PERSPECTIVE:
{context}

TASK:
Analyze the coverage from LEFT, RIGHT, CENTER, and INTERNATIONAL perspectives.
Identify what each perspective emphasizes, what they agree on, and where they diverge.

IMPORTANT:
- ANY time you mention a specific source or claim that comes from one of the articles, you MUST hyperlink it using [Source Name](URL).
- All items in 'Key Sources' MUST be clickable hyperlinks.
- Use ONLY sources provided in the context.

OUTPUT FORMAT (Strict JSON-compatible Markdown):

**Core Fact**: [What actually happened? State the verifiable facts. 2-3 sentences]

**Input Bias Analysis**:
{bias}

**Perspectives**:
*   **Left-Leaning View**: [Summary of left-oriented coverage. What do progressive/liberal sources emphasize? What concerns do they raise?]
*   **Right-Leaning View**: [Summary of right-oriented coverage. What do conservative sources emphasize? What benefits do they highlight?]
*   **Center/Mainstream View**: [Summary of centrist coverage. What do neutral sources report? The middle ground perspective.]
*   **International View**: [Summary of non-US/international coverage. How do other countries view this? Alternative perspectives.]

**Article Count by Perspective**:
*   Left: [X articles]
*   Right: [X articles]
*   Center: [X articles]
*   International: [X articles]

**Key Sources** (Include at least 5 with actual URLs from context):
*   [Source Name - Domain](URL)
*   [Source Name - Domain](URL)
*   [Source Name - Domain](URL)
*   [Source Name - Domain](URL)
*   [Source Name - Domain](URL)

**Media Bias Analysis**: [Which perspective dominated coverage? Any notable absences? Geographic concentration? Use hyperlinks for sources mentioned.]

**Conclusion**: [**TRUE** | **FALSE** | **MISLEADING** | **COMPLEX** | **UNVERIFIED**]
[2-3 sentence synthesis. Note if perspectives agree or diverge significantly. Hyperlink supporting evidence.]

CRITICAL: Use ONLY sources provided. Include actual URLs. If a perspective has no articles, state "No coverage found from this perspective.""#;

/// Format the query-planning prompt.
pub fn format_plan_queries_prompt(topic: &str) -> String {
    PLAN_QUERIES_PROMPT.replace("{topic}", topic)
}

/// Format the bias-classification prompt.
pub fn format_classify_bias_prompt(topic: &str) -> String {
    CLASSIFY_BIAS_PROMPT.replace("{topic}", topic)
}

/// Format the report-synthesis prompt.
pub fn format_synthesize_report_prompt(topic: &str, bias: &str, context: &str) -> String {
    SYNTHESIZE_REPORT_PROMPT
        .replace("{topic}", topic)
        .replace("{bias}", bias)
        .replace("{context}", context)
}
