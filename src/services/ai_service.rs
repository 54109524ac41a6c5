use crate::config::{Config, DEFAULT_DUPLICATE_THRESHOLD, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};
use crate::error::{Error, Result};
use crate::models::assessment::{Assessment, AssessmentItem, AssessmentMeta, ItemKind};
use crate::services::aptitude_service::APTITUDE_SKILL;
use crate::services::assembler_service::unique_id;
use crate::services::coverage_service::CoverageService;
use crate::utils::random::{shuffle, RandomSource};
use crate::utils::text::similarity;
use crate::utils::token::generate_item_id;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info};

const MCQ_OPTION_COUNT: usize = 4;

const SYSTEM_PROMPT: &str = "You are an expert assessment designer specializing in unique, diverse, \
high-quality professional quiz questions. Every question must be distinct, with no repeated scenarios \
or answer patterns. Respond ONLY with valid JSON matching the requested structure. No explanations.";

/// Something that can produce a complete assessment for a request. Any error
/// makes the caller fall back to local assembly.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteGenerator: Send + Sync {
    async fn generate(&self, meta: &AssessmentMeta) -> Result<Assessment>;
}

/// OpenAI-compatible chat-completion client.
#[derive(Clone)]
pub struct AIService {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
    duplicate_threshold: f64,
}

impl AIService {
    pub fn new(api_key: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            timeout: Duration::from_secs(60),
            duplicate_threshold: DEFAULT_DUPLICATE_THRESHOLD,
        }
    }

    /// Returns `None` when no API key is configured.
    pub fn from_config(config: &Config, client: Client) -> Option<Self> {
        let api_key = config.openai_api_key.clone()?;
        Some(
            Self::new(api_key, client)
                .with_base_url(&config.openai_base_url)
                .with_model(&config.openai_model)
                .with_timeout(Duration::from_secs(config.remote_timeout_secs))
                .with_duplicate_threshold(config.duplicate_similarity_threshold),
        )
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_duplicate_threshold(mut self, threshold: f64) -> Self {
        self.duplicate_threshold = threshold;
        self
    }

    async fn chat_openai(&self, payload: JsonValue) -> Result<String> {
        let res = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Error::RemoteGeneration(format!("OpenAI API Error {}: {}", status, text)));
        }

        let body: JsonValue = res.json().await?;
        let content = body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(Error::RemoteGeneration("Empty response from OpenAI API".to_string()));
        }
        Ok(content.to_string())
    }
}

#[async_trait]
impl RemoteGenerator for AIService {
    async fn generate(&self, meta: &AssessmentMeta) -> Result<Assessment> {
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": build_prompt(meta)?}
            ],
            "temperature": 0.7,
            "max_tokens": 4000,
            "top_p": 0.9,
            "frequency_penalty": 0.6,
            "presence_penalty": 0.6
        });

        debug!(model = %self.model, role = %meta.role, "Sending assessment request to OpenAI");
        let content = self.chat_openai(payload).await?;

        let assessment = {
            let mut rng = rand::thread_rng();
            parse_remote_assessment(&content, meta, self.duplicate_threshold, &mut rng)?
        };
        info!(items = assessment.items.len(), "Remote assessment accepted");
        Ok(assessment)
    }
}

pub fn build_prompt(meta: &AssessmentMeta) -> Result<String> {
    let counts = meta.counts;
    let skills = if meta.skills.is_empty() {
        "general skills".to_string()
    } else {
        meta.skills.join(", ")
    };
    let job_description = meta
        .job_description
        .as_deref()
        .map(|jd| format!("- Job description:\n{}\n", jd))
        .unwrap_or_default();

    Ok(format!(
        r#"You are creating a professional quiz for a {role} position.

REQUIREMENTS:
- Role: {role}
- Skills to assess: {skills}
- Difficulty level: {difficulty}
- Question counts: {mcq} MCQs, {saq} SAQs, {caselet} Caselets, {aptitude} Aptitude questions
{job_description}
RULES:
- Every question must be unique and test a different aspect of the skills.
- MCQ: exactly 4 realistic options, one correct, answerIndex 0-3, vary the correct position.
- SAQ: open-ended, include expectedAnswer and rubric.
- Caselet: realistic passage, a clear prompt and a rubric, each in a different business scenario.
- Aptitude: numerical or logical reasoning, 4 options, answer holds the correct option text.
- Create exactly {total} items, distribute skills evenly, all at {difficulty} difficulty.
- Return ONLY valid JSON.

Return JSON in this exact structure:
{{"meta": {meta_json}, "items": [ ... ], "coverage": {{ ... }}}}

Item shapes:
- MCQ: {{ id, type: "mcq", skill, difficulty, question, options: string[4], answerIndex, rationale }}
- SAQ: {{ id, type: "saq", skill, difficulty, question, expectedAnswer, rubric }}
- Caselet: {{ id, type: "caselet", skill, difficulty, passage, prompt, rubric }}
- Aptitude: {{ id, type: "aptitude", skill: "aptitude", difficulty, question, options: string[4], answer }}"#,
        role = meta.role,
        skills = skills,
        difficulty = meta.difficulty,
        mcq = counts.mcq,
        saq = counts.saq,
        caselet = counts.caselet,
        aptitude = counts.aptitude,
        job_description = job_description,
        total = counts.total(),
        meta_json = serde_json::to_string(meta)?,
    ))
}

/// Slice from the first `{` to the last `}`, which tolerates markdown fences
/// and chatter around the payload.
pub fn extract_json_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&content[start..=end])
}

/// First pair of items whose display text is identical or whose similarity
/// exceeds `threshold`.
pub fn find_duplicate(items: &[AssessmentItem], threshold: f64) -> Option<(usize, usize)> {
    let texts: Vec<&str> = items.iter().map(|i| i.display_text()).collect();
    for i in 0..texts.len() {
        for j in (i + 1)..texts.len() {
            if texts[i] == texts[j] || similarity(texts[i], texts[j]) > threshold {
                return Some((i, j));
            }
        }
    }
    None
}

/// Turns a chat-completion reply into an assessment for `meta`. The reply's
/// own meta and coverage are discarded: the requested meta is kept and
/// coverage is recomputed from the accepted items.
pub fn parse_remote_assessment(
    content: &str,
    meta: &AssessmentMeta,
    duplicate_threshold: f64,
    rng: &mut dyn RandomSource,
) -> Result<Assessment> {
    let json = extract_json_object(content)
        .ok_or_else(|| Error::RemoteGeneration("No valid JSON object found in response".to_string()))?;
    let raw: JsonValue = serde_json::from_str(json)?;

    let raw_items = match (raw.get("meta"), raw.get("items")) {
        (Some(meta), Some(JsonValue::Array(items))) if !meta.is_null() => items.clone(),
        _ => return Err(Error::RemoteGeneration("Invalid assessment structure".to_string())),
    };

    let mut items: Vec<AssessmentItem> = serde_json::from_value(JsonValue::Array(raw_items))?;
    sanitize_items(&mut items, rng)?;

    if let Some((first, second)) = find_duplicate(&items, duplicate_threshold) {
        return Err(Error::RemoteGeneration(format!(
            "Detected duplicate or highly similar questions ({} and {})",
            items[first].id, items[second].id
        )));
    }

    let coverage = CoverageService::compute(&items);
    Ok(Assessment {
        meta: meta.clone(),
        items,
        coverage,
    })
}

/// Checks MCQ shape, reshuffles MCQ options so the correct position varies,
/// labels aptitude items and gives every item a unique id.
fn sanitize_items(items: &mut [AssessmentItem], rng: &mut dyn RandomSource) -> Result<()> {
    let mut used_ids = HashSet::new();

    for item in items.iter_mut() {
        match &mut item.kind {
            ItemKind::Mcq(mcq) => {
                if mcq.options.len() != MCQ_OPTION_COUNT || mcq.answer_index >= mcq.options.len() {
                    return Err(Error::RemoteGeneration(format!(
                        "MCQ must have {} options and a valid answerIndex",
                        MCQ_OPTION_COUNT
                    )));
                }
                let correct = mcq.options[mcq.answer_index].clone();
                shuffle(rng, &mut mcq.options);
                mcq.answer_index = mcq.options.iter().position(|o| *o == correct).unwrap_or(0);
            }
            ItemKind::Aptitude(_) => item.skill = APTITUDE_SKILL.to_string(),
            ItemKind::Saq(_) | ItemKind::Caselet(_) => {}
        }

        let id = item.id.trim();
        let id = if id.is_empty() {
            generate_item_id(rng, item.item_type().id_prefix())
        } else {
            id.to_string()
        };
        item.id = unique_id(&mut used_ids, id);
    }
    Ok(())
}
