//! AI narrative generation over the aggregated statistics.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::domain::catalog::{QuestionCatalog, StyleCategory};
use crate::domain::survey::AggregatedStats;
use crate::ports::{AiProvider, CompletionRequest};

/// Fixed text returned whenever the provider call fails.
pub const NARRATIVE_FALLBACK: &str =
    "AI service temporarily unavailable. Please check your network or API key.";

/// Fixed text returned when the provider succeeds with empty content.
const EMPTY_COMPLETION: &str = "Unable to generate insights.";

/// System prompt framing the narrative request.
const SYSTEM_PROMPT: &str = "You are an expert management trainer conducting a live workshop.";

/// How many valued qualities the prompt highlights.
const TOP_QUALITIES: usize = 3;

/// Errors the caller must handle; provider failures are not among them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrativeError {
    #[error("a narrative generation is already in progress")]
    GenerationInProgress,
}

/// Formats aggregated statistics into a prompt, submits it once to the
/// provider, and returns markdown text.
///
/// Any provider failure is logged and converted into the fixed
/// [`NARRATIVE_FALLBACK`] string, so callers only distinguish "busy" from
/// "text present". A busy flag rejects a second generation while one is
/// pending; there is no cancellation. Callers are responsible for not
/// invoking this with zero participants.
pub struct NarrativeService {
    provider: Arc<dyn AiProvider>,
    max_tokens: u32,
    busy: AtomicBool,
}

impl NarrativeService {
    /// Creates a service over the given provider.
    pub fn new(provider: Arc<dyn AiProvider>, max_tokens: u32) -> Self {
        Self {
            provider,
            max_tokens,
            busy: AtomicBool::new(false),
        }
    }

    /// Returns true while a generation is pending.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Runs one generation. One provider attempt, no retry.
    pub async fn generate(
        &self,
        stats: &AggregatedStats,
        catalog: &QuestionCatalog,
    ) -> Result<String, NarrativeError> {
        let _guard = BusyGuard::acquire(&self.busy)?;

        let request = CompletionRequest::new(build_prompt(stats, catalog))
            .with_system(SYSTEM_PROMPT)
            .with_max_tokens(self.max_tokens);

        match self.provider.complete(request).await {
            Ok(response) => {
                info!(
                    model = %response.model,
                    finish_reason = ?response.finish_reason,
                    total_tokens = response.usage.total(),
                    "narrative generated"
                );
                if response.content.trim().is_empty() {
                    Ok(EMPTY_COMPLETION.to_string())
                } else {
                    Ok(response.content)
                }
            }
            Err(err) => {
                error!(error = %err, "narrative generation failed");
                Ok(NARRATIVE_FALLBACK.to_string())
            }
        }
    }
}

/// Clears the busy flag when the pending generation settles.
struct BusyGuard<'a> {
    busy: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(busy: &'a AtomicBool) -> Result<Self, NarrativeError> {
        busy.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| NarrativeError::GenerationInProgress)?;
        Ok(Self { busy })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// Builds the narrative prompt from the style distribution (as percentages)
/// and the most-selected valued qualities.
pub fn build_prompt(stats: &AggregatedStats, catalog: &QuestionCatalog) -> String {
    let style_summary = StyleCategory::ALL
        .iter()
        .filter_map(|&style| {
            let count = stats.style_count(style);
            if count == 0 {
                return None;
            }
            Some(format!(
                "- {}: {} people ({})",
                style.label(),
                count,
                stats.style_percentage(style)
            ))
        })
        .collect::<Vec<_>>()
        .join("\n");

    let top_qualities = catalog
        .qualities_question()
        .map(|question| {
            stats
                .ranked_options(question)
                .into_iter()
                .take(TOP_QUALITIES)
                .map(|(option, count)| format!("{} ({} votes)", option.text, count))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    format!(
        "You have just surveyed the {total} participants in the room.\n\
         \n\
         Here is the real-time data breakdown:\n\
         \n\
         ### Management Style Distribution (Dominant Tendencies):\n\
         {style_summary}\n\
         \n\
         ### Top 3 Valued Management Qualities (What they value):\n\
         {top_qualities}\n\
         \n\
         ### Your Task:\n\
         1. **Audience Profile**: Briefly characterize the \"personality\" of this class based on the dominant styles.\n\
         2. **Teaching Adjustment**: Give me 3 specific tips on how I should adjust my delivery right now.\n\
         3. **Engagement Question**: Suggest 1 thought-provoking question I can ask the audience immediately to spark a debate between the different style groups.\n\
         \n\
         Keep the response structured, professional, yet punchy for a live presenter to read quickly. Output in Markdown.",
        total = stats.total_participants,
    )
}
