// ABOUTME: Reason generation explaining why a shortlisted dish fits the request
// ABOUTME: Fixed mood and category templates plus a closing reason naming the dish
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moodmenu

//! Human-readable explanations for shortlisted dishes.
//!
//! Reasons are independent of the match score: they come from the fixed
//! tables in [`crate::tables`], in strict priority order — mood reasons
//! first, then the category reason, then one generic closing reason that
//! names the dish. The closing reason is always present; when mood and
//! category reasons would overflow the cap, they are the ones truncated.

use moodmenu_core::models::Mood;

use crate::tables;

/// Build the ordered reason list for one recommendation.
///
/// Returns between 1 and `max_reasons` entries. An unrecognized mood
/// contributes no mood reasons and an unrecognized category no category
/// reason; the generic closing reason survives every combination.
#[must_use]
pub fn explain(
    mood: Option<Mood>,
    dish_name: &str,
    category: &str,
    max_reasons: usize,
) -> Vec<String> {
    let mut reasons: Vec<String> = Vec::new();

    if let Some(mood) = mood {
        reasons.extend(
            tables::mood_reasons(mood)
                .iter()
                .map(|reason| (*reason).to_owned()),
        );
    }

    if let Some(reason) = tables::category_reason(category) {
        reasons.push(reason.to_owned());
    }

    // Leave room for the closing reason, which is never truncated away.
    reasons.truncate(max_reasons.saturating_sub(1));
    reasons.push(format!(
        "'{dish_name}' fits your current mood perfectly"
    ));

    reasons
}
