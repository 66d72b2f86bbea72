use super::normalize_name;
use std::collections::BTreeMap;

/// Match strength tiers, strongest first. Derived `Ord` follows declaration
/// order, so lower values sort first when ranking candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// Query equals the full normalized name.
    Exact,
    /// Query equals one whole token: "chrome" in "google chrome".
    WholeToken,
    /// Query plus a space is a prefix of the full name:
    /// "google chrome" -> "google chrome canary".
    NamePrefix,
    /// Query is a prefix of some token: "vis" -> "visual studio code".
    TokenPrefix,
    /// Query appears anywhere in the name.
    Substring,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    pub display_name: String,
    pub path: String,
    pub tier: MatchTier,
}

/// Pure tier assignment over a (query, name) pair. Both inputs must already
/// be normalized.
pub fn score_match(query: &str, name: &str) -> Option<MatchTier> {
    if query.is_empty() || name.is_empty() {
        return None;
    }
    if query == name {
        return Some(MatchTier::Exact);
    }
    let tokens: Vec<&str> = name.split(' ').collect();
    if tokens.iter().any(|token| *token == query) {
        return Some(MatchTier::WholeToken);
    }
    if name.starts_with(&format!("{query} ")) {
        return Some(MatchTier::NamePrefix);
    }
    if tokens.iter().any(|token| token.starts_with(query)) {
        return Some(MatchTier::TokenPrefix);
    }
    if name.contains(query) {
        return Some(MatchTier::Substring);
    }
    None
}

/// Ranked candidates for a free-text query, strongest tier first. Ties within
/// a tier keep index iteration order, so results are deterministic for a
/// fixed rebuild. Helper-only results are already filtered out when a primary
/// candidate exists.
pub fn resolve(query: &str, index: &BTreeMap<String, String>) -> Vec<MatchCandidate> {
    let query = normalize_name(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<MatchCandidate> = index
        .iter()
        .filter_map(|(name, path)| {
            score_match(&query, name).map(|tier| MatchCandidate {
                display_name: name.clone(),
                path: path.clone(),
                tier,
            })
        })
        .collect();
    // Stable: preserves index order inside each tier.
    candidates.sort_by_key(|candidate| candidate.tier);
    prefer_primary(candidates)
}

fn is_helper(candidate: &MatchCandidate) -> bool {
    let nested_bundle = candidate.path.to_lowercase().contains(".app/contents/");
    let helper_name = candidate.display_name.contains("helper");
    nested_bundle || helper_name
}

/// Keep only directly launchable bundles when any exist; otherwise fall back
/// to the full match set so "weird" installs still resolve.
pub fn prefer_primary(candidates: Vec<MatchCandidate>) -> Vec<MatchCandidate> {
    if candidates.iter().any(|candidate| !is_helper(candidate)) {
        candidates
            .into_iter()
            .filter(|candidate| !is_helper(candidate))
            .collect()
    } else {
        candidates
    }
}
