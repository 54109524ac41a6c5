use std::collections::HashSet;

pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "if", "then", "than", "to", "of", "for", "on", "in",
    "with", "as", "by", "is", "are", "was", "were", "be", "been", "being", "at", "from",
];

/// Inflectional endings folded before comparison, longest first. The first
/// matching rule wins and only applies when at least three characters remain.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("izations", ""),
    ("ization", ""),
    ("isation", ""),
    ("ations", ""),
    ("ation", ""),
    ("izing", ""),
    ("ising", ""),
    ("izes", ""),
    ("ises", ""),
    ("ized", ""),
    ("ised", ""),
    ("ize", ""),
    ("ise", ""),
    ("ies", "y"),
    ("ing", ""),
    ("xes", "x"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("sses", "ss"),
    ("zes", "z"),
    ("ed", ""),
    ("s", ""),
];

const MIN_STEM_LEN: usize = 3;

/// Lowercases, turns every non-alphanumeric character into a space and collapses whitespace.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn fold_suffix(token: &str) -> String {
    for (suffix, replacement) in SUFFIX_RULES {
        if let Some(stem) = token.strip_suffix(suffix) {
            if *suffix == "s" && (stem.ends_with('s') || stem.ends_with('u') || stem.ends_with('i')) {
                return token.to_string();
            }
            if stem.len() + replacement.len() >= MIN_STEM_LEN {
                return format!("{}{}", stem, replacement);
            }
            return token.to_string();
        }
    }
    token.to_string()
}

pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|t| !t.is_empty() && !STOP_WORDS.contains(t))
        .map(fold_suffix)
        .collect()
}

pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Token-overlap similarity in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let left: HashSet<String> = tokenize(a).into_iter().collect();
    let right: HashSet<String> = tokenize(b).into_iter().collect();
    jaccard(&left, &right)
}
