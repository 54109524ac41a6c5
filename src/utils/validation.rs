use validator::Validate;

pub fn validate<T: Validate>(val: &T) -> Result<(), validator::ValidationErrors> {
    val.validate()
}

/// Trims skill labels, drops blanks and keeps the first occurrence of each label.
pub fn normalize_skills<I, S>(skills: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = Vec::<String>::new();
    for skill in skills {
        let skill = skill.as_ref().trim();
        if skill.is_empty() || seen.iter().any(|s| s == skill) {
            continue;
        }
        seen.push(skill.to_string());
    }
    seen
}
