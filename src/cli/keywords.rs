//! Reserved keyword listings for the fq CLI

use super::CliError;
use crate::escape::{Category, reserved_keywords};

fn keywords_in(category: Category) -> Vec<&'static str> {
    reserved_keywords()
        .filter(|(_, c)| *c == category)
        .map(|(name, _)| name)
        .collect()
}

/// Get the keyword overview, one line per category
pub fn get_keywords_overview() -> String {
    let mut out = String::from(
        "RESERVED KEYWORDS\n\n\
         Object literals using any of these keys are sent wrapped as {\"object\": {...}}.\n\n",
    );
    for category in Category::ALL {
        out.push_str(&format!(
            "  {:<12} {}\n",
            category.name(),
            keywords_in(category).join(", ")
        ));
    }
    out.push_str("\nRun 'fq keywords <category>' to list a single category.\n");
    out
}

/// Get the keywords of one category, one per line
pub fn get_keyword_category(name: &str) -> Result<String, CliError> {
    let category =
        Category::from_name(name).ok_or_else(|| CliError::UnknownCategory(name.to_string()))?;

    let mut out = String::new();
    for keyword in keywords_in(category) {
        out.push_str(keyword);
        out.push('\n');
    }
    Ok(out)
}
