use crate::kernel::services::ports::SearchResult;

/// 对记录三个字段做大小写不敏感的子串匹配
#[derive(Debug, Clone)]
pub struct MatchFilter {
    needle: String,
}

impl MatchFilter {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    pub fn matches(&self, result: &SearchResult) -> bool {
        if result.is_empty() {
            return false;
        }
        result
            .fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/filter.rs"]
mod tests;
