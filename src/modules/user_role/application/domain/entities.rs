use serde::Serialize;

/// One role held by one user. A pair appears at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub user_id: i32,
    pub role_id: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchAssignReport {
    pub created: u64,
}

/// Drops repeated ids, keeping first occurrences in order.
pub fn dedup_ids(ids: Vec<i32>) -> Vec<i32> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
