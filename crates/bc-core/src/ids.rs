use uuid::Uuid;

/// `<kind>-<uuid v4>`, e.g. `account-6f1c…`.
pub fn new_id(kind: &str) -> String {
    format!("{kind}-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rapid_ids_do_not_collide() {
        let ids: HashSet<String> = (0..1000).map(|_| new_id("log")).collect();
        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| id.starts_with("log-")));
    }
}
