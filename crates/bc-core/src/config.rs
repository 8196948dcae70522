use tracing::warn;

pub const DEFAULT_LOG_RETENTION: usize = 100;
pub const DEFAULT_CLAIM_RETENTION: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub log_retention: usize,
    pub claim_retention: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            log_retention: DEFAULT_LOG_RETENTION,
            claim_retention: DEFAULT_CLAIM_RETENTION,
        }
    }
}

impl StoreConfig {
    /// Reads `BOXCLAIM_LOG_RETENTION` and `BOXCLAIM_CLAIM_RETENTION`,
    /// keeping the default for anything unset or not a positive integer.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_retention: read_cap(&lookup, "BOXCLAIM_LOG_RETENTION", defaults.log_retention),
            claim_retention: read_cap(
                &lookup,
                "BOXCLAIM_CLAIM_RETENTION",
                defaults.claim_retention,
            ),
        }
    }
}

fn read_cap(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: usize) -> usize {
    let Some(raw) = lookup(name) else {
        return default;
    };
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => value,
        _ => {
            warn!("ignoring invalid {}={:?}, using {}", name, raw, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = StoreConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.log_retention, 100);
        assert_eq!(config.claim_retention, 50);
    }

    #[test]
    fn overrides_and_rejects_zero() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("BOXCLAIM_LOG_RETENTION", " 250 "),
            ("BOXCLAIM_CLAIM_RETENTION", "0"),
        ]));
        assert_eq!(config.log_retention, 250);
        assert_eq!(config.claim_retention, DEFAULT_CLAIM_RETENTION);
    }

    #[test]
    fn from_env_reads_process_environment() {
        unsafe {
            std::env::set_var("BOXCLAIM_LOG_RETENTION", "7");
            std::env::set_var("BOXCLAIM_CLAIM_RETENTION", "many");
        }
        let config = StoreConfig::from_env();
        unsafe {
            std::env::remove_var("BOXCLAIM_LOG_RETENTION");
            std::env::remove_var("BOXCLAIM_CLAIM_RETENTION");
        }

        assert_eq!(config.log_retention, 7);
        assert_eq!(config.claim_retention, DEFAULT_CLAIM_RETENTION);
    }
}
