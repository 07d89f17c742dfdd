use chek_config::ChekConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ChekConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ChekConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.advisor.is_configured() && has_env_prefix(&env_keys, "CHEK_ADVISOR") {
        warnings.push(
            "Advisor config appears default while CHEK_ADVISOR* env vars exist. Use double underscores (example: CHEK_ADVISOR__API_KEY)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "CHEK_ROADMAP_") {
        warnings.push(
            "CHEK_ROADMAP_* env vars are ignored. Use double underscores (example: CHEK_ROADMAP__EPOCH)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key[prefix.len()..].starts_with('_'))
}

#[cfg(test)]
mod tests {
    use chek_config::{AdvisorConfig, ChekConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_unconfigured_advisor_with_env_prefix() {
        let config = ChekConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("CHEK_ADVISOR_API_KEY".to_string(), "sk-test".to_string()),
                ("CHEK_ROADMAP_EPOCH".to_string(), "2026-01-01".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn does_not_warn_when_configured() {
        let config = ChekConfig {
            advisor: AdvisorConfig {
                api_key: "sk-test".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("CHEK_ADVISOR__API_KEY".to_string(), "sk-test".to_string()),
                ("CHEK_ROADMAP__EPOCH".to_string(), "2026-01-01".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }
}
