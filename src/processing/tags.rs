//! Standard tag and label sets for deployed resources.

use super::sanitize::{sanitize_key, sanitize_value};
use crate::config::ProviderConfig;
use crate::models::{Dialect, OptionalValue};
use std::collections::BTreeMap;

pub const TAG_LOCAL: &str = "panfactum.com/local";
pub const TAG_ENVIRONMENT: &str = "panfactum.com/environment";
pub const TAG_REGION: &str = "panfactum.com/region";
pub const TAG_STACK_VERSION: &str = "panfactum.com/stack-version";
pub const TAG_STACK_COMMIT: &str = "panfactum.com/stack-commit";
pub const TAG_ROOT_MODULE: &str = "panfactum.com/root-module";
pub const TAG_MODULE: &str = "panfactum.com/module";

/// Insert a sanitized entry if the value is present.
fn set_tag(
    tags: &mut BTreeMap<String, String>,
    key: &str,
    value: &OptionalValue,
    dialect: Dialect,
) {
    if let Some(v) = value.as_present() {
        tags.insert(sanitize_key(key, dialect), sanitize_value(v, dialect));
    }
}

fn standard_tags(
    config: &ProviderConfig,
    module: &OptionalValue,
    region: &OptionalValue,
    dialect: Dialect,
) -> BTreeMap<String, String> {
    let mut tags = BTreeMap::new();
    set_tag(
        &mut tags,
        TAG_LOCAL,
        &OptionalValue::present(config.is_local.to_string()),
        dialect,
    );
    set_tag(&mut tags, TAG_ENVIRONMENT, &config.environment, dialect);
    set_tag(&mut tags, TAG_REGION, region, dialect);
    set_tag(&mut tags, TAG_STACK_VERSION, &config.stack_version, dialect);
    set_tag(&mut tags, TAG_STACK_COMMIT, &config.stack_commit, dialect);
    set_tag(&mut tags, TAG_ROOT_MODULE, &config.root_module, dialect);
    set_tag(&mut tags, TAG_MODULE, module, dialect);

    // Extra tags go last and win over the standard ones.
    for (key, value) in &config.extra_tags {
        let key = sanitize_key(key, dialect);
        if tags.contains_key(&key) {
            log::debug!("Extra tag '{key}' overrides a standard tag");
        }
        tags.insert(key, sanitize_value(value, dialect));
    }
    tags
}

/// Standard AWS resource tags for a module.
///
/// `region_override` replaces the configured region when present.
pub fn build_aws_tags(
    config: &ProviderConfig,
    module: &OptionalValue,
    region_override: &OptionalValue,
) -> BTreeMap<String, String> {
    standard_tags(config, module, region_override.or(&config.region), Dialect::Aws)
}

/// Standard Kubernetes labels for a module.
pub fn build_kube_labels(
    config: &ProviderConfig,
    module: &OptionalValue,
) -> BTreeMap<String, String> {
    standard_tags(config, module, &config.region, Dialect::Kubernetes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProviderConfig {
        ProviderConfig {
            environment: OptionalValue::present("production"),
            region: OptionalValue::present("us-east-2"),
            root_module: OptionalValue::present("aws_eks"),
            stack_version: OptionalValue::present("edge.24-10-01"),
            stack_commit: OptionalValue::Unknown,
            is_local: false,
            extra_tags: BTreeMap::from([
                ("cost center".to_string(), "R&D / core".to_string()),
            ]),
        }
    }

    #[test]
    fn test_aws_tags() {
        let tags = build_aws_tags(&config(), &"kube vault".into(), &OptionalValue::Absent);
        assert_eq!(tags[TAG_LOCAL], "false");
        assert_eq!(tags[TAG_ENVIRONMENT], "production");
        assert_eq!(tags[TAG_REGION], "us-east-2");
        assert_eq!(tags[TAG_ROOT_MODULE], "aws_eks");
        assert_eq!(tags[TAG_STACK_VERSION], "edge.24-10-01");
        assert_eq!(tags[TAG_MODULE], "kube.vault");
        assert!(!tags.contains_key(TAG_STACK_COMMIT));
        assert_eq!(tags["cost.center"], "R.D./.core");
        assert_eq!(tags.len(), 7);
    }

    #[test]
    fn test_aws_region_override() {
        let tags = build_aws_tags(&config(), &"m".into(), &"eu-west-1".into());
        assert_eq!(tags[TAG_REGION], "eu-west-1");

        let tags = build_aws_tags(&config(), &"m".into(), &OptionalValue::Unknown);
        assert_eq!(tags[TAG_REGION], "us-east-2");
    }

    #[test]
    fn test_kube_labels() {
        let mut cfg = config();
        cfg.is_local = true;
        let labels = build_kube_labels(&cfg, &"kube vault".into());
        assert_eq!(labels[TAG_LOCAL], "true");
        assert_eq!(labels[TAG_MODULE], "kube.vault");
        assert_eq!(labels[TAG_REGION], "us-east-2");
        assert_eq!(labels["cost.center"], "R.D...core");
    }

    #[test]
    fn test_extra_tags_override_standard() {
        let mut cfg = config();
        cfg.extra_tags
            .insert(TAG_ENVIRONMENT.to_string(), "staging".to_string());
        let tags = build_kube_labels(&cfg, &OptionalValue::Absent);
        assert_eq!(tags[TAG_ENVIRONMENT], "staging");
        assert!(!tags.contains_key(TAG_MODULE));
    }

    #[test]
    fn test_minimal_config() {
        let tags = build_aws_tags(
            &ProviderConfig::default(),
            &OptionalValue::Absent,
            &OptionalValue::Absent,
        );
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[TAG_LOCAL], "false");
    }
}
