//! Rule repository loading.
//!
//! This module provides the [`RuleRepository`] type, which loads the
//! compliance rules from YAML files once at process start and serves
//! read-only lookups afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::DecisionType;

use super::types::{RepositoryMetadata, RuleDefinition, RulesFile};

const BUILTIN_REPOSITORY: &str = include_str!("../../config/labor_code/repository.yaml");

const BUILTIN_RULES: [(&str, &str); 7] = [
    (
        "rules/deduction.yaml",
        include_str!("../../config/labor_code/rules/deduction.yaml"),
    ),
    (
        "rules/probation_end.yaml",
        include_str!("../../config/labor_code/rules/probation_end.yaml"),
    ),
    (
        "rules/salary_reduction.yaml",
        include_str!("../../config/labor_code/rules/salary_reduction.yaml"),
    ),
    (
        "rules/suspension.yaml",
        include_str!("../../config/labor_code/rules/suspension.yaml"),
    ),
    (
        "rules/termination.yaml",
        include_str!("../../config/labor_code/rules/termination.yaml"),
    ),
    (
        "rules/transfer.yaml",
        include_str!("../../config/labor_code/rules/transfer.yaml"),
    ),
    (
        "rules/warning.yaml",
        include_str!("../../config/labor_code/rules/warning.yaml"),
    ),
];

/// The versioned, read-only table of compliance rules.
///
/// A repository is built once and never mutated; share it behind an `Arc`
/// for concurrent readers. A new rule set means a new repository value.
///
/// # Directory Structure
///
/// ```text
/// config/labor_code/
/// ├── repository.yaml      # Code, name, version, source URL
/// └── rules/
///     ├── termination.yaml # One file per decision family
///     └── warning.yaml
/// ```
///
/// Rule files are read in file-name order and rules keep their order within
/// a file, so evaluation order is stable across platforms.
///
/// # Example
///
/// ```
/// use eosb_engine::config::RuleRepository;
/// use eosb_engine::models::DecisionType;
///
/// let repository = RuleRepository::builtin().unwrap();
/// assert!(repository.rules_for(DecisionType::Termination).count() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct RuleRepository {
    metadata: RepositoryMetadata,
    rules: Vec<RuleDefinition>,
}

impl RuleRepository {
    /// Loads the repository from the specified directory.
    ///
    /// Returns an error if:
    /// - `repository.yaml` or the `rules/` directory is missing
    /// - any file contains invalid YAML
    /// - the rules fail validation (see [`RuleRepository::from_parts`])
    ///
    /// # Example
    ///
    /// ```no_run
    /// use eosb_engine::config::RuleRepository;
    ///
    /// let repository = RuleRepository::load("./config/labor_code")?;
    /// println!("Loaded {} v{}", repository.metadata().name, repository.version());
    /// # Ok::<(), eosb_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("repository.yaml");
        let metadata = Self::load_yaml::<RepositoryMetadata>(&metadata_path)?;

        let rules_dir = path.join("rules");
        let rules = Self::load_rules(&rules_dir)?;

        Self::from_parts(metadata, rules)
    }

    /// Builds the repository compiled into the binary from `config/labor_code`.
    pub fn builtin() -> EngineResult<Self> {
        let metadata =
            Self::parse_yaml::<RepositoryMetadata>(BUILTIN_REPOSITORY, "repository.yaml")?;

        let mut rules = Vec::new();
        for (name, content) in BUILTIN_RULES {
            let file = Self::parse_yaml::<RulesFile>(content, name)?;
            rules.extend(file.rules);
        }

        Self::from_parts(metadata, rules)
    }

    /// Builds a repository from already-parsed parts.
    ///
    /// Rejects an empty rule list, duplicate rule ids, and rules with an
    /// empty requirement or no remediation steps.
    pub fn from_parts(
        metadata: RepositoryMetadata,
        rules: Vec<RuleDefinition>,
    ) -> EngineResult<Self> {
        let origin = format!("{} {}", metadata.code, metadata.version);

        if rules.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: origin,
                message: "repository contains no rules".to_string(),
            });
        }

        let mut seen: HashSet<String> = HashSet::new();
        for rule in &rules {
            let problem = if !seen.insert(rule.id.clone()) {
                Some(format!("duplicate rule id '{}'", rule.id))
            } else if rule.requirement.trim().is_empty() {
                Some(format!("rule '{}' has an empty requirement", rule.id))
            } else if rule.remediation.is_empty() {
                Some(format!("rule '{}' has no remediation steps", rule.id))
            } else {
                None
            };

            if let Some(message) = problem {
                return Err(EngineError::ConfigParseError {
                    path: origin,
                    message,
                });
            }
        }

        debug!(
            code = %metadata.code,
            version = %metadata.version,
            rule_count = rules.len(),
            "Rule repository built"
        );

        Ok(Self { metadata, rules })
    }

    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, origin: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    fn load_rules(rules_dir: &Path) -> EngineResult<Vec<RuleDefinition>> {
        let rules_dir_str = rules_dir.display().to_string();

        let entries = fs::read_dir(rules_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rules_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rules_dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }

        if paths.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rule files found)", rules_dir_str),
            });
        }

        paths.sort();

        let mut rules = Vec::new();
        for path in paths {
            let file = Self::load_yaml::<RulesFile>(&path)?;
            rules.extend(file.rules);
        }

        Ok(rules)
    }

    /// Returns the repository metadata.
    pub fn metadata(&self) -> &RepositoryMetadata {
        &self.metadata
    }

    /// Returns the opaque repository version.
    pub fn version(&self) -> &str {
        &self.metadata.version
    }

    /// Returns every rule, in evaluation order.
    pub fn rules(&self) -> &[RuleDefinition] {
        &self.rules
    }

    /// Returns the rules that apply to a decision type, in evaluation order.
    pub fn rules_for(
        &self,
        decision_type: DecisionType,
    ) -> impl Iterator<Item = &RuleDefinition> + '_ {
        self.rules
            .iter()
            .filter(move |rule| rule.applies_to == decision_type)
    }

    /// Gets a rule by its id.
    pub fn get_rule(&self, id: &str) -> Option<&RuleDefinition> {
        self.rules.iter().find(|rule| rule.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Citation, RuleCondition, Severity};

    fn config_path() -> &'static str {
        "./config/labor_code"
    }

    fn metadata() -> RepositoryMetadata {
        RepositoryMetadata {
            code: "TEST".to_string(),
            name: "Test Labor Code".to_string(),
            version: "test-1".to_string(),
            source_url: "https://example.com".to_string(),
        }
    }

    fn rule(id: &str) -> RuleDefinition {
        RuleDefinition {
            id: id.to_string(),
            applies_to: DecisionType::Warning,
            violated_when: RuleCondition::Always,
            requirement: "Always broken".to_string(),
            citation: Citation {
                article_number: "1".to_string(),
                article_text: "Test article".to_string(),
            },
            remediation: vec!["Do the right thing".to_string()],
            severity_if_violated: Severity::Warning,
        }
    }

    #[test]
    fn test_load_valid_repository() {
        let result = RuleRepository::load(config_path());
        assert!(result.is_ok(), "Failed to load rules: {:?}", result.err());

        let repository = result.unwrap();
        assert_eq!(repository.metadata().code, "NLC");
        assert!(!repository.rules().is_empty());
    }

    #[test]
    fn test_builtin_matches_files_on_disk() {
        let loaded = RuleRepository::load(config_path()).unwrap();
        let builtin = RuleRepository::builtin().unwrap();

        assert_eq!(loaded.metadata(), builtin.metadata());
        assert_eq!(loaded.rules(), builtin.rules());
    }

    #[test]
    fn test_every_decision_type_has_rules() {
        let repository = RuleRepository::builtin().unwrap();
        for decision_type in DecisionType::ALL {
            assert!(
                repository.rules_for(decision_type).count() > 0,
                "No rules for {}",
                decision_type
            );
        }
    }

    #[test]
    fn test_three_warnings_rule_is_present() {
        let repository = RuleRepository::builtin().unwrap();
        let rule = repository
            .get_rule("termination.three_written_warnings")
            .expect("three-warnings rule missing");

        assert_eq!(rule.applies_to, DecisionType::Termination);
        assert_eq!(rule.severity_if_violated, Severity::Violation);
        assert_eq!(rule.remediation.len(), 3);
        assert_eq!(rule.remediation[0], "Issue third written warning");
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match RuleRepository::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("repository.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = RuleRepository::parse_yaml::<RulesFile>("rules: [unclosed", "broken.yaml");
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "broken.yaml"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_rule_ids_are_rejected() {
        let result = RuleRepository::from_parts(metadata(), vec![rule("a"), rule("a")]);
        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("duplicate rule id 'a'"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_rule_without_remediation_is_rejected() {
        let mut bad = rule("no_steps");
        bad.remediation.clear();
        let result = RuleRepository::from_parts(metadata(), vec![bad]);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_empty_repository_is_rejected() {
        let result = RuleRepository::from_parts(metadata(), vec![]);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_rules_for_keeps_file_order() {
        let mut second = rule("second");
        second.applies_to = DecisionType::Transfer;
        let repository =
            RuleRepository::from_parts(metadata(), vec![rule("first"), second, rule("third")])
                .unwrap();

        let ids: Vec<&str> = repository
            .rules_for(DecisionType::Warning)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["first", "third"]);
    }
}
