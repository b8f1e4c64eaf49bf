//! Module rule matching.

use regex::Regex;
use splitplan_config::ModuleRule;

use crate::error::{PlanError, Result};

#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub index: usize,
    test: Regex,
    include: Option<Regex>,
    exclude: Option<Regex>,
    pub loaders: Vec<String>,
}

impl CompiledRule {
    fn compile(index: usize, rule: &ModuleRule) -> Result<Self> {
        let compile = |field: &str, pattern: &str| {
            Regex::new(pattern)
                .map_err(|err| PlanError::pattern(format!("rules[{index}].{field}"), pattern, err))
        };

        Ok(Self {
            index,
            test: compile("test", &rule.test)?,
            include: rule
                .include
                .as_deref()
                .map(|p| compile("include", p))
                .transpose()?,
            exclude: rule
                .exclude
                .as_deref()
                .map(|p| compile("exclude", p))
                .transpose()?,
            loaders: rule.loaders.clone(),
        })
    }

    pub fn matches(&self, module_id: &str) -> bool {
        self.test.is_match(module_id)
            && self.include.as_ref().is_none_or(|re| re.is_match(module_id))
            && !self.exclude.as_ref().is_some_and(|re| re.is_match(module_id))
    }
}

/// Compiled module rules, kept in declaration order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    pub fn compile(rules: &[ModuleRule]) -> Result<Self> {
        let rules = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| CompiledRule::compile(index, rule))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules applying to `module_id`, in declaration order.
    pub fn matching<'a>(&'a self, module_id: &str) -> impl Iterator<Item = &'a CompiledRule> {
        self.rules.iter().filter(move |rule| rule.matches(module_id))
    }

    /// Loader chain for `module_id`: the loaders of every matching rule, concatenated.
    pub fn loaders_for(&self, module_id: &str) -> Vec<&str> {
        self.matching(module_id)
            .flat_map(|rule| rule.loaders.iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn froide_rules() -> Vec<ModuleRule> {
        vec![
            ModuleRule::new(r"\.js$", ["babel-loader"]).with_exclude(r"node_modules[\\/](?!pdfjs-dist)"),
            ModuleRule::new(r"\.vue$", ["vue-loader"]),
            ModuleRule::new(r"\.s?css$", ["style-loader", "css-loader", "sass-loader"]),
        ]
    }

    #[test]
    fn invalid_pattern_names_rule_index() {
        // lookahead is unsupported by the regex crate
        let err = RuleSet::compile(&froide_rules()).unwrap_err();
        assert!(matches!(err, PlanError::InvalidPattern { field, .. } if field == "rules[0].exclude"));
    }

    #[test]
    fn loaders_follow_declaration_order() {
        let rules = RuleSet::compile(&[
            ModuleRule::new(r"\.js$", ["babel-loader"]).with_exclude("node_modules"),
            ModuleRule::new(r"\.vue$", ["vue-loader"]),
            ModuleRule::new(r"\.s?css$", ["style-loader", "css-loader", "sass-loader"]),
            ModuleRule::new(r"\.(js|vue)$", ["eslint-loader"]).with_include("frontend/"),
        ])
        .unwrap();

        assert_eq!(rules.len(), 4);
        assert_eq!(
            rules.loaders_for("frontend/javascript/main.js"),
            vec!["babel-loader", "eslint-loader"]
        );
        assert_eq!(rules.loaders_for("node_modules/vue/index.js"), Vec::<&str>::new());
        assert_eq!(
            rules.loaders_for("styles/main.scss"),
            vec!["style-loader", "css-loader", "sass-loader"]
        );
        assert_eq!(rules.loaders_for("components/App.vue"), vec!["vue-loader"]);
    }

    #[test]
    fn matching_reports_rule_indices() {
        let rules = RuleSet::compile(&[
            ModuleRule::new(r"\.js$", ["a"]),
            ModuleRule::new(r"\.css$", ["b"]),
            ModuleRule::new(".", ["c"]),
        ])
        .unwrap();

        let indices: Vec<_> = rules.matching("x.js").map(|rule| rule.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }
}
