use std::path::Path;

use crate::parse::{parse, ParseError};
use crate::{
    ActionExecutor, ApplyError, EngineConfig, PropertyAccess, Rule, TriggerSet, ViewRuleError,
};

/// The host's ordered list of rules, plus the triggers it emits.
///
/// Loading drops rules that fail to parse and keeps the rest; applying runs
/// every rule for the signal in load order and keeps going past per-rule
/// errors.
///
/// ```
/// use viewrule::{Properties, RuleBook, Value, ActionError};
///
/// let mut book = RuleBook::default();
/// let report = book.load([
///     r#"on created if app_id contains "term" set(alpha, 0.5)"#,
///     "on created if (",
/// ]);
/// assert_eq!(report.loaded, 1);
/// assert_eq!(report.dropped.len(), 1);
///
/// let props = Properties::new().set("app_id", "xterm");
/// let mut calls = Vec::new();
/// let mut executor = |name: &str, args: &[Value]| -> Result<(), ActionError> {
///     calls.push((name.to_owned(), args.to_vec()));
///     Ok(())
/// };
/// assert!(book.apply("created", &props, &mut executor).is_clean());
/// assert_eq!(calls[0].0, "set");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    triggers: TriggerSet,
    rules: Vec<Rule>,
}

/// A rule text that was dropped during loading.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedRule {
    /// Position of the text in the input; for [`RuleBook::load_text`] this is
    /// the zero-based line number.
    pub index: usize,
    pub text: String,
    pub error: ParseError,
}

/// Outcome of [`RuleBook::load`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub dropped: Vec<DroppedRule>,
}

/// A rule that reported an error during [`RuleBook::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct RuleFailure {
    /// Position of the rule in [`RuleBook::rules`].
    pub index: usize,
    pub error: ApplyError,
}

/// Outcome of [`RuleBook::apply`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApplyReport {
    /// Rules whose trigger matched the signal.
    pub fired: usize,
    pub failures: Vec<RuleFailure>,
}

impl ApplyReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl LoadReport {
    fn merge(&mut self, other: LoadReport) {
        self.loaded += other.loaded;
        self.dropped.extend(other.dropped);
    }
}

impl RuleBook {
    #[must_use]
    pub fn new(triggers: TriggerSet) -> Self {
        Self {
            triggers,
            rules: Vec::new(),
        }
    }

    /// Build a rule book from a config, dropping rules that fail to parse.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut book = Self::new(config.trigger_set());
        book.load(config.rules.iter().map(String::as_str));
        book
    }

    /// Read rules from a file, one per line, using the default triggers.
    ///
    /// Each rule must fit on a single line; see [`RuleBook::load_text`]. To
    /// load rules that span lines, parse them with [`crate::parse()`] and
    /// [`RuleBook::push`] the results.
    ///
    /// # Errors
    ///
    /// Returns [`ViewRuleError::Io`] if the file cannot be read. Rules that
    /// fail to parse are dropped, not reported as errors.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ViewRuleError> {
        let text = std::fs::read_to_string(path)?;
        let mut book = Self::default();
        book.load_text(&text);
        Ok(book)
    }

    /// Parse and add each rule text in order.
    pub fn load<'a>(&mut self, texts: impl IntoIterator<Item = &'a str>) -> LoadReport {
        let mut report = LoadReport::default();
        for (index, text) in texts.into_iter().enumerate() {
            report.merge(self.load_one(index, text));
        }
        report
    }

    /// Parse one rule per line. Blank lines and lines starting with `#` are
    /// skipped.
    ///
    /// A rule broken across lines is read as separate, incomplete rules,
    /// which are dropped.
    pub fn load_text(&mut self, text: &str) -> LoadReport {
        let mut report = LoadReport::default();
        for (line, source) in text.lines().enumerate() {
            let trimmed = source.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            report.merge(self.load_one(line, trimmed));
        }
        report
    }

    fn load_one(&mut self, index: usize, text: &str) -> LoadReport {
        match parse(text) {
            Ok(rule) => {
                self.push(rule);
                LoadReport {
                    loaded: 1,
                    dropped: Vec::new(),
                }
            }
            Err(error) => {
                tracing::warn!(index, %error, "dropping rule that failed to parse");
                LoadReport {
                    loaded: 0,
                    dropped: vec![DroppedRule {
                        index,
                        text: text.to_owned(),
                        error,
                    }],
                }
            }
        }
    }

    /// Add an already-built rule.
    pub fn push(&mut self, rule: Rule) {
        if !self.triggers.contains(&rule.trigger) {
            tracing::warn!(trigger = %rule.trigger, "rule names an unrecognized trigger and will never fire");
        }
        self.rules.push(rule);
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn triggers(&self) -> &TriggerSet {
        &self.triggers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule triggered by `signal`, in load order.
    ///
    /// Signals outside the trigger set fire nothing.
    pub fn apply(
        &self,
        signal: &str,
        access: &dyn PropertyAccess,
        executor: &mut dyn ActionExecutor,
    ) -> ApplyReport {
        let mut report = ApplyReport::default();
        if !self.triggers.contains(signal) {
            tracing::debug!(signal, "signal is not a recognized trigger");
            return report;
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if !rule.fires_on(signal) {
                continue;
            }
            report.fired += 1;
            if let Err(error) = rule.apply(signal, access, executor) {
                report.failures.push(RuleFailure { index, error });
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActionError, Properties, Value};

    fn recorder(log: &mut Vec<String>) -> impl FnMut(&str, &[Value]) -> Result<(), ActionError> + '_ {
        move |name, _| {
            log.push(name.to_owned());
            Ok(())
        }
    }

    #[test]
    fn bad_rule_does_not_abort_loading() {
        let mut book = RuleBook::default();
        let report = book.load(["on created maximize()", "on created", "on created minimize()"]);
        assert_eq!(report.loaded, 2);
        assert_eq!(report.dropped.len(), 1);
        assert_eq!(report.dropped[0].index, 1);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn load_text_skips_comments_and_blank_lines() {
        let mut book = RuleBook::default();
        let report = book.load_text(
            "# window rules\n\non created maximize()\n   \non maximized bogus\n",
        );
        assert_eq!(report.loaded, 1);
        assert_eq!(report.dropped[0].index, 4);
        assert_eq!(report.dropped[0].text, "on maximized bogus");
    }

    #[test]
    fn applies_in_order_and_continues_after_errors() {
        let mut book = RuleBook::default();
        book.load([
            "on created first()",
            r#"on created if missing == 1 second()"#,
            "on maximized third()",
            "on created fourth()",
        ]);

        let mut log = Vec::new();
        let report = book.apply("created", &Properties::new(), &mut recorder(&mut log));
        assert_eq!(log, vec!["first", "fourth"]);
        assert_eq!(report.fired, 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 1);
        assert!(matches!(report.failures[0].error, ApplyError::Condition(_)));
    }

    #[test]
    fn unrecognized_trigger_never_fires() {
        let mut book = RuleBook::new(TriggerSet::empty().with("created"));
        book.load(["on focused maximize()"]);
        assert_eq!(book.len(), 1);

        let mut log = Vec::new();
        let report = book.apply("focused", &Properties::new(), &mut recorder(&mut log));
        assert!(log.is_empty());
        assert_eq!(report.fired, 0);
    }

    #[test]
    fn from_config_uses_its_triggers() {
        let config = EngineConfig {
            triggers: vec!["focused".into()],
            rules: vec![],
        }
        .rule("on focused maximize()");
        let book = RuleBook::from_config(&config);

        let mut log = Vec::new();
        book.apply("focused", &Properties::new(), &mut recorder(&mut log));
        assert_eq!(log, vec!["maximize"]);
    }
}
