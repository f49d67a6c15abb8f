//! Document head styles.
//!
//! Some rules must exist in the document exactly once no matter how many
//! widgets depend on them, such as the perspective rule behind the 3D flip.
//! [`HeadStyles`] is owned by the application bootstrap: it is filled during
//! setup, before the first widget mounts, and only read afterwards. Each rule
//! is keyed by the id of the `<style>` node it renders as.

/// A `<style>` node with a reserved element id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule {
    pub id: &'static str,
    pub css: &'static str,
}

/// Perspective for the flip card 3D rotation
pub const FLIP_PERSPECTIVE: StyleRule = StyleRule {
    id: "flip-perspective-style",
    css: ".perspective { perspective: 1000px; }",
};

/// Write-once registry of head style nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadStyles {
    rules: Vec<StyleRule>,
}

impl HeadStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every rule the portfolio page needs.
    pub fn for_portfolio() -> Self {
        let mut styles = Self::new();
        styles.register(FLIP_PERSPECTIVE);
        styles
    }

    /// Insert `rule` unless a node with its id is already present.
    ///
    /// Returns `true` when the rule was inserted. The first registration of an
    /// id wins; later ones are ignored even if their CSS differs.
    pub fn register(&mut self, rule: StyleRule) -> bool {
        if self.contains(rule.id) {
            tracing::debug!(id = rule.id, inserted = false, "Head style already registered");
            return false;
        }
        self.rules.push(rule);
        tracing::debug!(id = rule.id, inserted = true, "Head style registered");
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rules.iter().any(|r| r.id == id)
    }

    /// Registered rules, in registration order
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_registration_is_ignored() {
        let mut styles = HeadStyles::new();
        assert!(styles.register(FLIP_PERSPECTIVE));
        assert!(!styles.register(FLIP_PERSPECTIVE));
        assert_eq!(styles.len(), 1);
    }

    #[test]
    fn first_rule_for_an_id_wins() {
        let mut styles = HeadStyles::for_portfolio();
        let other = StyleRule {
            id: FLIP_PERSPECTIVE.id,
            css: ".perspective { perspective: 10px; }",
        };
        assert!(!styles.register(other));
        assert_eq!(styles.rules(), &[FLIP_PERSPECTIVE]);
    }

    #[test]
    fn distinct_ids_coexist() {
        let mut styles = HeadStyles::for_portfolio();
        assert!(styles.register(StyleRule {
            id: "print-style",
            css: "@media print { nav { display: none; } }",
        }));
        assert_eq!(styles.len(), 2);
        assert!(styles.contains("print-style"));
        assert!(styles.contains("flip-perspective-style"));
    }
}
