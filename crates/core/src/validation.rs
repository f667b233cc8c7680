//! Model validation.
//!
//! Every model type implements [`Validate`], appending violations to a shared
//! [`ValidationBuilder`] under a dotted path. A document is validated in one pass and the
//! collected messages are returned together; nothing is thrown per field.
//!
//! Recursion policy (applied uniformly to every document type):
//! - a required child that is absent produces one message and its subtree is not visited;
//! - a child that is present is always visited, even if some of its own fields are malformed;
//! - optional children are visited only when present;
//! - list items are visited element by element under `field[index]`.

use cda_types::{NonEmptyText, Oid, TypeError};

use crate::error::ValidationMessage;

/// Implemented by every model type that carries required-field rules.
pub trait Validate {
    /// Append violations for `self`, located at `path`, to `vb`.
    fn validate(&self, path: &str, vb: &mut ValidationBuilder);
}

/// Joins a parent path and a field name.
pub fn child_path(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{path}.{field}")
    }
}

/// Append-only collector of validation messages.
#[derive(Debug, Default)]
pub struct ValidationBuilder {
    messages: Vec<ValidationMessage>,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation.
    pub fn add(&mut self, path: &str, field: &str, message: impl Into<String>) {
        self.messages.push(ValidationMessage {
            path: path.to_string(),
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Present/absent check. Returns `true` if present.
    pub fn required<T>(&mut self, path: &str, field: &str, value: Option<&T>) -> bool {
        if value.is_none() {
            self.add(path, field, "is required");
            return false;
        }
        true
    }

    /// Present and not blank. Returns `true` if the text is usable.
    pub fn required_text(&mut self, path: &str, field: &str, value: Option<&str>) -> bool {
        match value.map(NonEmptyText::new) {
            None => {
                self.add(path, field, "is required");
                false
            }
            Some(Err(_)) => {
                self.add(path, field, "must not be blank");
                false
            }
            Some(Ok(_)) => true,
        }
    }

    /// Absent, or present and not blank.
    pub fn optional_text(&mut self, path: &str, field: &str, value: Option<&str>) -> bool {
        match value.map(NonEmptyText::new) {
            Some(Err(_)) => {
                self.add(path, field, "must not be blank when supplied");
                false
            }
            _ => true,
        }
    }

    /// At least one item. Returns `true` if non-empty.
    pub fn required_items<T>(&mut self, path: &str, field: &str, items: &[T]) -> bool {
        if items.is_empty() {
            self.add(path, field, "requires at least one item");
            return false;
        }
        true
    }

    /// Identifier namespace root must be a dotted OID or a UUID, written in canonical form
    /// (no surrounding whitespace, lowercase UUID) since it is emitted verbatim.
    pub fn identifier_root(&mut self, path: &str, field: &str, root: &str) -> bool {
        match Oid::parse(root) {
            Ok(oid) if oid.as_str() == root => true,
            Ok(oid) => {
                self.add(
                    path,
                    field,
                    format!("malformed identifier: '{root}' must be written as '{oid}'"),
                );
                false
            }
            Err(TypeError::Empty) => {
                self.add(path, field, "must not be blank");
                false
            }
            Err(err) => {
                self.add(path, field, format!("malformed identifier: {err}"));
                false
            }
        }
    }

    /// Exactly one of the named alternatives must be present.
    ///
    /// The message is recorded against the alternatives joined with `|`, e.g.
    /// `reactions|exclusion_statement`.
    pub fn exactly_one(&mut self, path: &str, alternatives: &[(&str, bool)]) -> bool {
        let present = alternatives.iter().filter(|(_, present)| *present).count();
        if present == 1 {
            return true;
        }
        let names: Vec<&str> = alternatives.iter().map(|(name, _)| *name).collect();
        let field = names.join("|");
        if present == 0 {
            self.add(path, &field, format!("one of {} is required", names.join(", ")));
        } else {
            self.add(
                path,
                &field,
                format!("only one of {} may be supplied", names.join(", ")),
            );
        }
        false
    }

    /// Required child: reports absence, otherwise recurses into it.
    pub fn nested<T: Validate>(&mut self, path: &str, field: &str, value: Option<&T>) -> bool {
        match value {
            Some(child) => {
                child.validate(&child_path(path, field), self);
                true
            }
            None => {
                self.add(path, field, "is required");
                false
            }
        }
    }

    /// Optional child: recurses only when present.
    pub fn optional<T: Validate>(&mut self, path: &str, field: &str, value: Option<&T>) {
        if let Some(child) = value {
            child.validate(&child_path(path, field), self);
        }
    }

    /// Recurses into each list item under `field[index]`.
    pub fn each<T: Validate>(&mut self, path: &str, field: &str, items: &[T]) {
        for (index, item) in items.iter().enumerate() {
            item.validate(&format!("{}[{index}]", child_path(path, field)), self);
        }
    }

    pub fn messages(&self) -> &[ValidationMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<ValidationMessage> {
        self.messages
    }
}

/// Validates `model` from scratch under `root`, returning every violation in discovery order.
pub fn validate_model<T: Validate + ?Sized>(model: &T, root: &str) -> Vec<ValidationMessage> {
    let mut vb = ValidationBuilder::new();
    model.validate(root, &mut vb);
    vb.into_messages()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf {
        name: Option<String>,
    }

    impl Validate for Leaf {
        fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
            vb.required_text(path, "name", self.name.as_deref());
        }
    }

    struct Parent {
        child: Option<Leaf>,
        extras: Vec<Leaf>,
    }

    impl Validate for Parent {
        fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
            vb.nested(path, "child", self.child.as_ref());
            vb.each(path, "extras", &self.extras);
        }
    }

    #[test]
    fn missing_parent_short_circuits_nested_checks() {
        let model = Parent {
            child: None,
            extras: vec![],
        };
        let messages = validate_model(&model, "root");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].location(), "root.child");
        assert_eq!(messages[0].message, "is required");
    }

    #[test]
    fn present_parent_is_recursed_into() {
        let model = Parent {
            child: Some(Leaf { name: None }),
            extras: vec![Leaf { name: Some("ok".into()) }, Leaf { name: Some(" ".into()) }],
        };
        let messages = validate_model(&model, "root");
        let locations: Vec<String> = messages.iter().map(|m| m.location()).collect();
        assert_eq!(locations, vec!["root.child.name", "root.extras[1].name"]);
    }

    #[test]
    fn identifier_root_reports_malformed_roots() {
        let mut vb = ValidationBuilder::new();
        assert!(vb.identifier_root("id", "root", "1.2.36.1.2001.1003.0"));
        assert!(!vb.identifier_root("id", "root", "not-a-root"));
        assert!(!vb.identifier_root("id", "root", ""));
        let messages = vb.into_messages();
        assert!(messages[0].message.starts_with("malformed identifier"));
        assert_eq!(messages[1].message, "must not be blank");
    }

    #[test]
    fn exactly_one_reports_neither_and_both() {
        let mut vb = ValidationBuilder::new();
        assert!(!vb.exactly_one("s", &[("items", false), ("exclusion", false)]));
        assert!(!vb.exactly_one("s", &[("items", true), ("exclusion", true)]));
        assert!(vb.exactly_one("s", &[("items", true), ("exclusion", false)]));
        let messages = vb.into_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].location(), "s.items|exclusion");
        assert!(messages[1].message.starts_with("only one of"));
    }

    #[test]
    fn identifier_root_requires_canonical_form() {
        let mut vb = ValidationBuilder::new();
        assert!(!vb.identifier_root("id", "root", " 1.2.36.1.2001.1005.1 "));
        assert!(!vb.identifier_root("id", "root", "7F0C3A34-1D5E-4A49-9A0B-6B5C8F2E0D11"));
        assert!(vb.identifier_root("id", "root", "7f0c3a34-1d5e-4a49-9a0b-6b5c8f2e0d11"));
        let messages = vb.into_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[0].message,
            "malformed identifier: ' 1.2.36.1.2001.1005.1 ' must be written as '1.2.36.1.2001.1005.1'"
        );
        assert!(messages[1]
            .message
            .ends_with("must be written as '7f0c3a34-1d5e-4a49-9a0b-6b5c8f2e0d11'"));
    }

    #[test]
    fn text_rules_distinguish_absent_and_blank() {
        let mut vb = ValidationBuilder::new();
        assert!(!vb.required_text("p", "a", None));
        assert!(!vb.required_text("p", "b", Some(" \t")));
        assert!(vb.required_text("p", "c", Some("x")));
        assert!(vb.optional_text("p", "d", None));
        assert!(!vb.optional_text("p", "e", Some("")));
        let messages: Vec<(String, &str)> = vb
            .messages()
            .iter()
            .map(|m| (m.location(), m.message.as_str()))
            .collect();
        assert_eq!(
            messages,
            vec![
                ("p.a".to_string(), "is required"),
                ("p.b".to_string(), "must not be blank"),
                ("p.e".to_string(), "must not be blank when supplied"),
            ]
        );
    }

    #[test]
    fn validation_is_rebuilt_on_every_call() {
        let model = Parent {
            child: None,
            extras: vec![],
        };
        assert_eq!(validate_model(&model, "root"), validate_model(&model, "root"));
    }
}
