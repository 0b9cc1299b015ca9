//! LDAP search filter syntax

use crate::{FilterKind, Placeholder, ValidationError};
use bastion_core::StructValidator;

/// Check that `filter` is wrapped in parentheses and mentions every
/// placeholder in `required`. Diagnostic only, the filter is never changed.
pub fn check_filter(
    kind: FilterKind,
    filter: &str,
    required: &[Placeholder],
    validator: &mut StructValidator,
) {
    if !filter.starts_with('(') || !filter.ends_with(')') {
        validator.push(ValidationError::FilterNotEnclosed {
            kind,
            filter: filter.to_string(),
        });
    }

    for placeholder in required {
        if !filter.contains(placeholder.token()) {
            validator.push(placeholder.missing_error());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USERS: &[Placeholder] = &[Placeholder::UsernameAttribute, Placeholder::Input];

    fn check(kind: FilterKind, filter: &str, required: &[Placeholder]) -> Vec<String> {
        let mut validator = StructValidator::new();
        check_filter(kind, filter, required, &mut validator);
        validator.messages()
    }

    #[test]
    fn test_valid_users_filter() {
        assert!(check(FilterKind::Users, "({username_attribute}={input})", USERS).is_empty());
        assert!(check(
            FilterKind::Users,
            "(&({username_attribute}={input})(objectClass=person))",
            USERS
        )
        .is_empty());
    }

    #[test]
    fn test_missing_parenthesis() {
        assert_eq!(
            check(FilterKind::Users, "{username_attribute}={input}", USERS),
            vec!["The users filter should contain enclosing parenthesis. For instance {username_attribute}={input} should be ({username_attribute}={input})"]
        );
        assert_eq!(check(FilterKind::Groups, "(cn={input}", &[]).len(), 1);
        assert_eq!(check(FilterKind::Groups, "cn={input})", &[]).len(), 1);
    }

    #[test]
    fn test_missing_placeholders() {
        assert_eq!(
            check(
                FilterKind::Users,
                "(&({mail_attribute}={input})(objectClass=person))",
                USERS
            ),
            vec![Placeholder::UsernameAttribute.missing_error().to_string()]
        );
        assert_eq!(
            check(
                FilterKind::Users,
                "(&({username_attribute}={mail_attribute})(objectClass=person))",
                USERS
            ),
            vec![Placeholder::Input.missing_error().to_string()]
        );
        assert_eq!(check(FilterKind::Users, "(objectClass=person)", USERS).len(), 2);
    }

    #[test]
    fn test_groups_filter_needs_no_placeholder() {
        assert!(check(FilterKind::Groups, "(objectClass=group)", &[]).is_empty());
    }

    #[test]
    fn test_every_problem_is_reported() {
        assert_eq!(check(FilterKind::Users, "uid=john", USERS).len(), 3);
    }
}
