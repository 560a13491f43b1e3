use serde::{Deserialize, Serialize};
use std::fmt;

/// A user record as exchanged with the backend.
///
/// The wire format is camelCase (`{"id": "...", "firstName": "...", ...}`);
/// `id` is a numeric string assigned by whichever side populates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl User {
    /// Full display name, e.g. for list rows.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Whether a form value passes the numeric-id check.
///
/// Mirrors the JS `isNaN` coercion the form historically used: the trimmed
/// value must parse as a float, so "42", "12." and "1e5" pass while "12a"
/// and "abc" fail. Empty input is handled by the required-field check, not
/// here.
pub fn is_numeric_id(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

/// Specific validation errors for the user form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UserValidationError {
    EmptyId,
    EmptyFirstName,
    EmptyLastName,
    EmptyEmail,
    EmptyDepartment,
    NonNumericId(String),
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserValidationError::EmptyId
            | UserValidationError::EmptyFirstName
            | UserValidationError::EmptyLastName
            | UserValidationError::EmptyEmail
            | UserValidationError::EmptyDepartment => write!(f, "All fields are required"),
            UserValidationError::NonNumericId(_) => write!(f, "ID should be a number"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Form validation result for the user form.
///
/// A failed validation blocks submission entirely; there is no field-level
/// error display, only a single blocking alert with the first message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFormValidation {
    pub is_valid: bool,
    pub errors: Vec<UserValidationError>,
}

impl UserFormValidation {
    /// Validate the current form contents.
    ///
    /// Every field is required, and `id` must be numeric. All failures are
    /// collected, but callers surface only the first message.
    pub fn check(form: &User) -> Self {
        let mut errors = Vec::new();

        if form.id.trim().is_empty() {
            errors.push(UserValidationError::EmptyId);
        } else if !is_numeric_id(&form.id) {
            errors.push(UserValidationError::NonNumericId(form.id.clone()));
        }
        if form.first_name.trim().is_empty() {
            errors.push(UserValidationError::EmptyFirstName);
        }
        if form.last_name.trim().is_empty() {
            errors.push(UserValidationError::EmptyLastName);
        }
        if form.email.trim().is_empty() {
            errors.push(UserValidationError::EmptyEmail);
        }
        if form.department.trim().is_empty() {
            errors.push(UserValidationError::EmptyDepartment);
        }

        UserFormValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// The message to show in the blocking alert, if validation failed.
    pub fn first_message(&self) -> Option<String> {
        self.errors.first().map(|e| e.to_string())
    }
}

/// What a form submission will do, decided before any network call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPlan {
    /// No edit target set: create a new record.
    Create,
    /// Edit target set: update the record at `position`, keyed by its
    /// current server-assigned id. The form's id field may have been
    /// edited, so the URL key must come from the list, not the form.
    Update { position: usize, key: String },
}

/// Decide between create and update for the current form state.
///
/// Returns `None` when the edit target no longer points at a list entry
/// (e.g. the record was deleted out from under the form).
pub fn plan_submit(users: &[User], edit_index: Option<usize>) -> Option<SubmitPlan> {
    match edit_index {
        None => Some(SubmitPlan::Create),
        Some(position) => users.get(position).map(|target| SubmitPlan::Update {
            position,
            key: target.id.clone(),
        }),
    }
}

/// Decide what a submit of the current form does, before any network call.
///
/// `Err` carries the blocking alert message for a validation failure.
/// `Ok(None)` means the edit target no longer points at a list entry and
/// the submit is dropped. Both the form contents and the list must be the
/// values as of the submit, not of some earlier render.
pub fn decide_submit(
    users: &[User],
    edit_index: Option<usize>,
    form: &User,
) -> Result<Option<SubmitPlan>, String> {
    let validation = UserFormValidation::check(form);
    if !validation.is_valid {
        return Err(validation
            .first_message()
            .unwrap_or_else(|| "All fields are required".to_string()));
    }
    Ok(plan_submit(users, edit_index))
}

/// Interpret a fetch response body as the user collection.
///
/// Anything that is not a JSON array of records is silently treated as an
/// empty collection; only transport failures are reported to the caller.
pub fn users_from_value(value: serde_json::Value) -> Vec<User> {
    serde_json::from_value(value).unwrap_or_default()
}

/// List after a successful create: the server's record goes at the end.
pub fn with_appended(users: &[User], created: User) -> Vec<User> {
    let mut next = users.to_vec();
    next.push(created);
    next
}

/// List after a successful update: the server's record replaces the entry
/// at `position`. Out-of-range positions leave the list unchanged.
pub fn with_replaced(users: &[User], position: usize, updated: User) -> Vec<User> {
    let mut next = users.to_vec();
    if let Some(entry) = next.get_mut(position) {
        *entry = updated;
    }
    next
}

/// List after a successful delete: the entry at `position` is removed and
/// every other entry keeps its relative order. Out-of-range positions leave
/// the list unchanged.
pub fn with_removed(users: &[User], position: usize) -> Vec<User> {
    let mut next = users.to_vec();
    if position < next.len() {
        next.remove(position);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, first: &str) -> User {
        User {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            department: "Engineering".to_string(),
        }
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let u = user("7", "Jane");
        let json = serde_json::to_value(&u).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["department"], "Engineering");

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, u);
    }

    #[test]
    fn test_is_numeric_id() {
        assert!(is_numeric_id("42"));
        assert!(is_numeric_id(" 42 "));
        assert!(is_numeric_id("12."));
        assert!(is_numeric_id("1e5"));
        assert!(!is_numeric_id("12a"));
        assert!(!is_numeric_id("abc"));
        assert!(!is_numeric_id(""));
    }

    #[test]
    fn test_validation_rejects_any_empty_field() {
        let complete = user("1", "Jane");
        assert!(UserFormValidation::check(&complete).is_valid);

        let blank_each: Vec<User> = vec![
            User { id: String::new(), ..complete.clone() },
            User { first_name: String::new(), ..complete.clone() },
            User { last_name: String::new(), ..complete.clone() },
            User { email: String::new(), ..complete.clone() },
            User { department: String::new(), ..complete.clone() },
        ];
        for form in blank_each {
            let validation = UserFormValidation::check(&form);
            assert!(!validation.is_valid);
            assert_eq!(
                validation.first_message().as_deref(),
                Some("All fields are required")
            );
        }
    }

    #[test]
    fn test_validation_rejects_non_numeric_id() {
        let form = User { id: "12a".to_string(), ..user("1", "Jane") };
        let validation = UserFormValidation::check(&form);
        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors,
            vec![UserValidationError::NonNumericId("12a".to_string())]
        );
        assert_eq!(
            validation.first_message().as_deref(),
            Some("ID should be a number")
        );
    }

    #[test]
    fn test_plan_submit_without_edit_target_creates() {
        let users = vec![user("1", "Jane")];
        assert_eq!(plan_submit(&users, None), Some(SubmitPlan::Create));
    }

    #[test]
    fn test_plan_submit_keys_update_by_original_id() {
        // The form's id field may have been edited, but the update must be
        // keyed by the id the record had when it was loaded for editing.
        let users = vec![user("1", "Jane"), user("2", "Joe")];
        assert_eq!(
            plan_submit(&users, Some(1)),
            Some(SubmitPlan::Update {
                position: 1,
                key: "2".to_string(),
            })
        );
    }

    #[test]
    fn test_plan_submit_with_stale_edit_target() {
        let users = vec![user("1", "Jane")];
        assert_eq!(plan_submit(&users, Some(5)), None);
    }

    #[test]
    fn test_decide_submit_reads_the_typed_fields() {
        // A form the user has filled in must submit, whatever the form
        // contained when the component first rendered.
        let users = vec![user("1", "Jane")];
        let typed = user("2", "Joe");
        assert_eq!(
            decide_submit(&users, None, &typed),
            Ok(Some(SubmitPlan::Create))
        );

        let blank = User {
            id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            department: String::new(),
        };
        assert_eq!(
            decide_submit(&users, None, &blank),
            Err("All fields are required".to_string())
        );
    }

    #[test]
    fn test_decide_submit_updates_against_the_current_list() {
        // Edit mode against the fetched list: the update is keyed by the
        // record's server-assigned id even when the form id was edited.
        let users = vec![user("1", "Jane"), user("2", "Joe")];
        let edited = user("99", "Joseph");
        assert_eq!(
            decide_submit(&users, Some(1), &edited),
            Ok(Some(SubmitPlan::Update {
                position: 1,
                key: "2".to_string(),
            }))
        );

        // Edit target deleted out from under the form: drop the submit.
        assert_eq!(decide_submit(&users, Some(7), &edited), Ok(None));
    }

    #[test]
    fn test_users_from_value_treats_non_array_as_empty() {
        use serde_json::json;

        assert_eq!(users_from_value(json!(null)), Vec::<User>::new());
        assert_eq!(users_from_value(json!("oops")), Vec::<User>::new());
        assert_eq!(
            users_from_value(json!({"error": "not found"})),
            Vec::<User>::new()
        );
        assert_eq!(users_from_value(json!([1, 2, 3])), Vec::<User>::new());
    }

    #[test]
    fn test_users_from_value_parses_an_array_of_records() {
        use serde_json::json;

        let body = json!([
            {
                "id": "1",
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jane@example.com",
                "department": "Engineering"
            }
        ]);
        assert_eq!(users_from_value(body), vec![user("1", "Jane")]);
    }

    #[test]
    fn test_with_appended_grows_by_exactly_one() {
        let users = vec![user("1", "Jane")];
        let created = user("2", "Joe");
        let next = with_appended(&users, created.clone());
        assert_eq!(next.len(), users.len() + 1);
        assert_eq!(next[0], users[0]);
        assert_eq!(next[1], created);
    }

    #[test]
    fn test_with_replaced_touches_only_that_position() {
        let users = vec![user("1", "Jane"), user("2", "Joe"), user("3", "Ann")];
        let updated = user("2", "Joseph");
        let next = with_replaced(&users, 1, updated.clone());
        assert_eq!(next.len(), users.len());
        assert_eq!(next[0], users[0]);
        assert_eq!(next[1], updated);
        assert_eq!(next[2], users[2]);
    }

    #[test]
    fn test_with_removed_shrinks_by_exactly_one() {
        let users = vec![user("1", "Jane"), user("2", "Joe"), user("3", "Ann")];
        let next = with_removed(&users, 1);
        assert_eq!(next.len(), users.len() - 1);
        assert_eq!(next[0], users[0]);
        assert_eq!(next[1], users[2]);
    }

    #[test]
    fn test_out_of_range_positions_leave_list_unchanged() {
        let users = vec![user("1", "Jane")];
        assert_eq!(with_replaced(&users, 9, user("9", "Nobody")), users);
        assert_eq!(with_removed(&users, 9), users);
    }
}
