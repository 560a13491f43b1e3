use yew::prelude::*;
use shared::{
    decide_submit, is_numeric_id, with_appended, with_removed, with_replaced, SubmitPlan, User,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Snapshot of the user form and list state for rendering.
#[derive(Clone)]
pub struct UsersState {
    pub users: Vec<User>,
    pub loading: bool,

    // Form state
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub submitting: bool,
    /// Position in the list currently loaded for update, or `None` in add mode.
    pub edit_index: Option<usize>,
}

pub struct UseUsersResult {
    pub state: UsersState,
    pub actions: UseUsersActions,
}

#[derive(Clone)]
pub struct UseUsersActions {
    pub refresh_users: Callback<()>,
    pub submit_form: Callback<()>,
    pub edit_user: Callback<usize>,
    pub delete_user: Callback<usize>,
    pub on_id_change: Callback<Event>,
    pub on_first_name_change: Callback<Event>,
    pub on_last_name_change: Callback<Event>,
    pub on_email_change: Callback<Event>,
    pub on_department_change: Callback<Event>,
}

/// Hook owning the user list and the add/edit form.
///
/// Add mode and edit mode share the same form; `edit_index` being set is
/// what turns a submit into an update. Transport failures are logged and
/// swallowed, leaving the list and form exactly as they were.
///
/// Actions that read state (`submit_form`, `edit_user`, `delete_user`) are
/// rebuilt with `Callback::from` on every render: a `UseStateHandle` derefs
/// to the value of the render it was cloned in, so a memoized closure would
/// keep acting on the initial empty form and list forever. Setter-only
/// actions are memoized with `use_callback`.
#[hook]
pub fn use_users(api_client: &ApiClient) -> UseUsersResult {
    let users = use_state(|| Vec::<User>::new());
    let loading = use_state(|| true);

    // Form states
    let id = use_state(String::new);
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let department = use_state(String::new);
    let submitting = use_state(|| false);
    let edit_index = use_state(|| None::<usize>);

    // Refresh users callback (setter-only, safe to memoize)
    let refresh_users = {
        let api_client = api_client.clone();
        let users = users.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let users = users.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.fetch_users().await {
                    Ok(fetched) => {
                        users.set(fetched);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "user-list",
                            &format!("Error fetching users: {}", e),
                        );
                    }
                }

                loading.set(false);
            });
        })
    };

    // Submit callback: create in add mode, update in edit mode
    let submit_form = {
        let api_client = api_client.clone();
        let users = users.clone();
        let id = id.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let department = department.clone();
        let submitting = submitting.clone();
        let edit_index = edit_index.clone();

        Callback::from(move |_: ()| {
            let form = User {
                id: (*id).clone(),
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                email: (*email).clone(),
                department: (*department).clone(),
            };

            let plan = match decide_submit(&users, *edit_index, &form) {
                // Validation failure blocks the submission before any
                // request is issued.
                Err(message) => {
                    gloo::dialogs::alert(&message);
                    return;
                }
                Ok(None) => {
                    Logger::warn_with_component(
                        "user-form",
                        "Edit target no longer exists, ignoring submit",
                    );
                    return;
                }
                Ok(Some(plan)) => plan,
            };

            let api_client = api_client.clone();
            let users = users.clone();
            let id = id.clone();
            let first_name = first_name.clone();
            let last_name = last_name.clone();
            let email = email.clone();
            let department = department.clone();
            let submitting = submitting.clone();
            let edit_index = edit_index.clone();

            spawn_local(async move {
                submitting.set(true);

                let outcome = match plan {
                    SubmitPlan::Create => match api_client.create_user(&form).await {
                        Ok(created) => {
                            users.set(with_appended(&users, created));
                            Ok(())
                        }
                        Err(e) => Err(format!("Error adding user: {}", e)),
                    },
                    SubmitPlan::Update { position, key } => {
                        match api_client.update_user(&key, &form).await {
                            Ok(updated) => {
                                users.set(with_replaced(&users, position, updated));
                                Ok(())
                            }
                            Err(e) => Err(format!("Error updating user: {}", e)),
                        }
                    }
                };

                match outcome {
                    Ok(()) => {
                        // Back to add mode with a blank form.
                        id.set(String::new());
                        first_name.set(String::new());
                        last_name.set(String::new());
                        email.set(String::new());
                        department.set(String::new());
                        edit_index.set(None);
                    }
                    Err(message) => {
                        // Failure leaves the list and the form untouched.
                        Logger::error_with_component("user-form", &message);
                    }
                }

                submitting.set(false);
            });
        })
    };

    // Load a record into the form for update
    let edit_user = {
        let users = users.clone();
        let id = id.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let department = department.clone();
        let edit_index = edit_index.clone();

        Callback::from(move |position: usize| {
            if let Some(user) = (*users).get(position) {
                id.set(user.id.clone());
                first_name.set(user.first_name.clone());
                last_name.set(user.last_name.clone());
                email.set(user.email.clone());
                department.set(user.department.clone());
                edit_index.set(Some(position));
            }
        })
    };

    // Delete the record at a list position
    let delete_user = {
        let api_client = api_client.clone();
        let users = users.clone();

        Callback::from(move |position: usize| {
            let key = match (*users).get(position) {
                Some(user) => user.id.clone(),
                None => return,
            };

            let api_client = api_client.clone();
            let users = users.clone();

            spawn_local(async move {
                match api_client.delete_user(&key).await {
                    Ok(()) => {
                        // Remove locally only after the server acknowledged.
                        users.set(with_removed(&users, position));
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "user-list",
                            &format!("Error deleting user: {}", e),
                        );
                    }
                }
            });
        })
    };

    // Form input handlers (setter-only, safe to memoize)
    let on_id_change = {
        let id = id.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            // Non-numeric input is rejected outright; clearing the field is
            // always allowed.
            if !value.is_empty() && !is_numeric_id(&value) {
                gloo::dialogs::alert("ID should be a number");
                return;
            }
            id.set(value);
        })
    };

    let on_first_name_change = {
        let first_name = first_name.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            first_name.set(input.value());
        })
    };

    let on_last_name_change = {
        let last_name = last_name.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            last_name.set(input.value());
        })
    };

    let on_email_change = {
        let email = email.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_department_change = {
        let department = department.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            department.set(input.value());
        })
    };

    let state = UsersState {
        users: (*users).clone(),
        loading: *loading,
        id: (*id).clone(),
        first_name: (*first_name).clone(),
        last_name: (*last_name).clone(),
        email: (*email).clone(),
        department: (*department).clone(),
        submitting: *submitting,
        edit_index: *edit_index,
    };

    let actions = UseUsersActions {
        refresh_users,
        submit_form,
        edit_user,
        delete_user,
        on_id_change,
        on_first_name_change,
        on_last_name_change,
        on_email_change,
        on_department_change,
    };

    UseUsersResult { state, actions }
}
