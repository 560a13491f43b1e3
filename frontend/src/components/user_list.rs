use yew::prelude::*;
use shared::User;

#[derive(Properties, PartialEq)]
pub struct UserListProps {
    pub users: Vec<User>,
    pub loading: bool,
    /// Emits the list position of the record to load into the form.
    pub on_edit: Callback<usize>,
    /// Emits the list position of the record to delete.
    pub on_delete: Callback<usize>,
}

#[function_component(UserList)]
pub fn user_list(props: &UserListProps) -> Html {
    html! {
        <section class="user-list-section">
            <h2>{"Users List"}</h2>

            {if props.loading {
                html! { <div class="loading">{"Loading users..."}</div> }
            } else {
                html! {
                    <ul class="user-list">
                        {for props.users.iter().enumerate().map(|(position, user)| {
                            let on_edit = {
                                let on_edit = props.on_edit.clone();
                                Callback::from(move |_| on_edit.emit(position))
                            };
                            let on_delete = {
                                let on_delete = props.on_delete.clone();
                                Callback::from(move |_| on_delete.emit(position))
                            };

                            html! {
                                <li class="user-list-item">
                                    <div class="user-details">
                                        <span class="user-name">
                                            {format!("Name: {}", user.full_name())}
                                        </span>
                                        <span class="user-meta">
                                            {format!(
                                                "ID: {}, Email: {}, Department: {}",
                                                user.id, user.email, user.department
                                            )}
                                        </span>
                                    </div>
                                    <div class="user-actions">
                                        <button
                                            class="btn btn-edit"
                                            aria-label="edit"
                                            onclick={on_edit}
                                        >
                                            {"Edit"}
                                        </button>
                                        <button
                                            class="btn btn-delete"
                                            aria-label="delete"
                                            onclick={on_delete}
                                        >
                                            {"Delete"}
                                        </button>
                                    </div>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
        </section>
    }
}
