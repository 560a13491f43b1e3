use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserFormProps {
    // Form state
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub submitting: bool,
    /// True when a record is loaded for update, false in add mode.
    pub editing: bool,

    // Event handlers
    pub on_id_change: Callback<Event>,
    pub on_first_name_change: Callback<Event>,
    pub on_last_name_change: Callback<Event>,
    pub on_email_change: Callback<Event>,
    pub on_department_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

#[function_component(UserForm)]
pub fn user_form(props: &UserFormProps) -> Html {
    html! {
        <section class="user-form-section">
            <h2>{"User Details"}</h2>

            <form class="user-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="id">{"ID"}</label>
                    <input
                        type="text"
                        id="id"
                        value={props.id.clone()}
                        onchange={props.on_id_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="first-name">{"First Name"}</label>
                    <input
                        type="text"
                        id="first-name"
                        value={props.first_name.clone()}
                        onchange={props.on_first_name_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="last-name">{"Last Name"}</label>
                    <input
                        type="text"
                        id="last-name"
                        value={props.last_name.clone()}
                        onchange={props.on_last_name_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        value={props.email.clone()}
                        onchange={props.on_email_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="department">{"Department"}</label>
                    <input
                        type="text"
                        id="department"
                        value={props.department.clone()}
                        onchange={props.on_department_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={props.submitting}
                >
                    {if props.editing { "Update User" } else { "Add User" }}
                </button>
            </form>
        </section>
    }
}
