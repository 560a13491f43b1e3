mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::{Header, UserForm, UserList};
use hooks::use_users::{use_users, UseUsersResult};
use services::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();
    let UseUsersResult { state, actions } = use_users(&api_client);

    // Load the full user list on mount
    use_effect_with((), {
        let refresh_users = actions.refresh_users.clone();
        move |_| {
            refresh_users.emit(());
            || ()
        }
    });

    html! {
        <>
            <Header />

            <main class="main">
                <div class="container">
                    <UserForm
                        id={state.id.clone()}
                        first_name={state.first_name.clone()}
                        last_name={state.last_name.clone()}
                        email={state.email.clone()}
                        department={state.department.clone()}
                        submitting={state.submitting}
                        editing={state.edit_index.is_some()}
                        on_id_change={actions.on_id_change.clone()}
                        on_first_name_change={actions.on_first_name_change.clone()}
                        on_last_name_change={actions.on_last_name_change.clone()}
                        on_email_change={actions.on_email_change.clone()}
                        on_department_change={actions.on_department_change.clone()}
                        on_submit={actions.submit_form.clone()}
                    />

                    <UserList
                        users={state.users.clone()}
                        loading={state.loading}
                        on_edit={actions.edit_user.clone()}
                        on_delete={actions.delete_user.clone()}
                    />
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
