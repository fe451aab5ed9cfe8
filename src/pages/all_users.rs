use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::LoadingIndicator;
use crate::models::{ChangeRoleRequest, Notifier, SessionStore, UserSummary};

/// Roles an admin can hand out from the user list.
const ASSIGNABLE_ROLES: [&str; 3] = ["USER", "MODERATOR", "ADMIN"];

/// Admin view of every account with role changes and deletion.
#[component]
pub fn AllUsers() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notifier = expect_context::<Notifier>();
    let api = expect_context::<ApiClient>();

    let users = RwSignal::new(None::<Vec<UserSummary>>);

    let reload = move || {
        spawn_local(async move {
            match api.all_users().await {
                Ok(list) => users.set(Some(list)),
                Err(e) => {
                    notifier.error(e.user_message());
                    users.set(Some(Vec::new()));
                }
            }
        });
    };

    let change_role = move |user: UserSummary, new_role: String| {
        let request = ChangeRoleRequest {
            user_id: user.id.clone(),
            current_role: user.primary_role().to_string(),
            new_role,
        };
        if request.current_role == request.new_role {
            return;
        }
        spawn_local(async move {
            match api.change_role(&request).await {
                Ok(response) => {
                    notifier.success(response.message);
                    reload();
                }
                Err(e) => notifier.error(e.user_message()),
            }
        });
    };

    let delete = move |user_id: String| {
        spawn_local(async move {
            match api.delete_user(&user_id).await {
                Ok(response) => {
                    notifier.success(response.message);
                    users.update(|list| {
                        if let Some(list) = list {
                            list.retain(|u| u.id != user_id);
                        }
                    });
                }
                Err(e) => notifier.error(e.user_message()),
            }
        });
    };

    reload();

    view! {
        <section class="all-users">
            <h2>"Users"</h2>
            {move || match users.get() {
                None => view! { <LoadingIndicator /> }.into_any(),
                Some(list) => view! {
                    <table>
                        <thead>
                            <tr>
                                <th>"Username"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|user| {
                                    let is_self = session.username().as_deref() == Some(user.username.as_str());
                                    let current = user.primary_role().to_string();
                                    let for_role = user.clone();
                                    let user_id = user.id.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <a href=format!("/user/{}", user.username)>{user.username.clone()}</a>
                                            </td>
                                            <td>{user.email.clone().unwrap_or_default()}</td>
                                            <td>
                                                <select
                                                    disabled=is_self
                                                    on:change=move |ev| change_role(for_role.clone(), event_target_value(&ev))
                                                >
                                                    {ASSIGNABLE_ROLES
                                                        .into_iter()
                                                        .map(|role| view! {
                                                            <option value=role selected={role == current}>{role}</option>
                                                        })
                                                        .collect_view()}
                                                </select>
                                            </td>
                                            <td>
                                                <button
                                                    class="danger"
                                                    disabled=is_self
                                                    on:click=move |_| delete(user_id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                    .into_any(),
            }}
        </section>
    }
}
