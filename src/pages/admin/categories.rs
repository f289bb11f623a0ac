//! Admin category management.

use leptos::prelude::*;

use crate::app::AdminAuth;
use crate::auth::Variant;
use crate::components::admin_shell::AdminShell;
use crate::guard::RequireAuth;
use crate::net::api;
use crate::net::types::{Category, CategoryInput};

#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    let auth = expect_context::<AdminAuth>().0;

    view! {
        <RequireAuth auth=auth login_path=Variant::Admin.login_route()>
            <AdminShell title="Categories">
                <CategoriesManager/>
            </AdminShell>
        </RequireAuth>
    }
}

#[component]
fn CategoriesManager() -> impl IntoView {
    let categories = LocalResource::new(|| api::fetch_all_categories());

    let form_open = RwSignal::new(false);
    let edit_id = RwSignal::new(Option::<String>::None);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let open_create = move |_| {
        edit_id.set(None);
        name.set(String::new());
        description.set(String::new());
        error.set(None);
        form_open.set(true);
    };

    let open_edit = move |category: &Category| {
        edit_id.set(Some(category.id.clone()));
        name.set(category.name.clone());
        description.set(category.description.clone());
        error.set(None);
        form_open.set(true);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if name.get().trim().is_empty() {
            error.set(Some("Name is required".to_owned()));
            return;
        }
        let input = CategoryInput { name: name.get(), description: description.get() };
        let id = edit_id.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => api::update_category(id, &input).await,
                None => api::create_category(&input).await,
            };
            match result {
                Ok(()) => {
                    form_open.set(false);
                    categories.refetch();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, id);
        }
    };

    let on_toggle = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::toggle_category(&id).await {
                Ok(()) => categories.refetch(),
                Err(err) => error.set(Some(err.to_string())),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_category(&id).await {
                Ok(()) => categories.refetch(),
                Err(err) => error.set(Some(err.to_string())),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <div class="admin-manager">
            <div class="admin-manager__toolbar">
                <button class="btn btn--primary" on:click=open_create>
                    "New category"
                </button>
            </div>

            {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}

            <Show when=move || form_open.get()>
                <form class="admin-manager__form" on:submit=on_save>
                    <h2>
                        {move || {
                            if edit_id.get().is_some() { "Edit category" } else { "New category" }
                        }}
                    </h2>
                    <label>
                        "Name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Description"
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="admin-manager__form-actions">
                        <button type="submit" class="btn btn--primary">"Save"</button>
                        <button type="button" class="btn" on:click=move |_| form_open.set(false)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading categories..."</p> }>
                {move || {
                    categories.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p>"No categories yet."</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Description"</th>
                                        <th>"Status"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|category| {
                                            let toggle_id = category.id.clone();
                                            let delete_id = category.id.clone();
                                            let edit_source = category.clone();
                                            view! {
                                                <tr>
                                                    <td>{category.name.clone()}</td>
                                                    <td>{category.description.clone()}</td>
                                                    <td>
                                                        {if category.is_active { "Active" } else { "Inactive" }}
                                                    </td>
                                                    <td class="admin-table__actions">
                                                        <button
                                                            class="btn btn--small"
                                                            on:click=move |_| open_edit(&edit_source)
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn btn--small"
                                                            on:click=move |_| on_toggle(toggle_id.clone())
                                                        >
                                                            {if category.is_active { "Deactivate" } else { "Activate" }}
                                                        </button>
                                                        <button
                                                            class="btn btn--small btn--danger"
                                                            on:click=move |_| on_delete(delete_id.clone())
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                        .into_any(),
                        Err(err) => {
                            view! { <p class="error">{err.to_string()}</p> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
