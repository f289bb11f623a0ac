//! Admin service management: list, create, edit, toggle, delete.
//!
//! Mutations do not patch the list in place; the resource is refetched so
//! the table always reflects what the server holds.

use leptos::prelude::*;

use crate::app::AdminAuth;
use crate::auth::Variant;
use crate::components::admin_shell::AdminShell;
use crate::guard::RequireAuth;
use crate::net::api;
use crate::net::types::{Service, ServiceInput};

#[component]
pub fn AdminServicesPage() -> impl IntoView {
    let auth = expect_context::<AdminAuth>().0;

    view! {
        <RequireAuth auth=auth login_path=Variant::Admin.login_route()>
            <AdminShell title="Services">
                <ServicesManager/>
            </AdminShell>
        </RequireAuth>
    }
}

#[component]
fn ServicesManager() -> impl IntoView {
    let services = LocalResource::new(|| api::fetch_all_services());

    let form_open = RwSignal::new(false);
    // `None` while creating, `Some(id)` while editing.
    let edit_id = RwSignal::new(Option::<String>::None);
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let open_create = move |_| {
        edit_id.set(None);
        title.set(String::new());
        description.set(String::new());
        category.set(String::new());
        price.set(String::new());
        error.set(None);
        form_open.set(true);
    };

    let open_edit = move |service: &Service| {
        edit_id.set(Some(service.id.clone()));
        title.set(service.title.clone());
        description.set(service.description.clone());
        category.set(service.category.clone().unwrap_or_default());
        price.set(service.price.map(|p| p.to_string()).unwrap_or_default());
        error.set(None);
        form_open.set(true);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if title.get().trim().is_empty() {
            error.set(Some("Title is required".to_owned()));
            return;
        }
        let category_value = category.get();
        let input = ServiceInput {
            title: title.get(),
            description: description.get(),
            category: (!category_value.trim().is_empty()).then_some(category_value),
            price: price.get().trim().parse::<f64>().ok(),
        };
        let id = edit_id.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => api::update_service(id, &input).await,
                None => api::create_service(&input).await,
            };
            match result {
                Ok(()) => {
                    form_open.set(false);
                    services.refetch();
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
            match api::toggle_service(&id).await {
                Ok(()) => services.refetch(),
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
            match api::delete_service(&id).await {
                Ok(()) => services.refetch(),
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
                    "New service"
                </button>
            </div>

            {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}

            <Show when=move || form_open.get()>
                <form class="admin-manager__form" on:submit=on_save>
                    <h2>
                        {move || if edit_id.get().is_some() { "Edit service" } else { "New service" }}
                    </h2>
                    <label>
                        "Title"
                        <input
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Description"
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label>
                        "Category"
                        <input
                            type="text"
                            prop:value=move || category.get()
                            on:input=move |ev| category.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Price"
                        <input
                            type="text"
                            prop:value=move || price.get()
                            on:input=move |ev| price.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="admin-manager__form-actions">
                        <button type="submit" class="btn btn--primary">"Save"</button>
                        <button type="button" class="btn" on:click=move |_| form_open.set(false)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading services..."</p> }>
                {move || {
                    services.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p>"No services yet."</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>"Title"</th>
                                        <th>"Category"</th>
                                        <th>"Price"</th>
                                        <th>"Status"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|service| {
                                            let toggle_id = service.id.clone();
                                            let delete_id = service.id.clone();
                                            let edit_source = service.clone();
                                            view! {
                                                <tr>
                                                    <td>{service.title.clone()}</td>
                                                    <td>{service.category.clone().unwrap_or_default()}</td>
                                                    <td>
                                                        {service
                                                            .price
                                                            .map(|p| format!("${p:.0}"))
                                                            .unwrap_or_default()}
                                                    </td>
                                                    <td>
                                                        {if service.is_active { "Active" } else { "Inactive" }}
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
                                                            {if service.is_active { "Deactivate" } else { "Activate" }}
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
