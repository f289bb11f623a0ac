//! Admin enquiry triage: list consultations, update their status, delete.

use leptos::prelude::*;

use crate::app::AdminAuth;
use crate::auth::Variant;
use crate::components::admin_shell::AdminShell;
use crate::guard::RequireAuth;
use crate::net::api;

const STATUSES: [&str; 3] = ["pending", "contacted", "closed"];

#[component]
pub fn AdminEnquiriesPage() -> impl IntoView {
    let auth = expect_context::<AdminAuth>().0;

    view! {
        <RequireAuth auth=auth login_path=Variant::Admin.login_route()>
            <AdminShell title="Enquiries">
                <EnquiriesManager/>
            </AdminShell>
        </RequireAuth>
    }
}

#[component]
fn EnquiriesManager() -> impl IntoView {
    let enquiries = LocalResource::new(|| api::fetch_consultations());
    let error = RwSignal::new(Option::<String>::None);

    let on_status = move |id: String, status: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update_consultation_status(&id, &status).await {
                Ok(()) => enquiries.refetch(),
                Err(err) => error.set(Some(err.to_string())),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status);
        }
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_consultation(&id).await {
                Ok(()) => enquiries.refetch(),
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
            {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}

            <Suspense fallback=move || view! { <p>"Loading enquiries..."</p> }>
                {move || {
                    enquiries.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p>"No enquiries yet."</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Email"</th>
                                        <th>"Message"</th>
                                        <th>"Status"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|enquiry| {
                                            let status_id = enquiry.id.clone();
                                            let delete_id = enquiry.id.clone();
                                            let current = enquiry.status.clone();
                                            view! {
                                                <tr>
                                                    <td>{enquiry.name.clone()}</td>
                                                    <td>{enquiry.email.clone()}</td>
                                                    <td class="admin-table__message">
                                                        {enquiry.message.clone()}
                                                    </td>
                                                    <td>
                                                        <select on:change=move |ev| {
                                                            on_status(
                                                                status_id.clone(),
                                                                event_target_value(&ev),
                                                            );
                                                        }>
                                                            {STATUSES
                                                                .into_iter()
                                                                .map(|status| {
                                                                    view! {
                                                                        <option
                                                                            value=status
                                                                            selected=current == status
                                                                        >
                                                                            {status}
                                                                        </option>
                                                                    }
                                                                })
                                                                .collect::<Vec<_>>()}
                                                        </select>
                                                    </td>
                                                    <td class="admin-table__actions">
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
