//! Root application component with routing and context providers.
//!
//! Two independent auth contexts are provided, one per principal variant.
//! Each is a pair: a reactive [`AuthState`] signal that guards and headers
//! read, and (in the browser) the controller driving it. The controllers
//! are wired so every state transition is mirrored into the matching
//! signal, and both kick off their mount-time session revalidation before
//! any protected route can settle.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::about::AboutPage;
use crate::pages::admin::categories::AdminCategoriesPage;
use crate::pages::admin::change_password::ChangePasswordPage;
use crate::pages::admin::dashboard::AdminDashboardPage;
use crate::pages::admin::enquiries::AdminEnquiriesPage;
use crate::pages::admin::login::AdminLoginPage;
use crate::pages::admin::register::AdminRegisterPage;
use crate::pages::admin::registration_settings::RegistrationSettingsPage;
use crate::pages::admin::services::AdminServicesPage;
use crate::pages::career::CareerPage;
use crate::pages::case_studies::CaseStudiesPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::service_detail::ServiceDetailPage;
use crate::pages::services::ServicesPage;
use crate::pages::user::dashboard::UserDashboardPage;
use crate::pages::user::login::UserLoginPage;
use crate::pages::user::register::UserRegisterPage;
use crate::state::auth::AuthState;

/// Reactive auth state for the User variant.
#[derive(Clone, Copy)]
pub struct UserAuth(pub RwSignal<AuthState>);

/// Reactive auth state for the Admin variant.
#[derive(Clone, Copy)]
pub struct AdminAuth(pub RwSignal<AuthState>);

#[cfg(feature = "hydrate")]
pub type Controller =
    crate::auth::AuthController<crate::net::api::HttpAuthApi, crate::session::BrowserStore>;

/// Browser-side controller handle for the User variant.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct UserSession(pub std::rc::Rc<Controller>);

/// Browser-side controller handle for the Admin variant.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct AdminSession(pub std::rc::Rc<Controller>);

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let user_auth = RwSignal::new(AuthState::default());
    let admin_auth = RwSignal::new(AuthState::default());
    provide_context(UserAuth(user_auth));
    provide_context(AdminAuth(admin_auth));

    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;

        use crate::auth::{AuthController, Variant};
        use crate::net::api::HttpAuthApi;
        use crate::session::BrowserStore;

        let user = Rc::new(AuthController::new(
            Variant::User,
            HttpAuthApi::new(Variant::User),
            BrowserStore,
        ));
        user.set_on_change(move |state| user_auth.set(state.clone()));
        provide_context(UserSession(Rc::clone(&user)));
        leptos::task::spawn_local(async move { user.revalidate().await });

        let admin = Rc::new(AuthController::new(
            Variant::Admin,
            HttpAuthApi::new(Variant::Admin),
            BrowserStore,
        ));
        admin.set_on_change(move |state| admin_auth.set(state.clone()));
        provide_context(AdminSession(Rc::clone(&admin)));
        leptos::task::spawn_local(async move { admin.revalidate().await });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/stratus.css"/>
        <Title text="Stratus Cloud Consulting"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("services") view=ServicesPage/>
                <Route path=(StaticSegment("services"), ParamSegment("id")) view=ServiceDetailPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("case-studies") view=CaseStudiesPage/>
                <Route path=StaticSegment("career") view=CareerPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>

                <Route path=(StaticSegment("user"), StaticSegment("login")) view=UserLoginPage/>
                <Route path=(StaticSegment("user"), StaticSegment("register")) view=UserRegisterPage/>
                <Route path=(StaticSegment("user"), StaticSegment("dashboard")) view=UserDashboardPage/>

                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("register")) view=AdminRegisterPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("services")) view=AdminServicesPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("categories")) view=AdminCategoriesPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("enquiries")) view=AdminEnquiriesPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("registration-settings"))
                    view=RegistrationSettingsPage
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("change-password"))
                    view=ChangePasswordPage
                />
            </Routes>
        </Router>
    }
}
