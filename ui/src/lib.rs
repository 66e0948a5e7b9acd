use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod actions;
mod components;
mod contexts;
mod hooks;
pub mod lifecycle;
pub mod logs;
mod pages;
pub mod state;
pub mod stats;

use components::{Navbar, ToastContainer};
use contexts::toast::ToastProvider;
use hooks::use_authentication;
use pages::{
    BooksPage, BorrowalsPage, ForgotPasswordPage, HomePage, LoginPage,
    NotFoundPage, RegisterPage, ResetPasswordPage, UsersPage, VerifyOtpPage,
};

/// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (current setup)
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/otp-verification/:email")]
    VerifyOtp { email: String },
    #[at("/password/forgot")]
    ForgotPassword,
    #[at("/password/reset/:token")]
    ResetPassword { token: String },
    #[at("/books")]
    Books,
    #[at("/borrowals")]
    Borrowals,
    #[at("/users")]
    Users,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <AppShell />
            </ToastProvider>
        </BrowserRouter>
    }
}

#[function_component]
fn AppShell() -> Html {
    // Probe the session cookie once at startup.
    use_authentication();

    html! {
        <div class="min-h-screen bg-neutral-50 dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100">
            <Navbar />
            <ToastContainer />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <Switch<Route> render={switch} />
            </main>
        </div>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::VerifyOtp { email } => html! { <VerifyOtpPage {email} /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::ResetPassword { token } => {
            html! { <ResetPasswordPage {token} /> }
        }
        Route::Books => html! { <BooksPage /> },
        Route::Borrowals => html! { <BorrowalsPage /> },
        Route::Users => html! { <UsersPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
