use yew::prelude::*;
use yew_router::prelude::*;

use super::header::Header;
use super::routes::{switch, Route};
use super::toast_host::ToastHost;
use crate::hooks::{SessionContextProvider, ToastProvider};

/// Root component. Toasts wrap sessions so session callbacks can notify.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <SessionContextProvider>
                    <div class="app">
                        <Header />
                        <main class="app-main">
                            <Switch<Route> render={switch} />
                        </main>
                        <ToastHost />
                    </div>
                </SessionContextProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}
