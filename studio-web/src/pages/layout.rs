use crate::Route;
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();

    let logged_route = current_route.clone();
    use_effect(use_reactive!(|logged_route| {
        debug!("Navigated to {:?}", logged_route);
    }));

    rsx! {
        nav { class: "flex gap-4 px-4 py-2 text-sm border-b border-gray-200",
            NavLink { to: Route::Product {}, active: matches!(current_route, Route::Product {}), "Product" }
            NavLink { to: Route::Hello {}, active: matches!(current_route, Route::Hello {}), "Hello" }
        }
        Outlet::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, active: bool, children: Element) -> Element {
    let class = if active {
        "text-blue-600 font-medium"
    } else {
        "text-gray-500 hover:text-gray-800"
    };

    rsx! {
        Link { to, class, {children} }
    }
}
