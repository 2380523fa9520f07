pub mod base;
pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{
   apply_community::ApplyCommunity,
   home::Home,
   host_raffle::HostRaffle,
   leaderboard::Leaderboard,
   not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Home,
   #[at("/leaderboard/:id")] Leaderboard { id: String },
   #[at("/host/:id")] HostRaffle { id: String },
   #[at("/apply")] Apply,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Home => html! { <Home /> },
       Route::Leaderboard { id } => html! { <Leaderboard community_id={id} /> },
       Route::HostRaffle { id } => html! { <HostRaffle community_id={id} /> },
       Route::Apply => html! { <ApplyCommunity /> },
       Route::NotFound => html! { <NotFound /> },
   }
}
