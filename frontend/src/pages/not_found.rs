use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{base::Base, styles, Route};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Base>
            <div class={styles::FLEX_CENTER}>
                <div class="text-center">
                    <h1 class={classes!(styles::TEXT_H1, "mb-4")}>{"404"}</h1>
                    <p class={classes!(styles::TEXT_SECONDARY, "mb-6")}>{"Oops! Page not found"}</p>
                    <Link<Route> to={Route::Home} classes={styles::LINK}>{"Return to Home"}</Link<Route>>
                </div>
            </div>
        </Base>
    }
}
