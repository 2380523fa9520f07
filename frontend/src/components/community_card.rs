use shared::community::Community;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{styles, Route};

#[derive(Properties, PartialEq)]
pub struct CommunityCardProps {
    pub community: Community,
}

#[function_component(CommunityCard)]
pub fn community_card(props: &CommunityCardProps) -> Html {
    let community = &props.community;
    let initial = community.name.chars().next().unwrap_or('?');
    let card_class = if community.highlighted {
        classes!(styles::CARD_HOVER, "ring-2", "ring-blue-500")
    } else {
        classes!(styles::CARD_HOVER)
    };

    html! {
        <div class={card_class}>
            <div class="flex items-center space-x-4 mb-4">
                <div class="relative">
                    <div class="w-16 h-16 rounded-full bg-blue-600 p-0.5">
                        <div class="w-full h-full rounded-full bg-white dark:bg-gray-800 flex items-center justify-center">
                            <span class="text-2xl font-bold text-blue-600 dark:text-blue-400">{initial}</span>
                        </div>
                    </div>
                    if community.highlighted {
                        <span class="absolute -top-1 -right-1">{"⭐"}</span>
                    }
                </div>
                <div class="flex-1">
                    <h3 class={styles::CARD_TITLE}>{&community.name}</h3>
                    <p class={styles::CARD_TEXT}>{format!("👥 {} members", community.members)}</p>
                </div>
            </div>
            <Link<Route> to={Route::Leaderboard { id: community.id.clone() }} classes={classes!(styles::BUTTON_PRIMARY, "w-full")}>
                {"View Rankings 🏆"}
            </Link<Route>>
        </div>
    }
}
