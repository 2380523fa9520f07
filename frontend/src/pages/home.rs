use shared::community::communities;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::CommunityCard;
use crate::{base::Base, styles, Route};

const STATS: [(&str, &str); 3] = [
    ("50K+", "Active Users"),
    ("25+", "Communities"),
    ("1M+", "Rankings Tracked"),
];

#[function_component(Home)]
pub fn home() -> Html {
    let communities = communities();

    html! {
        <Base>
            <section class={styles::HERO_CONTENT}>
                <span class="inline-block mb-6 text-sm font-medium px-3 py-1 rounded-full bg-blue-600/10 text-blue-600 dark:text-blue-400 border border-blue-600/20">
                    {"🏆 Community Leaderboards Platform"}
                </span>
                <h1 class={styles::HERO_TITLE}>{"Compete. Rise. Win."}</h1>
                <p class={styles::HERO_TEXT}>
                    {"Track rankings, compete with friends, and climb to the top of your favorite communities. The ultimate leaderboard platform for crypto communities."}
                </p>
                <div class={styles::CTA_CONTAINER}>
                    <a href="#communities" class={styles::HERO_CTA_BUTTON}>{"Explore Communities"}</a>
                    <Link<Route> to={Route::Apply} classes={styles::BUTTON_SECONDARY}>{"Apply for your community"}</Link<Route>>
                </div>
            </section>

            <section id="communities" class={styles::CONTAINER_LG}>
                <div class="text-center mb-12">
                    <h2 class={styles::TEXT_H2}>{"Featured Communities"}</h2>
                    <p class={classes!(styles::TEXT_SECONDARY, "mt-2")}>{"Join the competition in your favorite communities"}</p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for communities.into_iter().map(|community| html! {
                        <CommunityCard key={community.id.clone()} community={community.clone()} />
                    })}
                </div>
            </section>

            <section class="px-6 py-16 bg-gray-100 dark:bg-gray-800/50">
                <div class="max-w-4xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-8 text-center">
                    { for STATS.iter().map(|(value, label)| html! {
                        <div>
                            <div class="text-4xl font-bold text-blue-600 dark:text-blue-400 mb-2">{*value}</div>
                            <div class={styles::TEXT_SECONDARY}>{*label}</div>
                        </div>
                    })}
                </div>
            </section>
        </Base>
    }
}
