use chrono::{Duration, Utc};
use shared::community::{
    community_name, find_community, format_volume, has_host_panel, mock_leaderboard, search, LeaderboardRow, RankTier,
};
use shared::countdown::{Giveaway, LeaderboardPeriod as Period};
use shared::shared_spin_wheel::EntrantStatus;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::{GiveawaySection, LeaderboardPeriod, RaffleAdmin};
use crate::{base::Base, styles, Route};

#[derive(Properties, PartialEq)]
pub struct LeaderboardProps {
    pub community_id: String,
}

fn row_background(row: &LeaderboardRow) -> &'static str {
    match RankTier::for_rank(row.entrant.rank) {
        RankTier::Gold => "bg-gradient-to-r from-yellow-500/10 to-yellow-600/5 border-yellow-500/20",
        RankTier::Silver => "bg-gradient-to-r from-gray-400/10 to-gray-500/5 border-gray-400/20",
        RankTier::Bronze => "bg-gradient-to-r from-amber-600/10 to-amber-700/5 border-amber-600/20",
        RankTier::Plain if row.entrant.status == EntrantStatus::Entered => {
            "bg-gradient-to-r from-green-500/15 to-green-600/8 border-green-400/40"
        }
        RankTier::Plain => "bg-white dark:bg-gray-800 border-gray-200 dark:border-gray-700",
    }
}

fn status_badge(status: EntrantStatus) -> &'static str {
    match status {
        EntrantStatus::Entered => "bg-green-500/30 text-green-700 dark:text-green-200 border-green-400/60",
        EntrantStatus::Excluded => "bg-red-500/20 text-red-600 dark:text-red-300 border-red-500/40",
        EntrantStatus::Eligible => "border-gray-400/30 text-gray-500 dark:text-gray-400",
    }
}

fn rank_icon(rank: u32) -> Html {
    match RankTier::for_rank(rank).medal() {
        Some(medal) => html! { <span class="text-2xl">{medal}</span> },
        None => html! { <span class="text-lg font-bold text-gray-500 dark:text-gray-400">{format!("#{}", rank)}</span> },
    }
}

#[function_component(Leaderboard)]
pub fn leaderboard(props: &LeaderboardProps) -> Html {
    let query = use_state(String::new);
    let rows = use_memo((), |_| mock_leaderboard());

    // Fixed relative to the first render so the countdowns run down
    let giveaway = use_memo((), |_| {
        let now = Utc::now();
        Giveaway {
            title: "Weekly Raffle".to_string(),
            description: "Enter the codeword given by the raffle host before it expires to gain an entry to the weekly raffle. Winners announced every Sunday!".to_string(),
            is_live: true,
            end_time: now + Duration::hours(3),
        }
    });
    let period = use_memo((), |_| {
        let now = Utc::now();
        Period {
            start: now - Duration::days(5),
            end: now + Duration::days(2),
            is_active: true,
        }
    });

    let name = community_name(&props.community_id);
    let members = find_community(&props.community_id)
        .map(|c| c.members)
        .unwrap_or_default();
    let initial = name.chars().next().unwrap_or('?');
    let visible = search(&rows, &query);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    html! {
        <Base>
            <section class="px-4 md:px-6 py-12">
                <div class="max-w-7xl mx-auto text-center mb-8">
                    <div class="mb-4 text-left">
                        <Link<Route> to={Route::Home} classes={styles::LINK}>{"← Back to Communities"}</Link<Route>>
                    </div>
                    <div class="flex items-center justify-center mb-4">
                        <div class="w-40 h-40 rounded-full bg-gradient-to-r from-blue-500 to-purple-500 p-1">
                            <div class="w-full h-full rounded-full bg-gray-100 dark:bg-gray-800 flex items-center justify-center">
                                <span class="text-6xl font-bold text-blue-600 dark:text-blue-400">{initial}</span>
                            </div>
                        </div>
                    </div>
                    <h1 class={classes!(styles::TEXT_H1, "mb-2")}>{&name}</h1>
                    <p class={classes!(styles::TEXT_SECONDARY, "hidden", "sm:block")}>{"Community Leaderboard"}</p>
                    <div class="mt-4">
                        <Link<Route> to={Route::HostRaffle { id: props.community_id.clone() }} classes={styles::LINK}>
                            {"Host a raffle →"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="px-4 md:px-6 pb-8">
                <div class="max-w-4xl mx-auto space-y-6">
                    if has_host_panel(&props.community_id) {
                        <RaffleAdmin
                            community_name={name.clone()}
                            total_members={members}
                            eligible_users={rows.iter().map(|row| row.entrant.clone()).collect::<Vec<_>>()}
                        />
                    }
                    <GiveawaySection giveaway={(*giveaway).clone()} />
                    <LeaderboardPeriod period={(*period).clone()} />
                </div>
            </section>

            <section class="px-4 md:px-6 pb-20">
                <div class="max-w-4xl mx-auto mb-6">
                    <div class="relative">
                        <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">{"🔍"}</span>
                        <input
                            placeholder="Search users..."
                            value={(*query).clone()}
                            oninput={on_search}
                            class={classes!(styles::INPUT, "pl-10", "h-12", "mt-0")}
                        />
                    </div>
                </div>

                <div class="max-w-4xl mx-auto space-y-3">
                    if visible.is_empty() {
                        <div class={classes!(styles::TEXT_SECONDARY, "text-center", "py-8")}>{"No users match your search"}</div>
                    }
                    { for visible.iter().map(|row| html! {
                        <div
                            key={row.entrant.name.clone()}
                            class={classes!("rounded-lg", "border", "shadow-lg", "p-3", "md:p-4", "transition-all", "duration-500", "hover:-translate-y-1", row_background(row))}
                        >
                            <div class="flex items-center justify-between gap-2">
                                <div class="flex items-center space-x-2 md:space-x-3 min-w-0 flex-1">
                                    <div class="flex items-center justify-center w-8 h-8 md:w-10 md:h-10 flex-shrink-0">
                                        {rank_icon(row.entrant.rank)}
                                    </div>
                                    <div class="h-8 w-8 md:h-10 md:w-10 rounded-full border-2 border-blue-500/30 bg-blue-600 text-white font-bold flex items-center justify-center flex-shrink-0">
                                        {row.entrant.name.chars().next().unwrap_or('?')}
                                    </div>
                                    <div class="min-w-0 flex-1">
                                        <h3 class="font-semibold text-sm md:text-base text-gray-900 dark:text-white truncate">{&row.entrant.name}</h3>
                                        <span class={classes!("text-xs", "px-1.5", "py-0.5", "rounded", "border", status_badge(row.entrant.status))}>
                                            {row.entrant.status.label()}
                                        </span>
                                    </div>
                                </div>
                                <div class="text-right flex-shrink-0">
                                    <div class="text-base md:text-xl font-bold text-blue-600 dark:text-blue-400">
                                        {format!("${}", format_volume(row.entrant.volume))}
                                    </div>
                                    <div class={classes!("text-xs", if row.is_trending_up() { "text-green-500" } else { "text-red-500" })}>
                                        {format!("Volume {}", row.change)}
                                    </div>
                                </div>
                            </div>
                        </div>
                    })}
                </div>
            </section>
        </Base>
    }
}
