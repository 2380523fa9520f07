use shared::community::{community_name, mock_leaderboard};
use shared::constants::CONFIG_SAVED;
use shared::raffle_config::RaffleConfig;
use shared::shared_spin_wheel::{Entrant, WinnerRecord};
use shared::RaffleError;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::{SpinWheel, TextField};
use crate::hooks::use_form_state;
use crate::{base::Base, styles, Route};

#[derive(Properties, PartialEq)]
pub struct HostRaffleProps {
    pub community_id: String,
}

#[function_component(HostRaffle)]
pub fn host_raffle(props: &HostRaffleProps) -> Html {
    let config = use_state(RaffleConfig::default);
    let show_wheel = use_state(|| false);
    let winners = use_state(Vec::<WinnerRecord>::new);
    let form = use_form_state();
    let board = use_memo((), |_| {
        mock_leaderboard()
            .into_iter()
            .map(|row| row.entrant)
            .collect::<Vec<Entrant>>()
    });

    let name = community_name(&props.community_id);
    let eligible = match config.criteria() {
        Ok(criteria) => criteria.filter(&board),
        Err(_) => Vec::new(),
    };

    let update = |apply: fn(&mut RaffleConfig, String)| {
        let config = config.clone();
        Callback::from(move |value: String| {
            let mut next = (*config).clone();
            apply(&mut next, value);
            config.set(next);
        })
    };

    let on_toggle_live = {
        let config = config.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*config).clone();
            next.toggle_live();
            config.set(next);
        })
    };

    let on_save = {
        let config = config.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| match config.save() {
            Ok(_) => form.handle_success.emit(CONFIG_SAVED.to_string()),
            Err(RaffleError::Validation(errors)) => {
                form.handle_field_errors.emit(RaffleConfig::error_messages(&errors));
            }
            Err(e) => form.handle_error.emit(e.to_string()),
        })
    };

    let on_view_wheel = {
        let show_wheel = show_wheel.clone();
        Callback::from(move |_: MouseEvent| show_wheel.set(true))
    };

    let on_close_wheel = {
        let show_wheel = show_wheel.clone();
        Callback::from(move |_: ()| show_wheel.set(false))
    };

    let on_history = {
        let winners = winners.clone();
        Callback::from(move |history: Vec<WinnerRecord>| winners.set(history))
    };

    let (status_badge, toggle_class, toggle_label) = if config.is_live {
        (
            "bg-green-500/20 text-green-600 dark:text-green-300 border-green-400/50",
            "bg-red-500 hover:bg-red-600 text-white",
            "■ Go Offline",
        )
    } else {
        (
            "bg-gray-500/20 text-gray-600 dark:text-gray-300 border-gray-400/50",
            "bg-green-500 hover:bg-green-600 text-white",
            "▶ Go Live",
        )
    };

    html! {
        <Base>
            <section class="px-4 md:px-6 py-12">
                <div class="max-w-7xl mx-auto text-center">
                    <div class="mb-4 text-left">
                        <Link<Route> to={Route::Leaderboard { id: props.community_id.clone() }} classes={styles::LINK}>
                            {"← Back to Leaderboard"}
                        </Link<Route>>
                    </div>
                    <h1 class={classes!(styles::TEXT_H1, "mb-2")}>{&name}</h1>
                    <span class="inline-block text-xs font-semibold px-2 py-0.5 rounded-full bg-blue-600/10 text-blue-600 dark:text-blue-400">
                        {"Admin Panel"}
                    </span>
                </div>
            </section>

            <section class="px-4 md:px-6 pb-20">
                <div class="max-w-4xl mx-auto space-y-6">
                    <div class={styles::CARD}>
                        <div class="flex items-center justify-between mb-4">
                            <h2 class={styles::CARD_TITLE}>{"✨ Raffle Status"}</h2>
                            <span class={classes!("text-xs", "font-semibold", "px-2", "py-0.5", "rounded-full", "border", status_badge)}>
                                {config.status_label()}
                            </span>
                        </div>
                        <div class="flex items-center space-x-4">
                            <button onclick={on_toggle_live} class={classes!("px-4", "py-2", "rounded-lg", "font-medium", toggle_class)}>
                                {toggle_label}
                            </button>
                            <span class={styles::TEXT_SECONDARY}>{config.status_message()}</span>
                        </div>
                    </div>

                    <div class={styles::CARD}>
                        <h2 class={classes!(styles::CARD_TITLE, "mb-4")}>{"⚙ Raffle Configuration"}</h2>

                        if !form.error.is_empty() {
                            <div class={classes!(styles::ALERT_ERROR, "mb-4")}>{&form.error}</div>
                        }
                        if !form.success.is_empty() {
                            <div class={classes!(styles::ALERT_SUCCESS, "mb-4")}>{&form.success}</div>
                        }

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <TextField
                                id="codeword"
                                label="# Codeword"
                                placeholder="Enter raffle codeword"
                                value={config.codeword.clone()}
                                error={form.field_error("codeword")}
                                oninput={update(|c, v| c.codeword = v)}
                            />
                            <TextField
                                id="promoted-tweet"
                                label="🔗 Promoted Tweet"
                                placeholder="Tweet URL or handle"
                                value={config.promoted_tweet.clone()}
                                error={form.field_error("promoted_tweet")}
                                oninput={update(|c, v| c.promoted_tweet = v)}
                            />
                            <TextField
                                id="min-ranking"
                                label="🏆 Minimum Ranking"
                                placeholder="Enter minimum rank"
                                value={config.min_ranking.clone()}
                                error={form.field_error("min_ranking")}
                                oninput={update(|c, v| c.min_ranking = v)}
                            />
                            <TextField
                                id="min-volume"
                                label="$ Minimum Volume"
                                placeholder="Enter minimum volume"
                                value={config.min_volume.clone()}
                                error={form.field_error("min_volume")}
                                oninput={update(|c, v| c.min_volume = v)}
                            />
                        </div>

                        <div class="pt-4 mt-6 border-t border-gray-200 dark:border-gray-700">
                            <div class="flex items-center justify-center p-4 bg-blue-600/10 rounded-lg border border-blue-600/20">
                                <span class="text-lg font-semibold text-blue-600 dark:text-blue-400">
                                    {format!("👥 {} eligible entries", eligible.len())}
                                </span>
                            </div>
                        </div>

                        <div class="flex space-x-4 mt-6">
                            <button
                                class={classes!(styles::BUTTON_PRIMARY, "flex-1")}
                                disabled={eligible.is_empty()}
                                onclick={on_view_wheel}
                            >
                                {"👁 View Wheel"}
                            </button>
                            <button class={styles::BUTTON_SECONDARY} onclick={on_save}>{"Save Configuration"}</button>
                        </div>
                    </div>

                    <div class={styles::CARD}>
                        <h2 class={classes!(styles::CARD_TITLE, "mb-4")}>{"🏆 Winners"}</h2>
                        if winners.is_empty() {
                            <div class={classes!(styles::TEXT_SECONDARY, "text-center", "py-8")}>
                                <div class="text-5xl mb-4 opacity-50">{"🏆"}</div>
                                <p>{"No winners yet. Start a raffle to see results here."}</p>
                            </div>
                        } else {
                            <ol class="space-y-2">
                                { for winners.iter().enumerate().map(|(i, winner)| html! {
                                    <li key={i} class="flex items-center justify-between">
                                        <span class="font-medium text-gray-900 dark:text-white">{format!("{}. {}", i + 1, winner.name)}</span>
                                        <span class={styles::TEXT_SMALL}>{format!("Rank #{}", winner.rank)}</span>
                                    </li>
                                })}
                            </ol>
                        }
                    </div>
                </div>
            </section>

            <SpinWheel
                is_open={*show_wheel}
                on_close={on_close_wheel}
                eligible_users={eligible}
                on_history={on_history}
            />
        </Base>
    }
}
