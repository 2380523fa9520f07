use shared::eligibility::RaffleCriteria;
use shared::shared_spin_wheel::Entrant;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::spin_wheel::SpinWheel;
use crate::styles;

/// Placeholder count shown until the host runs a calculation.
const INITIAL_ELIGIBLE_ENTRIES: usize = 142;

#[derive(Properties, PartialEq)]
pub struct RaffleAdminProps {
    pub community_name: String,
    pub total_members: String,
    #[prop_or_default]
    pub eligible_users: Vec<Entrant>,
}

#[function_component(RaffleAdmin)]
pub fn raffle_admin(props: &RaffleAdminProps) -> Html {
    let min_ranking = use_state(String::new);
    let min_volume = use_state(String::new);
    let eligible_entries = use_state(|| INITIAL_ELIGIBLE_ENTRIES);
    let show_wheel = use_state(|| false);

    let criteria = RaffleCriteria::parse(&min_ranking, &min_volume);
    let filtered = match &criteria {
        Ok(criteria) => criteria.filter(&props.eligible_users),
        Err(_) => Vec::new(),
    };

    let on_min_ranking = {
        let min_ranking = min_ranking.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            min_ranking.set(input.value());
        })
    };

    let on_min_volume = {
        let min_volume = min_volume.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            min_volume.set(input.value());
        })
    };

    let on_calculate = {
        let eligible_entries = eligible_entries.clone();
        let count = filtered.len();
        Callback::from(move |_: MouseEvent| {
            log::info!("Calculated {} eligible entries", count);
            eligible_entries.set(count);
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

    html! {
        <div class={styles::CARD}>
            <div class="mb-6">
                <h2 class={classes!(styles::TEXT_H2, "flex", "items-center", "gap-2")}>{"🎲 Host Raffle"}</h2>
                <span class="inline-block mt-2 text-xs font-semibold px-2 py-0.5 rounded-full bg-gray-100 dark:bg-gray-700 text-gray-800 dark:text-gray-200">
                    {&props.community_name}
                </span>
            </div>

            <div class="space-y-6">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <label for="minRanking" class={styles::TEXT_LABEL}>{"Minimum Ranking"}</label>
                        <input
                            id="minRanking"
                            placeholder="Enter ranking threshold"
                            value={(*min_ranking).clone()}
                            oninput={on_min_ranking}
                            class={styles::INPUT}
                        />
                    </div>
                    <div>
                        <label for="minVolume" class={styles::TEXT_LABEL}>{"Minimum Volume"}</label>
                        <input
                            id="minVolume"
                            placeholder="Enter volume threshold"
                            value={(*min_volume).clone()}
                            oninput={on_min_volume}
                            class={styles::INPUT}
                        />
                    </div>
                </div>

                if let Err(e) = &criteria {
                    <div class={styles::ALERT_ERROR}>{e.to_string()}</div>
                }

                <button class={classes!(styles::BUTTON_SECONDARY, "w-full")} onclick={on_calculate}>
                    {"📈 Calculate Eligible Entries"}
                </button>

                <div class="bg-gray-50 dark:bg-gray-800/50 border border-blue-500/20 rounded-lg p-4">
                    <div class="flex items-center justify-between">
                        <span class="font-medium text-gray-900 dark:text-white">{"👥 Eligible Entries"}</span>
                        <span class="text-lg px-3 py-1 border border-blue-500/30 rounded-full text-blue-600 dark:text-blue-400">
                            {*eligible_entries}
                        </span>
                    </div>
                </div>

                <div class="flex gap-3">
                    <button
                        class={classes!(styles::BUTTON_PRIMARY, "flex-1")}
                        disabled={filtered.is_empty()}
                        onclick={on_view_wheel}
                    >
                        {"👁 View Wheel"}
                    </button>
                    <button class={classes!(styles::BUTTON_SECONDARY, "flex-1")}>{"Go Offline"}</button>
                </div>

                <div class="pt-4 border-t border-gray-200 dark:border-gray-700">
                    <div class={classes!(styles::TEXT_SMALL, "flex", "items-center", "justify-between")}>
                        <span>{"Total Community Members"}</span>
                        <span class="font-medium">{&props.total_members}</span>
                    </div>
                </div>
            </div>

            <SpinWheel
                is_open={*show_wheel}
                on_close={on_close_wheel}
                eligible_users={filtered}
            />
        </div>
    }
}
