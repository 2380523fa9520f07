use shared::countdown::{LeaderboardPeriod as Period, CONCLUDED_LABEL, PERIOD_TICK_MS};
use yew::prelude::*;

use crate::hooks::use_now;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LeaderboardPeriodProps {
    pub period: Period,
}

#[function_component(LeaderboardPeriod)]
pub fn leaderboard_period(props: &LeaderboardPeriodProps) -> Html {
    let now = use_now(PERIOD_TICK_MS);
    let period = &props.period;

    let time_left = period.time_left(now);
    let concluded = period.is_active && time_left == CONCLUDED_LABEL;
    let bar_style = format!("width: {:.2}%", period.progress_percent(now));
    let bar_class = if period.is_active { "bg-blue-600" } else { "bg-gray-400" };

    html! {
        <div class={styles::CARD}>
            <div class="flex flex-col space-y-2 md:flex-row md:items-center md:justify-between md:space-y-0 mb-4">
                <h3 class={styles::CARD_TITLE}>{"Leaderboard Period"}</h3>
                if period.is_active {
                    <span class="bg-blue-600 text-white text-xs font-semibold px-2 py-0.5 rounded-full w-fit">
                        { if concluded { time_left.clone() } else { format!("{} left", time_left) } }
                    </span>
                }
            </div>

            <div class="relative">
                <div class="absolute top-4 left-4 right-4 h-1 bg-gray-200 dark:bg-gray-700 rounded-full">
                    <div class={classes!("h-full", "rounded-full", "transition-all", "duration-1000", bar_class)} style={bar_style} />
                </div>
                <div class="flex justify-between items-center pt-10 md:pt-8 space-x-2">
                    <div class="text-center flex-1">
                        <span class="inline-block mb-1 md:mb-2 border border-blue-500/20 text-blue-600 dark:text-blue-400 text-xs px-2 py-0.5 rounded-full">
                            {Period::format_date(period.start)}
                        </span>
                        <div class={styles::TEXT_SMALL}>{"Start"}</div>
                    </div>
                    <div class="text-center flex-1">
                        <span class="inline-block mb-1 md:mb-2 border border-blue-500/20 text-blue-600 dark:text-blue-400 text-xs px-2 py-0.5 rounded-full">
                            {Period::format_date(period.end)}
                        </span>
                        <div class={styles::TEXT_SMALL}>{"End"}</div>
                    </div>
                </div>
            </div>

            if concluded {
                <div class={classes!(styles::TEXT_SECONDARY, "text-center", "mt-4")}>{"Leaderboard Concluded"}</div>
            }
        </div>
    }
}
