use shared::shared_spin_wheel::WinnerRecord;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinnerAnnouncementProps {
    pub winner: Option<WinnerRecord>,
}

#[function_component(WinnerAnnouncement)]
pub fn winner_announcement(props: &WinnerAnnouncementProps) -> Html {
    let Some(winner) = &props.winner else {
        return html! {};
    };

    html! {
        <div class="flex flex-col items-center justify-center">
            <div class={classes!(
                "flex",
                "flex-col",
                "items-center",
                "px-6",
                "py-4",
                "rounded-xl",
                "bg-gradient-to-r",
                "from-yellow-400",
                "to-orange-500",
                "border-2",
                "border-yellow-300",
                "text-white",
                "shadow-lg",
                "animate-bounce"
            )}>
                <span class="text-sm uppercase tracking-wide">{"🎉 Winner"}</span>
                <span class="text-2xl font-bold">{&winner.name}</span>
                <span class="text-sm opacity-90">{format!("Rank #{}", winner.rank)}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_class = if props.is_spinning {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "inline-block", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={props.is_spinning}
                class="relative px-8 py-4 font-bold text-lg transition-all duration-300 border-2 border-transparent hover:border-white focus:outline-none bg-transparent"
            >
                <div class="flex items-center justify-center">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{if props.is_spinning { "Spinning..." } else { "🎰 Spin the Wheel" }}</span>
                </div>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WinnersListProps {
    pub winners: Vec<WinnerRecord>,
    pub on_clear: Callback<MouseEvent>,
}

#[function_component(WinnersList)]
pub fn winners_list(props: &WinnersListProps) -> Html {
    if props.winners.is_empty() {
        return html! {};
    }

    html! {
        <div class="bg-gray-50 dark:bg-gray-800/50 rounded-lg p-4">
            <div class="flex items-center justify-between mb-3">
                <h3 class="font-semibold text-gray-900 dark:text-white">
                    {format!("🏆 Winners ({})", props.winners.len())}
                </h3>
                <button class={styles::BUTTON_LINK} onclick={props.on_clear.clone()}>{"Clear All"}</button>
            </div>
            <div class="space-y-2 max-h-40 overflow-y-auto">
                { for props.winners.iter().enumerate().map(|(i, winner)| html! {
                    <div key={i} class="flex items-center justify-between text-sm">
                        <span class="font-medium text-gray-900 dark:text-white">
                            {format!("{}. {}", i + 1, winner.name)}
                        </span>
                        <span class={styles::TEXT_SECONDARY}>{format!("Rank #{}", winner.rank)}</span>
                    </div>
                })}
            </div>
        </div>
    }
}
