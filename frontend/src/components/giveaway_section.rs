use shared::countdown::{Giveaway, GIVEAWAY_TICK_MS};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_now;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct GiveawaySectionProps {
    pub giveaway: Giveaway,
}

#[function_component(GiveawaySection)]
pub fn giveaway_section(props: &GiveawaySectionProps) -> Html {
    let now = use_now(GIVEAWAY_TICK_MS);
    let codeword = use_state(String::new);

    let giveaway = &props.giveaway;
    let clock = giveaway.clock(now);
    let open = giveaway.accepts_entries(now);

    let on_codeword = {
        let codeword = codeword.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            codeword.set(input.value());
        })
    };

    let on_submit = {
        let codeword = codeword.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Entries need a signed-in account, which this build doesn't have
            log::info!("Raffle entry attempted with codeword '{}'", codeword.trim());
        })
    };

    let (badge_class, badge_text) = if open {
        ("bg-green-500 text-white animate-pulse", "LIVE!")
    } else {
        ("bg-red-500 text-white", "ENDED")
    };

    html! {
        <div class="bg-gradient-to-r from-blue-600/10 to-blue-600/5 border border-blue-500/30 rounded-lg shadow-lg p-4 md:p-6">
            <div class="flex flex-col space-y-3 md:flex-row md:items-center md:justify-between md:space-y-0 mb-4">
                <div class="flex items-center space-x-2 md:space-x-3">
                    <span class="text-xl">{"🎁"}</span>
                    <h3 class={styles::TEXT_H3}>{format!("{}:", giveaway.title)}</h3>
                    <span class={classes!("text-xs", "font-semibold", "px-2", "py-0.5", "rounded-full", badge_class)}>
                        {badge_text}
                    </span>
                </div>
                if !clock.is_expired() {
                    <div class="flex items-center space-x-2 text-blue-600 dark:text-blue-400">
                        <span>{"⏱"}</span>
                        <span class="font-mono text-base md:text-lg font-bold">{clock.label()}</span>
                    </div>
                }
            </div>

            <p class={classes!(styles::TEXT_SECONDARY, "text-sm", "md:text-base", "mb-4")}>{&giveaway.description}</p>

            if open {
                <form onsubmit={on_submit} class="space-y-3 md:space-y-4">
                    <div class="flex flex-col space-y-2 md:flex-row md:space-y-0 md:space-x-2">
                        <input
                            type="text"
                            placeholder="Enter codeword..."
                            value={(*codeword).clone()}
                            oninput={on_codeword}
                            class={classes!(styles::INPUT, "mt-0")}
                        />
                        <button
                            type="submit"
                            class={classes!(styles::BUTTON_PRIMARY, "w-full", "md:w-auto")}
                            disabled={codeword.trim().is_empty()}
                        >
                            {"Submit Entry"}
                        </button>
                    </div>
                    <div class={styles::TEXT_SMALL}>{"You must be logged in to enter raffles."}</div>
                </form>
            } else {
                <div class="text-center py-4">
                    <button class={styles::BUTTON_SECONDARY}>{"Sign in with Kick"}</button>
                </div>
            }
        </div>
    }
}
