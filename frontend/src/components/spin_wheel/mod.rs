mod wheel_canvas;
mod wheel_utils;

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::constants::NO_ELIGIBLE_USERS;
use shared::shared_spin_wheel::*;
use yew::prelude::*;

use crate::config::get_wheel_config;
use crate::styles;

use wheel_canvas::WheelCanvas;
use wheel_utils::{SpinButton, WinnerAnnouncement, WinnersList};

pub enum WheelAction {
    SetParticipants(Vec<Entrant>),
    Spin(FixedSpin),
    Settle(PendingSpin),
    Reset,
    ClearHistory,
    Close,
}

/// Reducer wrapper so every wheel transition goes through `WheelState`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelStore(pub WheelState);

impl Reducible for WheelStore {
    type Action = WheelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = self.0.clone();
        let next = match action {
            WheelAction::SetParticipants(participants) => state.set_participants(participants),
            WheelAction::Spin(mut roll) => state.draw(&mut roll).0,
            WheelAction::Settle(spin) => state.settle(spin),
            WheelAction::Reset => state.reset(),
            WheelAction::ClearHistory => state.clear_history(),
            WheelAction::Close => state.close(),
        };
        Rc::new(Self(next))
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinWheelProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub eligible_users: Vec<Entrant>,
    #[prop_or_default]
    pub on_history: Option<Callback<Vec<WinnerRecord>>>,
}

#[function_component(SpinWheel)]
pub fn spin_wheel(props: &SpinWheelProps) -> Html {
    let wheel = use_reducer(|| WheelStore(WheelState::new(Vec::new(), get_wheel_config())));
    let rng = use_mut_ref(|| RandomSpin(SmallRng::from_entropy()));

    // Keep the pool in sync with the host's filters
    {
        let dispatcher = wheel.dispatcher();
        use_effect_with(props.eligible_users.clone(), move |users| {
            dispatcher.dispatch(WheelAction::SetParticipants(users.clone()));
            || ()
        });
    }

    // Closing the dialog throws away whatever was in flight
    {
        let dispatcher = wheel.dispatcher();
        use_effect_with(props.is_open, move |is_open| {
            if !*is_open {
                dispatcher.dispatch(WheelAction::Close);
            }
            || ()
        });
    }

    // Reveal the winner once the wheel animation has settled
    {
        let dispatcher = wheel.dispatcher();
        use_effect_with(wheel.0.pending(), move |pending| {
            let timeout = pending.map(|spin| {
                Timeout::new(spin.settle_delay_ms, move || {
                    dispatcher.dispatch(WheelAction::Settle(spin));
                })
            });
            move || drop(timeout)
        });
    }

    {
        let on_history = props.on_history.clone();
        use_effect_with(wheel.0.history().to_vec(), move |history| {
            if let Some(on_history) = on_history {
                on_history.emit(history.clone());
            }
            || ()
        });
    }

    let on_spin = {
        let wheel = wheel.clone();
        let rng = rng.clone();
        Callback::from(move |_: MouseEvent| {
            let state = &wheel.0;
            if !state.can_draw() {
                return;
            }
            let roll = FixedSpin::roll(&mut *rng.borrow_mut(), state.participants().len(), state.config());
            wheel.dispatch(WheelAction::Spin(roll));
        })
    };

    let on_reset = {
        let dispatcher = wheel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(WheelAction::Reset))
    };

    let on_clear = {
        let dispatcher = wheel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(WheelAction::ClearHistory))
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    let state = &wheel.0;

    if state.is_empty() {
        return html! {
            <div class={styles::MODAL_BACKDROP}>
                <div class={classes!(styles::MODAL, "max-w-md")}>
                    <h2 class={styles::TEXT_H3}>{"🏆 Raffle Wheel"}</h2>
                    <div class="text-center py-8">
                        <p class={classes!(styles::TEXT_SECONDARY, "mb-4")}>{NO_ELIGIBLE_USERS}</p>
                        <button class={styles::BUTTON_PRIMARY} onclick={on_close}>{"Close"}</button>
                    </div>
                </div>
            </div>
        };
    }

    let highlight = state.current_winner().map(|winner| winner.name.clone());

    html! {
        <div class={styles::MODAL_BACKDROP}>
            <div class={classes!(styles::MODAL, "max-w-2xl", "max-h-[90vh]", "overflow-y-auto")}>
                <h2 class={styles::TEXT_H3}>
                    {format!("🏆 Raffle Wheel - {} Eligible Users", state.participants().len())}
                </h2>

                <div class="space-y-6 mt-6">
                    <WheelCanvas
                        segments={state.segments()}
                        rotation={state.total_rotation()}
                        is_spinning={state.is_spinning()}
                        settle_delay_ms={state.config().settle_delay_ms}
                        highlight={highlight}
                    />

                    <WinnerAnnouncement winner={state.current_winner().cloned()} />

                    <div class="text-center">
                        <SpinButton is_spinning={state.is_spinning()} onclick={on_spin} />
                    </div>

                    <WinnersList winners={state.history().to_vec()} on_clear={on_clear} />

                    <div class="flex gap-3 pt-4 border-t border-gray-200 dark:border-gray-700">
                        <button
                            class={classes!(styles::BUTTON_SECONDARY, "flex-1")}
                            onclick={on_reset}
                            disabled={state.is_spinning()}
                        >
                            {"↻ Spin Again"}
                        </button>
                        <button class={classes!(styles::BUTTON_SECONDARY, "flex-1")} onclick={on_close}>
                            {"✕ Close"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
