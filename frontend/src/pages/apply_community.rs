use gloo_timers::future::TimeoutFuture;
use shared::application::CommunityApplication;
use shared::constants::{APPLICATION_SUBMITTED, APPLICATION_SUBMIT_DELAY_MS};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::TextField;
use crate::hooks::use_form_state;
use crate::{base::Base, styles, Route};

#[function_component(ApplyCommunity)]
pub fn apply_community() -> Html {
    let application = use_state(CommunityApplication::default);
    let submitting = use_state(|| false);
    let form = use_form_state();

    let update = |apply: fn(&mut CommunityApplication, String)| {
        let application = application.clone();
        Callback::from(move |value: String| {
            let mut next = (*application).clone();
            apply(&mut next, value);
            application.set(next);
        })
    };

    let onsubmit = {
        let application = application.clone();
        let submitting = submitting.clone();
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if let Err(errors) = application.check() {
                form.handle_field_errors.emit(errors);
                return;
            }

            submitting.set(true);
            let application = application.clone();
            let submitting = submitting.clone();
            let form = form.clone();
            spawn_local(async move {
                // No backend yet; stand in for the request round trip
                TimeoutFuture::new(APPLICATION_SUBMIT_DELAY_MS).await;
                log::info!("Community application submitted for '{}'", application.community_name);
                form.handle_success.emit(APPLICATION_SUBMITTED.to_string());
                application.set(CommunityApplication::default());
                submitting.set(false);
            });
        })
    };

    let busy = *submitting;

    html! {
        <Base>
            <section class="px-6 pt-16 pb-12">
                <div class="max-w-4xl mx-auto">
                    <Link<Route> to={Route::Home} classes={styles::LINK}>{"← Back to Communities"}</Link<Route>>
                    <div class="text-center mt-8">
                        <h1 class="text-5xl md:text-6xl font-bold mb-6">
                            <span class="text-gray-900 dark:text-white">{"Apply to Create"}</span>
                            <br />
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-400">{"Your Community"}</span>
                        </h1>
                        <p class={classes!(styles::HERO_TEXT, "mb-8")}>
                            {"Join our network of creators and build a thriving community with prizes and competitions."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="px-6 pb-20">
                <div class={classes!(styles::CARD, "max-w-2xl", "mx-auto")}>
                    <div class="text-center pb-8">
                        <h2 class={styles::TEXT_H2}>{"Community Application"}</h2>
                        <p class={styles::TEXT_SECONDARY}>{"Tell us about your community and how you'd like to engage your audience"}</p>
                    </div>

                    if !form.success.is_empty() {
                        <div class={classes!(styles::ALERT_SUCCESS, "mb-6")}>{&form.success}</div>
                    }

                    <form {onsubmit} class="space-y-6">
                        <div class="space-y-4">
                            <h3 class={styles::CARD_TITLE}>{"👥 Community Details"}</h3>
                            <TextField
                                id="communityName"
                                label="Community Name"
                                placeholder="Enter your community name"
                                value={application.community_name.clone()}
                                error={form.field_error("community_name")}
                                disabled={busy}
                                oninput={update(|a, v| a.community_name = v)}
                            />
                            <TextField
                                id="email"
                                label="Email Address"
                                input_type="email"
                                placeholder="your@email.com"
                                value={application.email.clone()}
                                error={form.field_error("email")}
                                disabled={busy}
                                oninput={update(|a, v| a.email = v)}
                            />
                        </div>

                        <div class="space-y-4">
                            <h3 class={styles::CARD_TITLE}>{"⚡ Platform Accounts"}</h3>
                            <TextField
                                id="yeetUsername"
                                label="Yeet Username"
                                placeholder="Your Yeet username"
                                value={application.yeet_username.clone()}
                                error={form.field_error("yeet_username")}
                                disabled={busy}
                                oninput={update(|a, v| a.yeet_username = v)}
                            />
                            <TextField
                                id="telegramHandle"
                                label="Telegram Handle"
                                placeholder="@yourtelegram"
                                value={application.telegram_handle.clone()}
                                error={form.field_error("telegram_handle")}
                                disabled={busy}
                                oninput={update(|a, v| a.telegram_handle = v)}
                            />
                        </div>

                        <div class="space-y-4">
                            <h3 class={styles::CARD_TITLE}>{"🌐 Social Links"}</h3>
                            <TextField
                                id="twitterUrl"
                                label="Twitter URL"
                                input_type="url"
                                placeholder="https://twitter.com/yourhandle"
                                value={application.twitter_url.clone()}
                                error={form.field_error("twitter_url")}
                                disabled={busy}
                                oninput={update(|a, v| a.twitter_url = v)}
                            />
                            <TextField
                                id="discordUrl"
                                label="Discord URL"
                                input_type="url"
                                placeholder="https://discord.gg/yourserver"
                                value={application.discord_url.clone()}
                                error={form.field_error("discord_url")}
                                disabled={busy}
                                oninput={update(|a, v| a.discord_url = v)}
                            />
                            <TextField
                                id="websiteUrl"
                                label="Website URL"
                                input_type="url"
                                placeholder="https://yourwebsite.com"
                                value={application.website_url.clone()}
                                error={form.field_error("website_url")}
                                disabled={busy}
                                oninput={update(|a, v| a.website_url = v)}
                            />
                            <TextField
                                id="otherSocials"
                                label="Other Socials"
                                placeholder="Any other social media links or handles"
                                multiline=true
                                value={application.other_socials.clone()}
                                disabled={busy}
                                oninput={update(|a, v| a.other_socials = v)}
                            />
                        </div>

                        <button type="submit" disabled={busy} class={classes!(styles::BUTTON_PRIMARY, "w-full", "h-12")}>
                            if busy {
                                <svg class={classes!(styles::LOADING_SPINNER, "mr-2", "text-white")} xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                                    <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                                    <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"></path>
                                </svg>
                                {"Submitting Application..."}
                            } else {
                                {"Submit Application"}
                            }
                        </button>
                    </form>
                </div>
            </section>
        </Base>
    }
}
