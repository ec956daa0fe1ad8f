use log::info;
use yew::prelude::*;

/// Early-access signup. Nothing is sent anywhere; submitting only swaps in the confirmation.
#[function_component(LeadForm)]
pub fn lead_form() -> Html {
    let submitted = use_state(|| false);

    let onsubmit = {
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Lead form submitted");
            submitted.set(true);
        })
    };

    if *submitted {
        return html! {
            <div class="form-confirmation">
                <div class="confirmation-icon">{"🏅"}</div>
                <h3>{"You're on the list!"}</h3>
                <p>{"We'll be in touch with early access details soon."}</p>
            </div>
        };
    }

    html! {
        <form class="lead-form" {onsubmit}>
            <div>
                <label>{"Name"}</label>
                <input type="text" placeholder="Your name" required=true />
            </div>
            <div>
                <label>{"Email"}</label>
                <input type="email" placeholder="you@example.com" required=true />
            </div>
            <div>
                <label>{"Neighborhood"}</label>
                <input type="text" placeholder="Sam Hughes, Armory Park, Iron Horse..." required=true />
            </div>
            <button type="submit" class="cta-button">{"Join the list"}</button>
            <p class="form-note">
                {"By joining, you agree to receive updates about Tucson Impact Ledger."}
            </p>
        </form>
    }
}
