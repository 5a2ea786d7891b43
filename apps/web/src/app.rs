use enviroscreen::{BACKEND_ERROR_NOTICE, FormSession, PredictionClient};
use enviroscreen_types::{Indicator, Prediction};
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub enum Msg {
    Edited(Indicator, String),
    Submit,
    Received(Prediction),
    Failed(String),
    /// Sent by the session's subscription; the only message that redraws.
    Refresh,
}

/// The CalEnviroScreen predictor page: ten numeric inputs, a submit button
/// and the latest classification, all bound to one [`FormSession`].
pub struct PredictorPage {
    session: FormSession,
    client: PredictionClient,
}

impl Component for PredictorPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut session = FormSession::new();
        let link = ctx.link().clone();
        session.subscribe(move |_event| link.send_message(Msg::Refresh));

        Self {
            session,
            client: PredictionClient::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Msg) -> bool {
        match msg {
            Msg::Edited(indicator, raw) => {
                // Input that is not a finite number keeps the prior value.
                let _ = self.session.set_field(indicator, &raw);
                false
            }
            Msg::Submit => {
                let record = self.session.begin_submission();
                let client = self.client.clone();
                ctx.link().send_future(async move {
                    match client.predict(&record).await {
                        Ok(prediction) => Msg::Received(prediction),
                        Err(error) => Msg::Failed(error.to_string()),
                    }
                });
                false
            }
            Msg::Received(prediction) => {
                self.session.complete_submission(prediction);
                false
            }
            Msg::Failed(error) => {
                tracing::error!(error = %error, "prediction request failed");
                self.session.fail_submission();
                alert(BACKEND_ERROR_NOTICE);
                false
            }
            Msg::Refresh => true,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="min-h-screen p-6 bg-gray-100">
                <div class="max-w-xl mx-auto bg-white p-8 rounded-2xl shadow-xl">
                    <h1 class="text-2xl font-bold mb-6 text-center">
                        { "CalEnviroScreen Predictor" }
                    </h1>

                    { for Indicator::ALL.iter().map(|indicator| self.view_field(ctx, *indicator)) }

                    <button
                        class="w-full bg-blue-600 text-white p-3 rounded hover:bg-blue-700 mt-4"
                        onclick={ctx.link().callback(|_| Msg::Submit)}
                    >
                        { "Predict" }
                    </button>

                    { self.view_result() }
                </div>
            </div>
        }
    }
}

impl PredictorPage {
    fn view_field(&self, ctx: &Context<Self>, indicator: Indicator) -> Html {
        let oninput = ctx.link().callback(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            Msg::Edited(indicator, input.value())
        });

        html! {
            <div class="mb-4" key={indicator.as_str()}>
                <label class="block font-medium mb-1 capitalize">{ indicator.label() }</label>
                <input
                    class="w-full p-2 border rounded"
                    type="number"
                    step="0.01"
                    name={indicator.as_str()}
                    value={self.session.record().get(indicator).to_string()}
                    {oninput}
                />
            </div>
        }
    }

    fn view_result(&self) -> Html {
        let Some(result) = self.session.result() else {
            return Html::default();
        };

        html! {
            <div class="mt-6 p-4 border rounded text-center">
                <p class="text-lg font-semibold">
                    { format!("Prediction: {}", result.label()) }
                </p>
                <p>{ format!("Confidence: {}%", result.confidence_percent()) }</p>
            </div>
        }
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
