use climate_monitor_model::{config::Config, dashboard::Dashboard};
use log::info;
use tokio::sync::mpsc;
use yew::{platform, prelude::*};

use crate::readings::{self, HttpSource, Interval, Polled};

#[derive(Default, Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub config: Config,
}

pub struct App {
    dashboard: Dashboard,
}

const MAX_POLLED_OUTCOMES: usize = 10;

pub enum Message {
    Polled { polled: Polled },
}

impl Component for App {
    type Message = Message;

    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let config = &ctx.props().config;

        let (outcomes, mut outcome_receiver) = mpsc::channel(MAX_POLLED_OUTCOMES);

        info!(
            "Polling {} every {}ms",
            config.endpoint,
            config.interval.as_millis()
        );

        // Spawn the polling task. It knows nothing of components and only
        // hands over the outcome of each cycle.

        platform::spawn_local(readings::task(
            HttpSource::new(config.endpoint.clone()),
            Interval::new(config.interval),
            outcomes,
        ));

        // Spawn a task that maps polling outcomes to messages for this
        // component.

        let task_link = ctx.link().clone();
        platform::spawn_local(async move {
            while let Some(polled) = outcome_receiver.recv().await {
                task_link.send_message(Message::Polled { polled });
            }
        });

        Self {
            dashboard: Dashboard::new(&config.labels),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Polled { polled } => self
                .dashboard
                .on_polled(&ctx.props().config.labels, polled),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <main>
                <h1>{ "Climate" }</h1>
                <section class="readings">
                    <div class="reading">
                        <span id="temp">{ &self.dashboard.temperature }</span>
                    </div>
                    <div class="reading">
                        <span id="hum">{ &self.dashboard.humidity }</span>
                    </div>
                </section>
                <footer>
                    <span id="time">{ &self.dashboard.status }</span>
                </footer>
            </main>
        }
    }
}
