// Handle dashboard display concerns

use log::debug;

use crate::{
    poll::Polled,
    reading::{format_number, Outcome, Reading, Snapshot},
};

/// Every user visible string of the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct Labels {
    pub placeholder: &'static str,
    pub temperature_unit: &'static str,
    pub humidity_unit: &'static str,
    pub updated: &'static str,
    pub now: &'static str,
    pub no_data: &'static str,
    pub load_error: &'static str,
}

impl Labels {
    pub fn russian() -> Self {
        Self {
            placeholder: "—",
            temperature_unit: "°C",
            humidity_unit: "%",
            updated: "Обновление:",
            now: "сейчас",
            no_data: "нет данных",
            load_error: "Ошибка загрузки",
        }
    }

    pub fn english() -> Self {
        Self {
            placeholder: "—",
            temperature_unit: "°C",
            humidity_unit: "%",
            updated: "Updated:",
            now: "now",
            no_data: "no data",
            load_error: "Load error",
        }
    }

    fn quantity(&self, value: Option<f64>, unit: &str) -> String {
        match value {
            Some(value) => format!("{} {unit}", format_number(value)),
            None => format!("{} {unit}", self.placeholder),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::russian()
    }
}

// Declare the three text fields and how polling outcomes are applied to them

#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    pub temperature: String,
    pub humidity: String,
    pub status: String,
}

impl Dashboard {
    pub fn new(labels: &Labels) -> Self {
        Self {
            temperature: labels.quantity(None, labels.temperature_unit),
            humidity: labels.quantity(None, labels.humidity_unit),
            status: String::new(),
        }
    }

    /// Apply the outcome of a polling cycle. Outcomes are applied in the
    /// order their cycles complete, so a slow cycle overwrites whatever a
    /// later issued one rendered. Returns true when any text changed.
    pub fn on_polled(&mut self, labels: &Labels, polled: Polled) -> bool {
        let before = self.clone();
        render(self, labels, &polled.outcome);
        let changed = *self != before;
        debug!(
            "Applied polling cycle {} ({})",
            polled.seq,
            if changed { "changed" } else { "unchanged" }
        );
        changed
    }
}

/// Render one outcome. A failed fetch only touches the status so that the
/// last known values stay visible.
pub fn render(dashboard: &mut Dashboard, labels: &Labels, outcome: &Outcome) {
    match outcome {
        Ok(Snapshot::Latest(Reading {
            temperature,
            humidity,
            received_at,
            ..
        })) => {
            dashboard.temperature = labels.quantity(*temperature, labels.temperature_unit);
            dashboard.humidity = labels.quantity(*humidity, labels.humidity_unit);
            let when = received_at
                .as_deref()
                .filter(|received_at| !received_at.is_empty())
                .unwrap_or(labels.now);
            dashboard.status = format!("{} {when}", labels.updated);
        }

        Ok(Snapshot::Empty) => {
            dashboard.temperature = labels.quantity(None, labels.temperature_unit);
            dashboard.humidity = labels.quantity(None, labels.humidity_unit);
            dashboard.status = format!("{} {}", labels.updated, labels.no_data);
        }

        Err(_) => {
            dashboard.status = labels.load_error.to_string();
        }
    }
}
