use std::{cell::RefCell, time::Duration};

use async_trait::async_trait;
use climate_monitor_model::{
    dashboard::{Dashboard, Labels},
    poll::{self, ReadingSource},
    reading::{snapshot_from_body, FetchError, Outcome},
};
use test_log::test;
use tokio::{
    sync::mpsc,
    time::{self, Instant},
};

// Serves canned responses in the shape the sensor endpoint answers with.
struct Responses(RefCell<Vec<Result<&'static str, u16>>>);

#[async_trait(?Send)]
impl ReadingSource for Responses {
    async fn fetch(&self) -> Outcome {
        let next = self.0.borrow_mut().pop();
        match next {
            Some(Ok(body)) => snapshot_from_body(body.as_bytes()),
            Some(Err(status)) => Err(FetchError::Status(status)),
            None => Err(FetchError::Transport("connection refused".to_string())),
        }
    }
}

#[test(tokio::test(start_paused = true))]
async fn renders_each_cycle_in_turn() {
    let mut responses = vec![
        Ok(r#"[{"device":"kitchen","temperature":21.5,"humidity":40,"received_at":"12:00"}]"#),
        Err(503),
        Ok(r#"[{"temperature":21.5,"humidity":40},{"temperature":null,"humidity":41}]"#),
        Ok("not json"),
        Ok("[]"),
    ];
    responses.reverse();
    let source = Responses(RefCell::new(responses));

    let period = Duration::from_millis(1000);
    let ticker = time::interval_at(Instant::now() + period, period);
    let (sender, mut receiver) = mpsc::channel(10);

    let labels = Labels::default();
    let mut dashboard = Dashboard::new(&labels);
    let mut screens = Vec::new();

    tokio::select! {
        _ = poll::task(source, ticker, sender) => panic!("polling stopped"),
        _ = async {
            while screens.len() < 6 {
                let Some(polled) = receiver.recv().await else { break };
                dashboard.on_polled(&labels, polled);
                screens.push((
                    dashboard.temperature.clone(),
                    dashboard.humidity.clone(),
                    dashboard.status.clone(),
                ));
            }
        } => (),
    }

    let expected = [
        ("21.5 °C", "40 %", "Обновление: 12:00"),
        ("21.5 °C", "40 %", "Ошибка загрузки"),
        ("— °C", "41 %", "Обновление: сейчас"),
        ("— °C", "41 %", "Ошибка загрузки"),
        ("— °C", "— %", "Обновление: нет данных"),
        ("— °C", "— %", "Ошибка загрузки"),
    ];
    assert_eq!(screens.len(), expected.len());
    for (screen, (temperature, humidity, status)) in screens.iter().zip(expected) {
        assert_eq!(screen.0, temperature);
        assert_eq!(screen.1, humidity);
        assert_eq!(screen.2, status);
    }
}
